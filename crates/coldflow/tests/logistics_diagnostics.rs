use coldflow::workflows::logistics::{
    Diagnostic, LogisticsDiagnostics, ProcessGapDiagnosis, SiteObservation, StartupDiagnosis,
    TransportDiagnosis,
};
use coldflow::workflows::rulebook::{RuleBook, ThresholdConfig};

fn thresholds() -> ThresholdConfig {
    RuleBook::standard().thresholds
}

#[test]
fn transport_risk_and_boundary() {
    let thresholds = thresholds();
    let diagnostics = LogisticsDiagnostics::new(&thresholds);

    match diagnostics.transport_impact(8.0) {
        TransportDiagnosis::Risk {
            loss_rate,
            limit_km,
            ..
        } => {
            assert_eq!(loss_rate, 0.06);
            assert_eq!(limit_km, 5.0);
        }
        other => panic!("expected risk, got {other:?}"),
    }
    assert!(matches!(
        diagnostics.transport_impact(5.0),
        TransportDiagnosis::Compliant { .. }
    ));
}

#[test]
fn startup_rules_are_additive() {
    let thresholds = thresholds();
    let diagnostics = LogisticsDiagnostics::new(&thresholds);

    match diagnostics.startup_impact(3, false) {
        StartupDiagnosis::Warning {
            total_loss,
            remediation,
            losses,
            ..
        } => {
            assert!((total_loss - 0.65).abs() < 1e-12);
            assert_eq!(remediation.len(), 2);
            assert_eq!(losses.len(), 2);
        }
        other => panic!("expected warning, got {other:?}"),
    }

    let compliant = diagnostics.startup_impact(0, true);
    assert_eq!(compliant.status_label(), "compliant");
    assert_eq!(compliant.remediation().len(), 1);
}

#[test]
fn process_gap_rounds_partial_blocks_up() {
    let thresholds = thresholds();
    let diagnostics = LogisticsDiagnostics::new(&thresholds);

    match diagnostics.process_gap(45.0) {
        ProcessGapDiagnosis::HighLoss {
            steps, loss_rate, ..
        } => {
            assert_eq!(steps, 3);
            assert!((loss_rate - 0.24).abs() < 1e-12);
        }
        other => panic!("expected high loss, got {other:?}"),
    }
    assert!(matches!(
        diagnostics.process_gap(20.0),
        ProcessGapDiagnosis::Efficient { .. }
    ));
}

#[test]
fn diagnostics_are_pure() {
    let thresholds = thresholds();
    let diagnostics = LogisticsDiagnostics::new(&thresholds);
    let observation = SiteObservation {
        distance_km: 12.0,
        starts_count: 5,
        preheated: false,
        gap_minutes: 61.0,
    };

    let first = diagnostics.evaluate(&observation);
    let second = diagnostics.evaluate(&observation);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}

#[test]
fn custom_thresholds_are_honoured() {
    let mut thresholds = thresholds();
    thresholds.gap_time_limit_min = 30.0;
    thresholds.daily_start_limit = 5;
    let diagnostics = LogisticsDiagnostics::new(&thresholds);

    assert!(diagnostics.process_gap(30.0).is_compliant());
    assert!(diagnostics.startup_impact(5, true).is_compliant());
}
