use super::{loss_percent, Diagnostic};
use crate::workflows::rulebook::ThresholdConfig;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransportDiagnosis {
    Compliant {
        distance_km: f64,
        limit_km: f64,
        diagnosis: String,
        remediation: Vec<String>,
    },
    Risk {
        distance_km: f64,
        limit_km: f64,
        loss_rate: f64,
        diagnosis: String,
        remediation: Vec<String>,
    },
}

impl Diagnostic for TransportDiagnosis {
    fn status_label(&self) -> &'static str {
        match self {
            Self::Compliant { .. } => "compliant",
            Self::Risk { .. } => "risk",
        }
    }

    fn loss_rate(&self) -> f64 {
        match self {
            Self::Compliant { .. } => 0.0,
            Self::Risk { loss_rate, .. } => *loss_rate,
        }
    }

    fn diagnosis(&self) -> &str {
        match self {
            Self::Compliant { diagnosis, .. } | Self::Risk { diagnosis, .. } => diagnosis,
        }
    }

    fn remediation(&self) -> &[String] {
        match self {
            Self::Compliant { remediation, .. } | Self::Risk { remediation, .. } => remediation,
        }
    }
}

/// Single binary threshold: anything beyond the limit carries the full loss rate.
pub fn transport_impact(thresholds: &ThresholdConfig, distance_km: f64) -> TransportDiagnosis {
    let limit_km = thresholds.transport_distance_limit_km;

    if distance_km > limit_km {
        let loss_rate = thresholds.transport_loss_rate;
        return TransportDiagnosis::Risk {
            distance_km,
            limit_km,
            loss_rate,
            diagnosis: format!(
                "transport radius {distance_km} km exceeds the {limit_km} km baseline; expected energy increase {}",
                loss_percent(loss_rate)
            ),
            remediation: vec![
                "Switch on electric heat tracing to restore oil temperature".to_string(),
                "Re-plan the route for the next transport batch".to_string(),
            ],
        };
    }

    TransportDiagnosis::Compliant {
        distance_km,
        limit_km,
        diagnosis: "transport distance is within the baseline".to_string(),
        remediation: vec!["Keep the current route and make sure the insulation layer is intact".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::rulebook::RuleBook;

    fn thresholds() -> ThresholdConfig {
        RuleBook::standard().thresholds
    }

    #[test]
    fn distance_beyond_limit_is_a_risk() {
        let diagnosis = transport_impact(&thresholds(), 8.0);

        assert_eq!(diagnosis.status_label(), "risk");
        assert_eq!(diagnosis.loss_rate(), 0.06);
        assert!(diagnosis.diagnosis().contains("8 km"));
        assert!(diagnosis.diagnosis().contains("5 km"));
        assert_eq!(diagnosis.remediation().len(), 2);
    }

    #[test]
    fn diagnosis_reports_unrounded_distance() {
        let diagnosis = transport_impact(&thresholds(), 5.04);

        assert_eq!(diagnosis.status_label(), "risk");
        assert!(
            diagnosis.diagnosis().contains("5.04 km"),
            "{}",
            diagnosis.diagnosis()
        );
    }

    #[test]
    fn limit_itself_is_compliant() {
        let diagnosis = transport_impact(&thresholds(), 5.0);

        assert!(diagnosis.is_compliant());
        assert_eq!(diagnosis.loss_rate(), 0.0);
        assert_eq!(diagnosis.remediation().len(), 1);
    }

    #[test]
    fn loss_does_not_scale_with_distance() {
        let near = transport_impact(&thresholds(), 5.1);
        let far = transport_impact(&thresholds(), 29.0);

        assert_eq!(near.loss_rate(), far.loss_rate());
    }
}
