use crate::infra::load_rulebook;
use clap::Args;
use coldflow::error::AppError;
use coldflow::workflows::advisory::{
    AdvisoryService, LogisticsAdvice, ProductionAdvice, ProductionRequest,
};
use coldflow::workflows::fieldlog::{FieldLogImporter, FieldLogReport};
use coldflow::workflows::logistics::{loss_percent, Diagnostic, SiteObservation};
use coldflow::workflows::production::ProductionOutcome;
use coldflow::workflows::rulebook::MaterialShare;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ProductionArgs {
    /// Ambient temperature in ℃
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) temperature: f64,
    /// Oil viscosity in mPa·s
    #[arg(long)]
    pub(crate) viscosity: f64,
    /// Unoptimized energy cost, used to estimate savings
    #[arg(long)]
    pub(crate) baseline_cost: Option<f64>,
    /// JSON rule book replacing the configured tables
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Print the advice as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LogisticsArgs {
    /// Storage-to-site transport distance in km
    #[arg(long)]
    pub(crate) distance_km: f64,
    /// Equipment starts recorded today
    #[arg(long)]
    pub(crate) starts: u32,
    /// Equipment was preheated before starting
    #[arg(long)]
    pub(crate) preheated: bool,
    /// Mixing-to-storage hand-off time in minutes
    #[arg(long)]
    pub(crate) gap_minutes: f64,
    /// JSON rule book replacing the configured tables
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Print the diagnostics as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct FieldLogArgs {
    /// Field log CSV export (Date, Site, Distance Km, Starts, Preheated, Gap Minutes)
    #[arg(long)]
    pub(crate) path: PathBuf,
    /// JSON rule book replacing the configured tables
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RulesArgs {
    /// Rule book to validate; defaults to APP_RULES_PATH or the built-in tables
    #[arg(long)]
    pub(crate) path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    #[arg(long, default_value_t = -25.0, allow_negative_numbers = true)]
    pub(crate) temperature: f64,
    #[arg(long, default_value_t = 2500.0)]
    pub(crate) viscosity: f64,
    #[arg(long, default_value_t = 1000.0)]
    pub(crate) baseline_cost: f64,
    #[arg(long, default_value_t = 8.0)]
    pub(crate) distance_km: f64,
    #[arg(long, default_value_t = 3)]
    pub(crate) starts: u32,
    #[arg(long)]
    pub(crate) preheated: bool,
    #[arg(long, default_value_t = 45.0)]
    pub(crate) gap_minutes: f64,
    /// JSON rule book replacing the configured tables
    #[arg(long)]
    pub(crate) rules: Option<PathBuf>,
}

fn advisory_service(rules: Option<PathBuf>) -> Result<AdvisoryService, AppError> {
    Ok(AdvisoryService::new(Arc::new(load_rulebook(rules)?)))
}

pub(crate) fn run_production(args: ProductionArgs) -> Result<(), AppError> {
    let service = advisory_service(args.rules)?;
    let advice = service.production(&ProductionRequest {
        temperature_c: args.temperature,
        viscosity_mpa_s: args.viscosity,
        baseline_cost: args.baseline_cost,
    })?;

    if args.json {
        print_json("production advice", &advice);
    } else {
        render_production_advice(&advice, args.viscosity);
    }
    Ok(())
}

pub(crate) fn run_logistics(args: LogisticsArgs) -> Result<(), AppError> {
    let service = advisory_service(args.rules)?;
    let advice = service.logistics(SiteObservation {
        distance_km: args.distance_km,
        starts_count: args.starts,
        preheated: args.preheated,
        gap_minutes: args.gap_minutes,
    })?;

    if args.json {
        print_json("logistics diagnostics", &advice);
    } else {
        render_logistics_advice(&advice);
    }
    Ok(())
}

pub(crate) fn run_field_log(args: FieldLogArgs) -> Result<(), AppError> {
    let rulebook = load_rulebook(args.rules)?;
    let entries = FieldLogImporter::from_path(&args.path)?;
    let report = FieldLogReport::evaluate(&rulebook.thresholds, &entries);

    if args.json {
        print_json("field log report", &report);
    } else {
        println!("Field log {}", args.path.display());
        render_field_log_report(&report);
    }
    Ok(())
}

pub(crate) fn run_rules(args: RulesArgs) -> Result<(), AppError> {
    let rulebook = load_rulebook(args.path)?;
    println!("{}", rulebook.to_json_pretty()?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = advisory_service(args.rules)?;

    println!("Cold-climate heavy oil advisor demo");
    println!("\n[Production] mixing optimization");
    let advice = service.production(&ProductionRequest {
        temperature_c: args.temperature,
        viscosity_mpa_s: args.viscosity,
        baseline_cost: Some(args.baseline_cost),
    })?;
    render_production_advice(&advice, args.viscosity);

    println!("\n[Logistics] site energy-loss diagnostics");
    let advice = service.logistics(SiteObservation {
        distance_km: args.distance_km,
        starts_count: args.starts,
        preheated: args.preheated,
        gap_minutes: args.gap_minutes,
    })?;
    render_logistics_advice(&advice);

    Ok(())
}

fn print_json<T: Serialize>(label: &str, value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("{label} unavailable as JSON: {err}"),
    }
}

pub(crate) fn blend_summary(ratio: &[MaterialShare]) -> String {
    ratio
        .iter()
        .map(|share| format!("{} {:.0}%", share.material, share.fraction * 100.0))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_production_advice(advice: &ProductionAdvice, viscosity_mpa_s: f64) {
    let recommendation = match &advice.outcome {
        ProductionOutcome::NotApplicable { .. } => {
            println!("- {}", advice.outcome.summary());
            return;
        }
        ProductionOutcome::Recommendation(recommendation) => recommendation,
    };

    println!(
        "- Zone {} ({}) at {}℃",
        recommendation.zone_name,
        recommendation.band.label(),
        advice.zone.temperature_c
    );
    println!("- Blend: {}", blend_summary(&recommendation.ratio));
    println!(
        "- Mixing speed {:.1} r/min (base {:.1} + {:.1} for {} mPa·s){}",
        recommendation.final_speed_rpm,
        recommendation.base_speed_rpm,
        recommendation.speed_adjustment_rpm,
        viscosity_mpa_s,
        if recommendation.is_speed_capped() {
            ", capped at the speed ceiling"
        } else {
            ""
        }
    );
    println!(
        "- Projected power ~{:.1} kW | energy coefficient {:.2} vs {:.2} unoptimized",
        recommendation.projected_power_kw,
        recommendation.energy_coeff,
        advice.unoptimized_coefficient
    );
    if let Some(savings) = advice.savings {
        println!("- Estimated savings against the unoptimized baseline: {savings:.2}");
    }
    if !advice.hardware_notes.is_empty() {
        println!("Hardware checklist:");
        for note in &advice.hardware_notes {
            println!("  - {note}");
        }
    }
}

fn render_diagnostic(title: &str, diagnostic: &impl Diagnostic) {
    let marker = if diagnostic.is_compliant() { "OK" } else { "!!" };
    println!(
        "[{marker}] {title}: {} | loss {}",
        diagnostic.status_label(),
        loss_percent(diagnostic.loss_rate())
    );
    println!("     {}", diagnostic.diagnosis());
    for step in diagnostic.remediation() {
        println!("     -> {step}");
    }
}

fn render_logistics_advice(advice: &LogisticsAdvice) {
    let observation = &advice.observation;
    println!(
        "- Inputs: {:.1} km transport | {} starts ({}) | {} min hand-off",
        observation.distance_km,
        observation.starts_count,
        if observation.preheated {
            "preheated"
        } else {
            "no preheat"
        },
        observation.gap_minutes
    );

    let diagnostics = &advice.diagnostics;
    render_diagnostic("Transport", &diagnostics.transport);
    render_diagnostic("Start/stop", &diagnostics.startup);
    for loss in diagnostics.startup.losses() {
        println!(
            "     * {} (+{})",
            loss.cause.describe(),
            loss_percent(loss.rate)
        );
    }
    render_diagnostic("Process gap", &diagnostics.process_gap);

    println!("Recommended operating conditions:");
    println!("  - {}", advice.guidance.transport);
    println!("  - {}", advice.guidance.startup);
    println!("  - {}", advice.guidance.process_gap);
}

fn render_field_log_report(report: &FieldLogReport) {
    println!(
        "- {} days recorded | {} fully compliant",
        report.entries.len(),
        report.compliant_days()
    );
    println!(
        "- Findings: transport {} | start/stop {} | process gap {}",
        report.transport_findings, report.startup_findings, report.process_gap_findings
    );

    for entry in &report.entries {
        let diagnostics = &entry.diagnostics;
        println!(
            "  {} {}: transport {} | start/stop {} | gap {}",
            entry.date,
            entry.site,
            diagnostics.transport.status_label(),
            diagnostics.startup.status_label(),
            diagnostics.process_gap.status_label()
        );
    }
}
