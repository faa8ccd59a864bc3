use super::{loss_percent, Diagnostic};
use crate::workflows::rulebook::ThresholdConfig;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StartupLossCause {
    ExcessiveStarts { starts_count: u32, daily_limit: u32 },
    ColdStart { min_preheat_minutes: u32 },
}

impl StartupLossCause {
    pub fn describe(&self) -> String {
        match self {
            Self::ExcessiveStarts {
                starts_count,
                daily_limit,
            } => format!("{starts_count} starts today exceed the daily limit of {daily_limit}"),
            Self::ColdStart { .. } => "equipment started without preheating".to_string(),
        }
    }
}

/// One rule that fired and the loss it adds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LossContribution {
    pub cause: StartupLossCause,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StartupDiagnosis {
    Compliant {
        starts_count: u32,
        preheated: bool,
        diagnosis: String,
        remediation: Vec<String>,
    },
    Warning {
        starts_count: u32,
        preheated: bool,
        losses: Vec<LossContribution>,
        total_loss: f64,
        diagnosis: String,
        remediation: Vec<String>,
    },
}

impl StartupDiagnosis {
    pub fn losses(&self) -> &[LossContribution] {
        match self {
            Self::Compliant { .. } => &[],
            Self::Warning { losses, .. } => losses,
        }
    }
}

impl Diagnostic for StartupDiagnosis {
    fn status_label(&self) -> &'static str {
        match self {
            Self::Compliant { .. } => "compliant",
            Self::Warning { .. } => "warning",
        }
    }

    fn loss_rate(&self) -> f64 {
        match self {
            Self::Compliant { .. } => 0.0,
            Self::Warning { total_loss, .. } => *total_loss,
        }
    }

    fn diagnosis(&self) -> &str {
        match self {
            Self::Compliant { diagnosis, .. } | Self::Warning { diagnosis, .. } => diagnosis,
        }
    }

    fn remediation(&self) -> &[String] {
        match self {
            Self::Compliant { remediation, .. } | Self::Warning { remediation, .. } => remediation,
        }
    }
}

/// Start frequency and preheat rules are evaluated independently; losses add up.
///
/// The sum is deliberately left uncapped.
pub fn startup_impact(
    thresholds: &ThresholdConfig,
    starts_count: u32,
    preheated: bool,
) -> StartupDiagnosis {
    let mut losses = Vec::new();
    let mut remediation = Vec::new();

    if starts_count > thresholds.daily_start_limit {
        losses.push(LossContribution {
            cause: StartupLossCause::ExcessiveStarts {
                starts_count,
                daily_limit: thresholds.daily_start_limit,
            },
            rate: thresholds.start_loss_rate,
        });
        remediation.push(format!(
            "Starts are too frequent ({starts_count} today); consolidate operations into fewer runs"
        ));
    }

    if !preheated {
        losses.push(LossContribution {
            cause: StartupLossCause::ColdStart {
                min_preheat_minutes: thresholds.min_preheat_minutes,
            },
            rate: thresholds.no_preheat_loss,
        });
        remediation.push(format!(
            "Started cold; preheat for at least {} minutes before the next start",
            thresholds.min_preheat_minutes
        ));
    }

    if losses.is_empty() {
        return StartupDiagnosis::Compliant {
            starts_count,
            preheated,
            diagnosis: "start/stop frequency and preheating are within limits".to_string(),
            remediation: vec!["Operation compliant, keep it up".to_string()],
        };
    }

    let total_loss: f64 = losses.iter().map(|loss| loss.rate).sum();
    let causes: Vec<String> = losses.iter().map(|loss| loss.cause.describe()).collect();

    StartupDiagnosis::Warning {
        starts_count,
        preheated,
        diagnosis: format!(
            "{}; expected energy increase {}",
            causes.join("; "),
            loss_percent(total_loss)
        ),
        losses,
        total_loss,
        remediation,
    }
}
