use super::{loss_percent, Diagnostic};
use crate::workflows::rulebook::ThresholdConfig;
use serde::Serialize;

pub const GAP_STEP_MINUTES: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProcessGapDiagnosis {
    Efficient {
        gap_minutes: f64,
        limit_minutes: f64,
        diagnosis: String,
        remediation: Vec<String>,
    },
    HighLoss {
        gap_minutes: f64,
        limit_minutes: f64,
        overage_minutes: f64,
        steps: u32,
        loss_rate: f64,
        diagnosis: String,
        remediation: Vec<String>,
    },
}

impl Diagnostic for ProcessGapDiagnosis {
    fn status_label(&self) -> &'static str {
        match self {
            Self::Efficient { .. } => "efficient",
            Self::HighLoss { .. } => "high_loss",
        }
    }

    fn loss_rate(&self) -> f64 {
        match self {
            Self::Efficient { .. } => 0.0,
            Self::HighLoss { loss_rate, .. } => *loss_rate,
        }
    }

    fn diagnosis(&self) -> &str {
        match self {
            Self::Efficient { diagnosis, .. } | Self::HighLoss { diagnosis, .. } => diagnosis,
        }
    }

    fn remediation(&self) -> &[String] {
        match self {
            Self::Efficient { remediation, .. } | Self::HighLoss { remediation, .. } => {
                remediation
            }
        }
    }
}

/// Graduated threshold: every started 10-minute block past the limit adds one step of loss.
pub fn process_gap(thresholds: &ThresholdConfig, gap_minutes: f64) -> ProcessGapDiagnosis {
    let limit_minutes = thresholds.gap_time_limit_min;

    if gap_minutes > limit_minutes {
        let overage_minutes = gap_minutes - limit_minutes;
        let steps = (overage_minutes / GAP_STEP_MINUTES).ceil() as u32;
        let loss_rate = f64::from(steps) * thresholds.gap_loss_per_10min;

        return ProcessGapDiagnosis::HighLoss {
            gap_minutes,
            limit_minutes,
            overage_minutes,
            steps,
            loss_rate,
            diagnosis: format!(
                "hand-off gap {gap_minutes} min exceeds the {limit_minutes} min standard; expected energy increase {}",
                loss_percent(loss_rate)
            ),
            remediation: vec![
                "Adjust the storage tank outlet pump flow".to_string(),
                "Raise temporary heating power".to_string(),
            ],
        };
    }

    ProcessGapDiagnosis::Efficient {
        gap_minutes,
        limit_minutes,
        diagnosis: "process hand-off is tight".to_string(),
        remediation: vec!["No intervention needed".to_string()],
    }
}
