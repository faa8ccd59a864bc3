//! Construction/logistics energy-loss diagnostics.
//!
//! Each evaluator compares one measured value against the threshold table and
//! returns a tagged result; none of them share state or call each other.

mod observation;
mod process_gap;
mod startup;
mod transport;

pub use observation::{ObservationError, SiteObservation};
pub use process_gap::{process_gap, ProcessGapDiagnosis, GAP_STEP_MINUTES};
pub use startup::{startup_impact, LossContribution, StartupDiagnosis, StartupLossCause};
pub use transport::{transport_impact, TransportDiagnosis};

use crate::workflows::rulebook::ThresholdConfig;
use serde::Serialize;
use tracing::debug;

/// Common read access over the diagnosis variants, for rendering.
pub trait Diagnostic {
    fn status_label(&self) -> &'static str;
    fn loss_rate(&self) -> f64;
    fn diagnosis(&self) -> &str;
    fn remediation(&self) -> &[String];

    fn is_compliant(&self) -> bool {
        matches!(self.status_label(), "compliant" | "efficient")
    }
}

/// Renders a fractional loss rate as a whole percentage, e.g. `0.06` -> `6%`.
pub fn loss_percent(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}

/// Evaluator set bound to one threshold table.
#[derive(Debug, Clone, Copy)]
pub struct LogisticsDiagnostics<'a> {
    thresholds: &'a ThresholdConfig,
}

impl<'a> LogisticsDiagnostics<'a> {
    pub fn new(thresholds: &'a ThresholdConfig) -> Self {
        Self { thresholds }
    }

    pub fn transport_impact(&self, distance_km: f64) -> TransportDiagnosis {
        transport_impact(self.thresholds, distance_km)
    }

    pub fn startup_impact(&self, starts_count: u32, preheated: bool) -> StartupDiagnosis {
        startup_impact(self.thresholds, starts_count, preheated)
    }

    pub fn process_gap(&self, gap_minutes: f64) -> ProcessGapDiagnosis {
        process_gap(self.thresholds, gap_minutes)
    }

    pub fn evaluate(&self, observation: &SiteObservation) -> SiteDiagnostics {
        let diagnostics = SiteDiagnostics {
            transport: self.transport_impact(observation.distance_km),
            startup: self.startup_impact(observation.starts_count, observation.preheated),
            process_gap: self.process_gap(observation.gap_minutes),
        };

        debug!(
            transport = diagnostics.transport.status_label(),
            startup = diagnostics.startup.status_label(),
            process_gap = diagnostics.process_gap.status_label(),
            "site observation evaluated"
        );

        diagnostics
    }

    /// Recommended operating conditions derived from the threshold table.
    pub fn guidance(&self) -> OperatingGuidance {
        let thresholds = self.thresholds;
        OperatingGuidance {
            transport: format!(
                "Keep the transport radius at or below {:.1} km, or switch on electric heat tracing",
                thresholds.transport_distance_limit_km
            ),
            startup: format!(
                "No more than {} starts per day, each preceded by at least {} minutes of preheating",
                thresholds.daily_start_limit, thresholds.min_preheat_minutes
            ),
            process_gap: format!(
                "Keep the mixing-to-storage hand-off at or below {} minutes",
                thresholds.gap_time_limit_min
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteDiagnostics {
    pub transport: TransportDiagnosis,
    pub startup: StartupDiagnosis,
    pub process_gap: ProcessGapDiagnosis,
}

impl SiteDiagnostics {
    pub fn non_compliant_count(&self) -> usize {
        [
            self.transport.is_compliant(),
            self.startup.is_compliant(),
            self.process_gap.is_compliant(),
        ]
        .iter()
        .filter(|compliant| !**compliant)
        .count()
    }

    pub fn all_compliant(&self) -> bool {
        self.non_compliant_count() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatingGuidance {
    pub transport: String,
    pub startup: String,
    pub process_gap: String,
}
