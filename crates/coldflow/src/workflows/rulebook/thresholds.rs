use serde::{Deserialize, Serialize};

/// Limits and loss rates for the construction/logistics diagnostics.
///
/// Loss rates are fractional energy increases (0.06 means +6%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub transport_distance_limit_km: f64,
    pub transport_loss_rate: f64,
    pub daily_start_limit: u32,
    pub start_loss_rate: f64,
    pub no_preheat_loss: f64,
    #[serde(default = "default_min_preheat_minutes")]
    pub min_preheat_minutes: u32,
    pub gap_time_limit_min: f64,
    pub gap_loss_per_10min: f64,
}

fn default_min_preheat_minutes() -> u32 {
    30
}

impl ThresholdConfig {
    pub(crate) fn non_negative_fields(&self) -> [(&'static str, f64); 6] {
        [
            (
                "transport_distance_limit_km",
                self.transport_distance_limit_km,
            ),
            ("transport_loss_rate", self.transport_loss_rate),
            ("start_loss_rate", self.start_loss_rate),
            ("no_preheat_loss", self.no_preheat_loss),
            ("gap_time_limit_min", self.gap_time_limit_min),
            ("gap_loss_per_10min", self.gap_loss_per_10min),
        ]
    }
}

/// Speed compensation applied when oil viscosity rises above the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViscosityCompensation {
    pub baseline_mpa_s: f64,
    pub step_mpa_s: f64,
    pub speed_per_step_rpm: f64,
    pub max_speed_rpm: f64,
}

impl ViscosityCompensation {
    /// Speed added for `viscosity`; only whole steps above the baseline count.
    pub fn adjustment_for(&self, viscosity_mpa_s: f64) -> f64 {
        let excess = (viscosity_mpa_s - self.baseline_mpa_s).max(0.0);
        (excess / self.step_mpa_s).floor() * self.speed_per_step_rpm
    }
}

impl Default for ViscosityCompensation {
    fn default() -> Self {
        Self {
            baseline_mpa_s: 2000.0,
            step_mpa_s: 100.0,
            speed_per_step_rpm: 3.0,
            max_speed_rpm: 60.0,
        }
    }
}

/// Equipment adaptations that accompany every production recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareProfile {
    pub transmission: String,
    pub lubricant: String,
    pub insulation: String,
    pub speed_control: String,
}

impl HardwareProfile {
    pub fn notes(&self) -> Vec<String> {
        vec![
            format!("Transmission: {}", self.transmission),
            format!("Lubrication: {}", self.lubricant),
            format!("Insulation: {}", self.insulation),
            format!("Speed control: {}", self.speed_control),
        ]
    }
}

impl Default for HardwareProfile {
    fn default() -> Self {
        Self {
            transmission: "gear drive (1:3)".to_string(),
            lubricant: "SHC 630 low-temperature grease".to_string(),
            insulation: "aluminium foil with 10 cm rock wool".to_string(),
            speed_control: "variable-frequency drive with viscosity-linked speed compensation"
                .to_string(),
        }
    }
}
