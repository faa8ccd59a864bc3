use serde::{Deserialize, Serialize};

/// Ambient-temperature operating bands, warmest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    Mild,
    Cold,
    Severe,
    Extreme,
}

impl TemperatureBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mild => "Mild cold",
            Self::Cold => "Cold",
            Self::Severe => "Severe cold",
            Self::Extreme => "Extreme cold",
        }
    }
}

/// Closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosedRange {
    pub min: f64,
    pub max: f64,
}

impl ClosedRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn is_ordered(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// One component of the recommended blend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialShare {
    pub material: String,
    pub fraction: f64,
}

impl MaterialShare {
    pub fn new(material: impl Into<String>, fraction: f64) -> Self {
        Self {
            material: material.into(),
            fraction,
        }
    }
}

/// Recommended equipment settings for one temperature band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRule {
    pub zone_name: String,
    pub ratio: Vec<MaterialShare>,
    pub rpm_range: ClosedRange,
    pub power_range: ClosedRange,
    pub energy_coeff: f64,
}

impl ZoneRule {
    pub fn ratio_total(&self) -> f64 {
        self.ratio.iter().map(|share| share.fraction).sum()
    }
}

/// A band together with its inclusive upper temperature bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneEntry {
    pub band: TemperatureBand,
    pub upper_bound_c: f64,
    pub rule: ZoneRule,
}
