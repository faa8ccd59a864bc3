use super::resolver::{ZoneResolution, ZoneRuleResolver};
use crate::workflows::rulebook::{MaterialShare, RuleBook, TemperatureBand};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductionError {
    #[error("no temperature zone resolved for {temperature_c}℃; savings are undefined above the coldest-zone threshold")]
    ZoneNotResolved { temperature_c: f64 },
    #[error("viscosity must be a positive number of mPa·s (found {0})")]
    InvalidViscosity(f64),
    #[error("baseline cost must be a positive amount (found {0})")]
    InvalidBaselineCost(f64),
    #[error("ambient temperature must be a finite number of ℃ (found {0})")]
    InvalidTemperature(f64),
}

/// Recommended mixing parameters for one resolved zone and viscosity reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionRecommendation {
    pub band: TemperatureBand,
    pub zone_name: String,
    pub ratio: Vec<MaterialShare>,
    pub base_speed_rpm: f64,
    pub speed_adjustment_rpm: f64,
    pub final_speed_rpm: f64,
    pub projected_power_kw: f64,
    pub energy_coeff: f64,
}

impl ProductionRecommendation {
    /// Whether the physical speed ceiling cut the compensated speed.
    pub fn is_speed_capped(&self) -> bool {
        self.base_speed_rpm + self.speed_adjustment_rpm > self.final_speed_rpm
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProductionOutcome {
    NotApplicable { temperature_c: f64 },
    Recommendation(ProductionRecommendation),
}

impl ProductionOutcome {
    pub fn recommendation(&self) -> Option<&ProductionRecommendation> {
        match self {
            Self::NotApplicable { .. } => None,
            Self::Recommendation(recommendation) => Some(recommendation),
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Self::NotApplicable { temperature_c } => format!(
                "{temperature_c}℃ is above the low-temperature threshold; optimization mode not required"
            ),
            Self::Recommendation(recommendation) => format!(
                "zone {}: run at {:.1} r/min (base {:.1}), ~{:.1} kW, energy coefficient {:.2}",
                recommendation.zone_name,
                recommendation.final_speed_rpm,
                recommendation.base_speed_rpm,
                recommendation.projected_power_kw,
                recommendation.energy_coeff
            ),
        }
    }
}

/// Production-side optimizer bound to one ambient temperature.
///
/// The zone is resolved once on construction; every later call reuses it.
#[derive(Debug, Clone, Copy)]
pub struct ProductionOptimizer<'a> {
    rulebook: &'a RuleBook,
    resolution: ZoneResolution<'a>,
}

impl<'a> ProductionOptimizer<'a> {
    pub fn new(rulebook: &'a RuleBook, temperature_c: f64) -> Self {
        let resolution = ZoneRuleResolver::new(rulebook).resolve(temperature_c);
        Self {
            rulebook,
            resolution,
        }
    }

    pub fn resolution(&self) -> ZoneResolution<'a> {
        self.resolution
    }

    pub fn optimize_process(
        &self,
        viscosity_mpa_s: f64,
    ) -> Result<ProductionOutcome, ProductionError> {
        let entry = match self.resolution {
            ZoneResolution::NotApplicable { temperature_c } => {
                return Ok(ProductionOutcome::NotApplicable { temperature_c });
            }
            ZoneResolution::Resolved { entry, .. } => entry,
        };

        if !(viscosity_mpa_s.is_finite() && viscosity_mpa_s > 0.0) {
            return Err(ProductionError::InvalidViscosity(viscosity_mpa_s));
        }

        let compensation = &self.rulebook.viscosity;
        let rule = &entry.rule;
        let base_speed_rpm = rule.rpm_range.midpoint();
        let speed_adjustment_rpm = compensation.adjustment_for(viscosity_mpa_s);
        let final_speed_rpm = (base_speed_rpm + speed_adjustment_rpm).min(compensation.max_speed_rpm);

        debug!(
            zone = %rule.zone_name,
            viscosity_mpa_s,
            base_speed_rpm,
            final_speed_rpm,
            "production parameters computed"
        );

        Ok(ProductionOutcome::Recommendation(ProductionRecommendation {
            band: entry.band,
            zone_name: rule.zone_name.clone(),
            ratio: rule.ratio.clone(),
            base_speed_rpm,
            speed_adjustment_rpm,
            final_speed_rpm,
            projected_power_kw: rule.power_range.midpoint(),
            energy_coeff: rule.energy_coeff,
        }))
    }

    /// Projected saving against running the same load unoptimized, rounded to cents.
    pub fn calculate_savings(&self, baseline_cost: f64) -> Result<f64, ProductionError> {
        let rule = match self.resolution {
            ZoneResolution::NotApplicable { temperature_c } => {
                return Err(ProductionError::ZoneNotResolved { temperature_c });
            }
            ZoneResolution::Resolved { entry, .. } => &entry.rule,
        };

        if !(baseline_cost.is_finite() && baseline_cost > 0.0) {
            return Err(ProductionError::InvalidBaselineCost(baseline_cost));
        }

        let savings = baseline_cost * (self.rulebook.unoptimized_coefficient - rule.energy_coeff);
        Ok(round_to_cents(savings))
    }
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
