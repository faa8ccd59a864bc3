use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::workflows::logistics::{
    LogisticsDiagnostics, ObservationError, OperatingGuidance, SiteDiagnostics, SiteObservation,
};
use crate::workflows::production::{
    ProductionError, ProductionOptimizer, ProductionOutcome, ZoneResolutionView,
};
use crate::workflows::rulebook::RuleBook;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRequest {
    pub temperature_c: f64,
    pub viscosity_mpa_s: f64,
    #[serde(default)]
    pub baseline_cost: Option<f64>,
}

/// Production recommendation plus savings and hardware notes, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionAdvice {
    pub zone: ZoneResolutionView,
    pub outcome: ProductionOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<f64>,
    pub unoptimized_coefficient: f64,
    pub hardware_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogisticsAdvice {
    pub observation: SiteObservation,
    pub diagnostics: SiteDiagnostics,
    pub guidance: OperatingGuidance,
}

/// Request/response facade over the optimizers, sharing one read-only rule book.
#[derive(Debug, Clone)]
pub struct AdvisoryService {
    rulebook: Arc<RuleBook>,
}

impl AdvisoryService {
    pub fn new(rulebook: Arc<RuleBook>) -> Self {
        Self { rulebook }
    }

    pub fn rulebook(&self) -> &RuleBook {
        &self.rulebook
    }

    pub fn production(&self, request: &ProductionRequest) -> Result<ProductionAdvice, ProductionError> {
        if !request.temperature_c.is_finite() {
            return Err(ProductionError::InvalidTemperature(request.temperature_c));
        }

        let optimizer = ProductionOptimizer::new(&self.rulebook, request.temperature_c);
        let outcome = optimizer.optimize_process(request.viscosity_mpa_s)?;

        let savings = match (&outcome, request.baseline_cost) {
            (ProductionOutcome::Recommendation(_), Some(cost)) => {
                Some(optimizer.calculate_savings(cost)?)
            }
            _ => None,
        };

        let hardware_notes = if outcome.recommendation().is_some() {
            self.rulebook.hardware.notes()
        } else {
            Vec::new()
        };

        Ok(ProductionAdvice {
            zone: optimizer.resolution().view(),
            outcome,
            savings,
            unoptimized_coefficient: self.rulebook.unoptimized_coefficient,
            hardware_notes,
        })
    }

    pub fn logistics(&self, observation: SiteObservation) -> Result<LogisticsAdvice, ObservationError> {
        observation.validate()?;

        let evaluator = LogisticsDiagnostics::new(&self.rulebook.thresholds);
        Ok(LogisticsAdvice {
            diagnostics: evaluator.evaluate(&observation),
            guidance: evaluator.guidance(),
            observation,
        })
    }
}
