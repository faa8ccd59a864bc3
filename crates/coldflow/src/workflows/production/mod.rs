//! Production-side mixing advice: temperature zone matching plus
//! viscosity-compensated motor speed.

mod optimizer;
mod resolver;

pub use optimizer::{
    ProductionError, ProductionOptimizer, ProductionOutcome, ProductionRecommendation,
};
pub use resolver::{ZoneResolution, ZoneResolutionView, ZoneRuleResolver};
