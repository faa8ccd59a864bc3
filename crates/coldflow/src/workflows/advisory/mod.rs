//! Request/response surface over the production optimizer and the logistics
//! diagnostics, plus the HTTP routes that expose it.

pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use router::advisory_router;
pub use service::{AdvisoryService, LogisticsAdvice, ProductionAdvice, ProductionRequest};
