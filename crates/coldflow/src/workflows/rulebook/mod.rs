//! Static rule tables consumed by the production optimizer and the logistics
//! diagnostics.
//!
//! A [`RuleBook`] is built once at startup, validated, and then only ever read.
//! Replacing the rules means loading a new book, never editing one in place.

mod standard;
mod thresholds;
mod validation;
mod zones;

pub use standard::{CRUDE_OIL, DILUENT, POUR_POINT_DEPRESSANT};
pub use thresholds::{HardwareProfile, ThresholdConfig, ViscosityCompensation};
pub use zones::{ClosedRange, MaterialShare, TemperatureBand, ZoneEntry, ZoneRule};

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum RuleBookError {
    #[error("failed to read rule book {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid rule book document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("rule book failed validation: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Zone table, threshold table and the constants shared by both optimizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleBook {
    /// Warmest band first; each bound is inclusive.
    pub zones: Vec<ZoneEntry>,
    #[serde(default)]
    pub viscosity: ViscosityCompensation,
    pub unoptimized_coefficient: f64,
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub hardware: HardwareProfile,
}

impl RuleBook {
    pub fn standard() -> Self {
        standard::standard_rulebook()
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RuleBookError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| RuleBookError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let book = Self::from_reader(file)?;
        info!(path = %path.display(), zones = book.zones.len(), "rule book loaded");
        Ok(book)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RuleBookError> {
        let book: Self = serde_json::from_reader(reader)?;
        book.validate()?;
        Ok(book)
    }

    pub fn validate(&self) -> Result<(), RuleBookError> {
        let errors = validation::collect_violations(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(RuleBookError::Validation(errors))
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, RuleBookError> {
        serde_json::to_string_pretty(self).map_err(RuleBookError::from)
    }
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::standard()
    }
}
