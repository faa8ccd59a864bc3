//! Import of daily site records exported as CSV, and batch diagnostics over them.

mod parser;

use crate::workflows::logistics::{
    Diagnostic, LogisticsDiagnostics, ObservationError, SiteDiagnostics, SiteObservation,
};
use crate::workflows::rulebook::ThresholdConfig;
use chrono::NaiveDate;
use parser::FieldLogRow;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum FieldLogError {
    #[error("failed to read field log: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid field log CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("field log line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldLogEntry {
    pub line: u64,
    pub date: NaiveDate,
    pub site: String,
    pub observation: SiteObservation,
}

pub struct FieldLogImporter;

impl FieldLogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<FieldLogEntry>, FieldLogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<FieldLogEntry>, FieldLogError> {
        parser::parse_rows(reader)?
            .into_iter()
            .map(into_entry)
            .collect()
    }
}

fn into_entry(row: FieldLogRow) -> Result<FieldLogEntry, FieldLogError> {
    let line = row.line;
    let invalid = |reason: String| FieldLogError::InvalidRow { line, reason };

    let date = row
        .date
        .ok_or_else(|| invalid(format!("'{}' is not a YYYY-MM-DD date", row.raw_date)))?;
    let preheated = row.preheated.ok_or_else(|| {
        invalid(format!(
            "'{}' is not a preheat flag (expected y/n)",
            row.raw_preheated
        ))
    })?;

    let observation = SiteObservation {
        distance_km: row.distance_km,
        starts_count: row.starts,
        preheated,
        gap_minutes: row.gap_minutes,
    };
    observation
        .validate()
        .map_err(|err: ObservationError| invalid(err.to_string()))?;

    Ok(FieldLogEntry {
        line,
        date,
        site: row.site,
        observation,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldLogEntryReport {
    pub date: NaiveDate,
    pub site: String,
    pub diagnostics: SiteDiagnostics,
}

/// Diagnostics for every imported row plus per-evaluator finding counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldLogReport {
    pub entries: Vec<FieldLogEntryReport>,
    pub transport_findings: usize,
    pub startup_findings: usize,
    pub process_gap_findings: usize,
}

impl FieldLogReport {
    pub fn evaluate(thresholds: &ThresholdConfig, entries: &[FieldLogEntry]) -> Self {
        let evaluator = LogisticsDiagnostics::new(thresholds);
        let entries: Vec<FieldLogEntryReport> = entries
            .iter()
            .map(|entry| FieldLogEntryReport {
                date: entry.date,
                site: entry.site.clone(),
                diagnostics: evaluator.evaluate(&entry.observation),
            })
            .collect();

        let count = |pick: fn(&SiteDiagnostics) -> bool| {
            entries
                .iter()
                .filter(|entry| pick(&entry.diagnostics))
                .count()
        };

        Self {
            transport_findings: count(|diagnostics| !diagnostics.transport.is_compliant()),
            startup_findings: count(|diagnostics| !diagnostics.startup.is_compliant()),
            process_gap_findings: count(|diagnostics| !diagnostics.process_gap.is_compliant()),
            entries,
        }
    }

    pub fn compliant_days(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.diagnostics.all_compliant())
            .count()
    }
}
