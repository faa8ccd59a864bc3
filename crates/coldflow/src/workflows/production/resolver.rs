use crate::workflows::rulebook::{RuleBook, TemperatureBand, ZoneEntry, ZoneRule};
use serde::Serialize;
use tracing::debug;

/// Outcome of matching an ambient temperature against the zone table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoneResolution<'a> {
    /// Warmer than every band; low-temperature optimization does not apply.
    NotApplicable { temperature_c: f64 },
    Resolved {
        temperature_c: f64,
        entry: &'a ZoneEntry,
    },
}

impl<'a> ZoneResolution<'a> {
    pub fn rule(&self) -> Option<&'a ZoneRule> {
        match self {
            Self::NotApplicable { .. } => None,
            Self::Resolved { entry, .. } => Some(&entry.rule),
        }
    }

    pub fn band(&self) -> Option<TemperatureBand> {
        match self {
            Self::NotApplicable { .. } => None,
            Self::Resolved { entry, .. } => Some(entry.band),
        }
    }

    pub fn view(&self) -> ZoneResolutionView {
        match self {
            Self::NotApplicable { temperature_c } => ZoneResolutionView {
                temperature_c: *temperature_c,
                band: None,
                zone_name: None,
            },
            Self::Resolved {
                temperature_c,
                entry,
            } => ZoneResolutionView {
                temperature_c: *temperature_c,
                band: Some(entry.band),
                zone_name: Some(entry.rule.zone_name.clone()),
            },
        }
    }
}

/// Owned, serializable form of a [`ZoneResolution`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneResolutionView {
    pub temperature_c: f64,
    pub band: Option<TemperatureBand>,
    pub zone_name: Option<String>,
}

/// Maps ambient temperature to a zone rule.
///
/// The table is walked from the coldest band upwards and the first band whose
/// inclusive upper bound admits the temperature wins, so a reading sitting
/// exactly on a boundary belongs to the colder band.
#[derive(Debug, Clone, Copy)]
pub struct ZoneRuleResolver<'a> {
    rulebook: &'a RuleBook,
}

impl<'a> ZoneRuleResolver<'a> {
    pub fn new(rulebook: &'a RuleBook) -> Self {
        Self { rulebook }
    }

    pub fn resolve(&self, temperature_c: f64) -> ZoneResolution<'a> {
        let matched = self
            .rulebook
            .zones
            .iter()
            .rev()
            .find(|entry| temperature_c <= entry.upper_bound_c);

        match matched {
            Some(entry) => {
                debug!(temperature_c, zone = %entry.rule.zone_name, "temperature zone resolved");
                ZoneResolution::Resolved {
                    temperature_c,
                    entry,
                }
            }
            None => {
                debug!(temperature_c, "temperature above every zone; optimization not applicable");
                ZoneResolution::NotApplicable { temperature_c }
            }
        }
    }
}
