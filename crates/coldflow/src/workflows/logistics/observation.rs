use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObservationError {
    #[error("transport distance must be a non-negative number of km (found {0})")]
    InvalidDistance(f64),
    #[error("process gap must be a non-negative number of minutes (found {0})")]
    InvalidGap(f64),
}

/// One day's site record fed to the logistics diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteObservation {
    pub distance_km: f64,
    pub starts_count: u32,
    pub preheated: bool,
    pub gap_minutes: f64,
}

impl SiteObservation {
    /// Caller-side check; the evaluators themselves assume well-formed input.
    pub fn validate(&self) -> Result<(), ObservationError> {
        if !(self.distance_km.is_finite() && self.distance_km >= 0.0) {
            return Err(ObservationError::InvalidDistance(self.distance_km));
        }
        if !(self.gap_minutes.is_finite() && self.gap_minutes >= 0.0) {
            return Err(ObservationError::InvalidGap(self.gap_minutes));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation() -> SiteObservation {
        SiteObservation {
            distance_km: 8.0,
            starts_count: 3,
            preheated: false,
            gap_minutes: 45.0,
        }
    }

    #[test]
    fn accepts_zero_values() {
        let observation = SiteObservation {
            distance_km: 0.0,
            gap_minutes: 0.0,
            ..observation()
        };
        assert!(observation.validate().is_ok());
    }

    #[test]
    fn rejects_negative_distance_and_nan_gap() {
        let negative = SiteObservation {
            distance_km: -1.0,
            ..observation()
        };
        assert_eq!(
            negative.validate(),
            Err(ObservationError::InvalidDistance(-1.0))
        );

        let nan_gap = SiteObservation {
            gap_minutes: f64::NAN,
            ..observation()
        };
        assert!(matches!(
            nan_gap.validate(),
            Err(ObservationError::InvalidGap(_))
        ));
    }
}
