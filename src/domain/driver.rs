// Driver statistics domain model
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A snapshot of recent driving behavior.
///
/// The field set is fixed; a snapshot is always replaced wholesale, never
/// patched field-by-field. Serialized field names are the scoring service's
/// wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStats {
    /// Average speed in units per hour.
    pub avg_speed: f64,
    /// Count of harsh braking events.
    pub harsh_braking: u32,
    /// Count of rapid acceleration events.
    pub rapid_accel: u32,
    /// Fraction of driving done at night, 0.0 to 1.0.
    pub night_driving_pct: f64,
    /// Distance driven per day.
    pub mileage_per_day: f64,
}

impl Default for DriverStats {
    fn default() -> Self {
        Self {
            avg_speed: 55.0,
            harsh_braking: 3,
            rapid_accel: 2,
            night_driving_pct: 0.3,
            mileage_per_day: 35.0,
        }
    }
}

/// A driver stats field was outside its allowed range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidStatsError {
    #[error("{field} must be a finite value >= 0, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be within 0.0..=1.0, got {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

impl DriverStats {
    /// Check every field against its range, reporting the first violation.
    pub fn validate(&self) -> Result<(), InvalidStatsError> {
        Self::check_non_negative("avg_speed", self.avg_speed)?;
        Self::check_fraction("night_driving_pct", self.night_driving_pct)?;
        Self::check_non_negative("mileage_per_day", self.mileage_per_day)?;
        Ok(())
    }

    /// The fixed (key, value) pairs in declaration order, for tabular display.
    ///
    /// Counts are widened to f64; display renders values as given.
    pub fn rows(&self) -> [(&'static str, f64); 5] {
        [
            ("avg_speed", self.avg_speed),
            ("harsh_braking", self.harsh_braking as f64),
            ("rapid_accel", self.rapid_accel as f64),
            ("night_driving_pct", self.night_driving_pct),
            ("mileage_per_day", self.mileage_per_day),
        ]
    }

    fn check_non_negative(field: &'static str, value: f64) -> Result<(), InvalidStatsError> {
        if !value.is_finite() || value < 0.0 {
            return Err(InvalidStatsError::Negative { field, value });
        }
        Ok(())
    }

    fn check_fraction(field: &'static str, value: f64) -> Result<(), InvalidStatsError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(InvalidStatsError::OutOfRange { field, value });
        }
        Ok(())
    }
}
