// Score and premium history domain model
use serde::{Deserialize, Serialize};

/// One historical sample pairing a risk score with the premium in effect.
///
/// The label is an opaque display string ("Week 1"); ordering is the
/// chronological order the series was supplied in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub label: String,
    pub score: f64,
    pub premium: f64,
}

impl HistoryPoint {
    pub fn new(label: impl Into<String>, score: f64, premium: f64) -> Self {
        Self {
            label: label.into(),
            score,
            premium,
        }
    }
}

/// The bundled four-week sample series, used when no external history
/// source is reachable.
pub fn sample_history() -> Vec<HistoryPoint> {
    vec![
        HistoryPoint::new("Week 1", 48.0, 1200.0),
        HistoryPoint::new("Week 2", 45.0, 1150.0),
        HistoryPoint::new("Week 3", 42.0, 1100.0),
        HistoryPoint::new("Week 4", 38.0, 1050.0),
    ]
}
