// Port for the external risk scoring service
use crate::domain::driver::DriverStats;
use crate::domain::history::HistoryPoint;
use crate::domain::score::ScoreRequestError;
use async_trait::async_trait;

/// The external service that turns driver statistics into a risk score.
///
/// Implementations own transport, serialization, and timeouts; callers only
/// see the numeric score or a [`ScoreRequestError`].
#[async_trait]
pub trait ScoringService: Send + Sync {
    /// Submit a stats snapshot and return the service's risk score, untransformed.
    async fn predict_score(&self, stats: &DriverStats) -> Result<f64, ScoreRequestError>;

    /// Fetch the historical score/premium series, oldest first.
    async fn fetch_history(&self) -> Result<Vec<HistoryPoint>, ScoreRequestError>;
}
