// Risk dashboard view model - Use case for mediating score requests
use crate::application::scoring_service::ScoringService;
use crate::domain::driver::{DriverStats, InvalidStatsError};
use crate::domain::history::HistoryPoint;
use crate::domain::score::{ScoreRequestError, ScoreRequestState};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// View model for the risk dashboard.
///
/// Owns the current [`DriverStats`] snapshot and the historical series, and
/// mediates score requests against a [`ScoringService`]. The request
/// lifecycle is published through a watch channel: the rendering layer reads
/// the latest [`ScoreRequestState`] via [`score_state`](Self::score_state) or
/// observes every transition via [`subscribe`](Self::subscribe).
///
/// An instance is owned by the single rendering context that created it; the
/// only state a spawned request task touches is the watch channel and a
/// generation counter, so no locking is involved.
pub struct RiskDashboard {
    stats: DriverStats,
    history: Vec<HistoryPoint>,
    scorer: Arc<dyn ScoringService>,
    state: Arc<watch::Sender<ScoreRequestState>>,
    generation: Arc<AtomicU64>,
    request_timeout: Duration,
}

impl RiskDashboard {
    /// Create a view model with the default stats snapshot and an `Idle`
    /// score state. The history series is loaded once, up front, and never
    /// refreshed by the view model.
    pub fn new(scorer: Arc<dyn ScoringService>, history: Vec<HistoryPoint>) -> Self {
        let (state, _) = watch::channel(ScoreRequestState::Idle);
        Self {
            stats: DriverStats::default(),
            history,
            scorer,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request deadline (default 10s). The deadline bounds
    /// the whole service call, so `Pending` always settles.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// The current stats snapshot.
    pub fn driver_stats(&self) -> &DriverStats {
        &self.stats
    }

    /// Replace the stats snapshot wholesale.
    ///
    /// Validation happens before the write: on error the previous snapshot
    /// is retained unchanged.
    pub fn set_driver_stats(&mut self, next: DriverStats) -> Result<(), InvalidStatsError> {
        next.validate()?;
        self.stats = next;
        Ok(())
    }

    /// The latest score request state.
    pub fn score_state(&self) -> ScoreRequestState {
        self.state.borrow().clone()
    }

    /// Observe score state transitions. Receivers see the latest value on
    /// every change; the channel closes when the view model is dropped and
    /// its last in-flight task has finished.
    pub fn subscribe(&self) -> watch::Receiver<ScoreRequestState> {
        self.state.subscribe()
    }

    /// The read-only historical series, oldest first.
    pub fn history(&self) -> &[HistoryPoint] {
        &self.history
    }

    /// Request a risk score for the current stats snapshot.
    ///
    /// A no-op while a request is already in flight, so at most one request
    /// exists per instance. Otherwise publishes `Pending` synchronously and
    /// spawns the service call on the ambient tokio runtime; completion
    /// arrives through the state channel as `Resolved` or `Failed`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn request_score(&self) {
        if self.state.borrow().is_pending() {
            tracing::debug!("score request already in flight, ignoring");
            return;
        }

        // Claim a generation before publishing Pending; completions carrying
        // a stale generation are discarded.
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.state.send_replace(ScoreRequestState::Pending);

        let scorer = self.scorer.clone();
        let stats = self.stats.clone();
        let state = self.state.clone();
        let guard = self.generation.clone();
        let deadline = self.request_timeout;

        tokio::spawn(async move {
            let outcome = match tokio::time::timeout(deadline, scorer.predict_score(&stats)).await {
                Ok(Ok(score)) => {
                    tracing::debug!("scoring service returned {}", score);
                    ScoreRequestState::Resolved(score)
                }
                Ok(Err(err)) => {
                    tracing::warn!("scoring request failed: {}", err);
                    ScoreRequestState::Failed(err)
                }
                Err(_) => {
                    tracing::warn!("scoring request exceeded {:?} deadline", deadline);
                    ScoreRequestState::Failed(ScoreRequestError::Timeout)
                }
            };

            state.send_if_modified(|current| {
                if guard.load(Ordering::Acquire) == generation {
                    *current = outcome;
                    true
                } else {
                    false
                }
            });
        });
    }
}

impl Drop for RiskDashboard {
    fn drop(&mut self) {
        // Invalidate any in-flight completion so it cannot publish after
        // the owner is gone.
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::sample_history;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    struct StubScorer {
        response: Result<f64, ScoreRequestError>,
        delay: Option<Duration>,
        calls: AtomicUsize,
    }

    impl StubScorer {
        fn returning(score: f64) -> Self {
            Self {
                response: Ok(score),
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(err: ScoreRequestError) -> Self {
            Self {
                response: Err(err),
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ScoringService for StubScorer {
        async fn predict_score(&self, _stats: &DriverStats) -> Result<f64, ScoreRequestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.response.clone()
        }

        async fn fetch_history(&self) -> Result<Vec<HistoryPoint>, ScoreRequestError> {
            Ok(sample_history())
        }
    }

    async fn wait_settled(rx: &mut watch::Receiver<ScoreRequestState>) -> ScoreRequestState {
        rx.wait_for(|state| state.is_settled()).await.unwrap().clone()
    }

    #[tokio::test]
    async fn test_stats_round_trip() {
        let mut dashboard = RiskDashboard::new(Arc::new(StubScorer::returning(40.0)), vec![]);
        let next = DriverStats {
            avg_speed: 62.5,
            harsh_braking: 1,
            rapid_accel: 0,
            night_driving_pct: 0.05,
            mileage_per_day: 12.0,
        };
        dashboard.set_driver_stats(next.clone()).unwrap();
        assert_eq!(dashboard.driver_stats(), &next);
    }

    #[tokio::test]
    async fn test_invalid_stats_keep_previous_snapshot() {
        let mut dashboard = RiskDashboard::new(Arc::new(StubScorer::returning(40.0)), vec![]);
        let before = dashboard.driver_stats().clone();

        let result = dashboard.set_driver_stats(DriverStats {
            night_driving_pct: 1.5,
            ..DriverStats::default()
        });

        assert_eq!(
            result,
            Err(InvalidStatsError::OutOfRange {
                field: "night_driving_pct",
                value: 1.5
            })
        );
        assert_eq!(dashboard.driver_stats(), &before);
    }

    #[tokio::test]
    async fn test_default_stats_resolve_to_stub_score() {
        let dashboard = RiskDashboard::new(Arc::new(StubScorer::returning(40.0)), vec![]);
        let mut rx = dashboard.subscribe();

        assert_eq!(dashboard.score_state(), ScoreRequestState::Idle);
        dashboard.request_score();
        assert_eq!(dashboard.score_state(), ScoreRequestState::Pending);

        assert_eq!(
            wait_settled(&mut rx).await,
            ScoreRequestState::Resolved(40.0)
        );
    }

    #[tokio::test]
    async fn test_score_is_not_transformed() {
        let dashboard = RiskDashboard::new(Arc::new(StubScorer::returning(41.87)), vec![]);
        let mut rx = dashboard.subscribe();
        dashboard.request_score();
        assert_eq!(
            wait_settled(&mut rx).await,
            ScoreRequestState::Resolved(41.87)
        );
    }

    #[tokio::test]
    async fn test_overlapping_request_is_single_call() {
        let scorer =
            Arc::new(StubScorer::returning(40.0).with_delay(Duration::from_millis(50)));
        let dashboard = RiskDashboard::new(scorer.clone(), vec![]);
        let mut rx = dashboard.subscribe();

        dashboard.request_score();
        // Pending was published synchronously, so this one must be dropped.
        dashboard.request_score();

        wait_settled(&mut rx).await;
        assert_eq!(scorer.calls(), 1);
    }

    #[tokio::test]
    async fn test_service_error_settles_as_failed() {
        let err = ScoreRequestError::Http {
            status: 500,
            message: "model unavailable".into(),
        };
        let dashboard = RiskDashboard::new(Arc::new(StubScorer::failing(err.clone())), vec![]);
        let mut rx = dashboard.subscribe();

        dashboard.request_score();
        assert_eq!(
            wait_settled(&mut rx).await,
            ScoreRequestState::Failed(err)
        );
    }

    #[tokio::test]
    async fn test_slow_service_settles_as_timeout() {
        let scorer = Arc::new(StubScorer::returning(40.0).with_delay(Duration::from_secs(30)));
        let dashboard =
            RiskDashboard::new(scorer, vec![]).with_request_timeout(Duration::from_millis(20));
        let mut rx = dashboard.subscribe();

        dashboard.request_score();
        assert_eq!(
            wait_settled(&mut rx).await,
            ScoreRequestState::Failed(ScoreRequestError::Timeout)
        );
    }

    #[tokio::test]
    async fn test_retry_after_settlement_reenters_pending() {
        let scorer = Arc::new(StubScorer::returning(38.0));
        let dashboard = RiskDashboard::new(scorer.clone(), vec![]);
        let mut rx = dashboard.subscribe();

        dashboard.request_score();
        wait_settled(&mut rx).await;

        dashboard.request_score();
        assert_eq!(dashboard.score_state(), ScoreRequestState::Pending);
        wait_settled(&mut rx).await;
        assert_eq!(scorer.calls(), 2);
    }

    #[tokio::test]
    async fn test_late_completion_discarded_after_drop() {
        let scorer =
            Arc::new(StubScorer::returning(40.0).with_delay(Duration::from_millis(50)));
        let dashboard = RiskDashboard::new(scorer, vec![]);
        let rx = dashboard.subscribe();

        dashboard.request_score();
        drop(dashboard);

        tokio::time::sleep(Duration::from_millis(150)).await;
        // The in-flight completion carried a stale generation; the last
        // published state stays Pending rather than Resolved.
        assert_eq!(*rx.borrow(), ScoreRequestState::Pending);
    }

    #[tokio::test]
    async fn test_history_is_exposed_unchanged() {
        let dashboard =
            RiskDashboard::new(Arc::new(StubScorer::returning(40.0)), sample_history());
        assert_eq!(dashboard.history(), sample_history().as_slice());
    }
}
