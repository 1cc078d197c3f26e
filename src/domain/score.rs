// Risk score request lifecycle
use thiserror::Error;

/// Why a scoring service call failed.
///
/// Carried inside [`ScoreRequestState::Failed`] so the rendering layer
/// observes failures as state, never as a propagated error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreRequestError {
    #[error("scoring request timed out")]
    Timeout,
    #[error("could not reach scoring service: {0}")]
    Transport(String),
    #[error("scoring service returned {status}: {message}")]
    Http { status: u16, message: String },
    #[error("could not decode scoring response: {0}")]
    Malformed(String),
}

/// Lifecycle of a single risk score request.
///
/// Exactly one variant holds at a time. `Idle` means no score has ever been
/// requested; it is distinct from `Resolved(0.0)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScoreRequestState {
    #[default]
    Idle,
    Pending,
    Resolved(f64),
    Failed(ScoreRequestError),
}

impl ScoreRequestState {
    /// A request is currently in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, ScoreRequestState::Pending)
    }

    /// The most recent request has completed, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            ScoreRequestState::Resolved(_) | ScoreRequestState::Failed(_)
        )
    }

    /// Whether a new request may be issued from this state.
    ///
    /// Only `Pending` rejects a new request; `Resolved` and `Failed` allow
    /// a user-initiated retry.
    pub fn can_request(&self) -> bool {
        !self.is_pending()
    }
}
