// HTTP scoring service adapter
use crate::application::scoring_service::ScoringService;
use crate::domain::driver::DriverStats;
use crate::domain::history::HistoryPoint;
use crate::domain::score::ScoreRequestError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// [`ScoringService`] implementation speaking the scoring backend's JSON
/// contract: `POST /api/risk_score` with the stats snapshot as body, and
/// `GET /api/sample_history` for the historical series.
#[derive(Debug, Clone)]
pub struct HttpScoringService {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    score: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    date: String,
    score: f64,
    premium: f64,
}

impl HttpScoringService {
    /// Create an adapter for the scoring service at `base_url`. The timeout
    /// is applied per request.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn map_send_error(err: reqwest::Error) -> ScoreRequestError {
        if err.is_timeout() {
            ScoreRequestError::Timeout
        } else {
            ScoreRequestError::Transport(err.to_string())
        }
    }

    async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ScoreRequestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        // The backend reports failures as {"error": "..."}; fall back to the
        // raw body when it doesn't.
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or(body);

        Err(ScoreRequestError::Http {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ScoringService for HttpScoringService {
    async fn predict_score(&self, stats: &DriverStats) -> Result<f64, ScoreRequestError> {
        let url = format!("{}/api/risk_score", self.base_url);
        tracing::debug!("requesting risk score from {}", url);

        let response = self
            .client
            .post(&url)
            .json(stats)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Self::map_send_error)?;
        let response = Self::check_status(response).await?;

        let body = response
            .json::<ScoreResponse>()
            .await
            .map_err(|e| ScoreRequestError::Malformed(e.to_string()))?;

        Ok(body.score)
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryPoint>, ScoreRequestError> {
        let url = format!("{}/api/sample_history", self.base_url);
        tracing::debug!("fetching score history from {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Self::map_send_error)?;
        let response = Self::check_status(response).await?;

        let rows = response
            .json::<Vec<HistoryRow>>()
            .await
            .map_err(|e| ScoreRequestError::Malformed(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|row| HistoryPoint::new(row.date, row.score, row.premium))
            .collect())
    }
}
