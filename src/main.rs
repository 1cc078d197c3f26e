// Main entry point - Dependency injection and demo shell
use std::sync::Arc;
use std::time::Duration;

use telematics_dashboard::application::risk_dashboard::RiskDashboard;
use telematics_dashboard::application::scoring_service::ScoringService;
use telematics_dashboard::domain::history::sample_history;
use telematics_dashboard::infrastructure::config::load_scoring_config;
use telematics_dashboard::infrastructure::http_scoring::HttpScoringService;
use telematics_dashboard::presentation::renderer::{render_dashboard, score_line};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_scoring_config()?;
    let timeout = Duration::from_secs(config.scoring.timeout_secs);

    // Create scoring adapter (infrastructure layer)
    let scorer = Arc::new(HttpScoringService::new(config.scoring.base_url, timeout));

    // History is loaded once; fall back to the bundled sample when the
    // backend is unreachable.
    let history = match scorer.fetch_history().await {
        Ok(points) => points,
        Err(e) => {
            tracing::warn!("using bundled sample history: {}", e);
            sample_history()
        }
    };

    // Create view model (application layer)
    let dashboard = RiskDashboard::new(scorer, history).with_request_timeout(timeout);

    println!("{}", render_dashboard(&dashboard));

    // One user-initiated score request, rendered as its state changes
    let mut state_rx = dashboard.subscribe();
    dashboard.request_score();

    while state_rx.changed().await.is_ok() {
        let state = state_rx.borrow_and_update().clone();
        if let Some(line) = score_line(&state) {
            println!("{}", line);
        }
        if state.is_settled() {
            break;
        }
    }

    Ok(())
}
