// Terminal renderer for the risk dashboard
use crate::application::risk_dashboard::RiskDashboard;
use crate::domain::dashboard::{ChartData, Dashboard, SeriesData, StatRow};
use crate::domain::driver::DriverStats;
use crate::domain::history::HistoryPoint;
use crate::domain::score::ScoreRequestState;

/// Turn a wire field key into a display label.
///
/// "avg_speed" -> "avg speed". Display-only; business state keeps the wire
/// names.
pub fn stat_label(key: &str) -> String {
    key.replace('_', " ")
}

/// Labeled rows for the behavior summary table, in field order.
pub fn stat_rows(stats: &DriverStats) -> Vec<StatRow> {
    stats
        .rows()
        .into_iter()
        .map(|(key, value)| StatRow::new(key, stat_label(key), value))
        .collect()
}

/// The score panel line for the current request state.
///
/// `Idle` renders nothing at all, which keeps "no score yet" visually
/// distinct from a resolved score of zero.
pub fn score_line(state: &ScoreRequestState) -> Option<String> {
    match state {
        ScoreRequestState::Idle => None,
        ScoreRequestState::Pending => Some("Fetching risk score...".to_string()),
        ScoreRequestState::Resolved(score) => Some(format!("Predicted Risk Score: {}", score)),
        ScoreRequestState::Failed(err) => Some(format!("Could not fetch risk score: {}", err)),
    }
}

/// Build the two-series history chart over the shared label axis.
pub fn history_chart(history: &[HistoryPoint]) -> ChartData {
    let labels = history.iter().map(|p| p.label.clone()).collect();
    let score = SeriesData::new("Risk Score", history.iter().map(|p| p.score).collect());
    let premium = SeriesData::new("Premium ($)", history.iter().map(|p| p.premium).collect());
    ChartData::new("Risk Score & Premium History", labels, vec![score, premium])
}

/// Assemble one dashboard frame from the view model.
pub fn dashboard_view(dashboard: &RiskDashboard) -> Dashboard {
    Dashboard::new(
        "Driving Behavior Summary",
        stat_rows(dashboard.driver_stats()),
        dashboard.score_state(),
        history_chart(dashboard.history()),
    )
}

/// Render a frame as plain text for the demo shell.
pub fn render_dashboard(dashboard: &RiskDashboard) -> String {
    let view = dashboard_view(dashboard);
    let mut out = String::new();

    out.push_str(&view.title);
    out.push('\n');
    for row in &view.rows {
        out.push_str(&format!("  {}: {}\n", row.label, row.value));
    }

    if let Some(line) = score_line(&view.score) {
        out.push('\n');
        out.push_str(&line);
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&view.chart.title);
    out.push('\n');
    for (i, label) in view.chart.labels.iter().enumerate() {
        out.push_str(&format!("  {}", label));
        for series in &view.chart.series {
            if let Some(value) = series.values.get(i) {
                out.push_str(&format!("  |  {}: {}", series.name, value));
            }
        }
        out.push('\n');
    }

    out
}
