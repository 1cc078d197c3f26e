// Dashboard domain model
use super::score::ScoreRequestState;

/// One labeled row of the behavior summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub key: &'static str,
    pub label: String,
    pub value: f64,
}

impl StatRow {
    pub fn new(key: &'static str, label: String, value: f64) -> Self {
        Self { key, label, value }
    }
}

/// A named series of values aligned with the chart's shared label axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub name: String,
    pub values: Vec<f64>,
}

impl SeriesData {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// A line chart: ordered labels plus one or more series over them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    pub fn new(title: impl Into<String>, labels: Vec<String>, series: Vec<SeriesData>) -> Self {
        Self {
            title: title.into(),
            labels,
            series,
        }
    }
}

/// Everything the rendering layer needs to paint one dashboard frame.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub title: String,
    pub rows: Vec<StatRow>,
    pub score: ScoreRequestState,
    pub chart: ChartData,
}

impl Dashboard {
    pub fn new(
        title: impl Into<String>,
        rows: Vec<StatRow>,
        score: ScoreRequestState,
        chart: ChartData,
    ) -> Self {
        Self {
            title: title.into(),
            rows,
            score,
            chart,
        }
    }
}
