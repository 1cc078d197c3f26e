use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ScoringConfig {
    pub scoring: ScoringSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScoringSettings {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

pub fn load_scoring_config() -> anyhow::Result<ScoringConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/scoring"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
