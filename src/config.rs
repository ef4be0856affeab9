use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://datalens.yandex/charts/api/run";
pub const DEFAULT_CHART_ID: &str = "5jjsemsj8ssmr";
pub const CONFIG_FILE: &str = "floor_monitor";
pub const ENV_PREFIX: &str = "FLOOR_MONITOR";
pub const MAX_RETRIES_LIMIT: u32 = 10;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Emit every assembled record.
    Records,
    /// Emit the name → 1D change mapping recovered from display lines.
    Changes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: String,
    pub chart_id: String,
    pub page_count: u32,
    pub output: OutputMode,
    pub poll_interval_seconds: u64,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            chart_id: DEFAULT_CHART_ID.to_string(),
            page_count: 7,
            output: OutputMode::Records,
            poll_interval_seconds: 0,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: 25,
            max_retries: 3,
        }
    }
}

impl Config {
    /// Defaults, then `floor_monitor.{toml,json,yaml}` if present, then
    /// `FLOOR_MONITOR_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE, ENV_PREFIX)
    }

    /// Same layering with an explicit file stem and environment prefix.
    /// `<PREFIX>_PAGE_COUNT` sets `page_count`.
    pub fn load_from(file: &str, env_prefix: &str) -> Result<Self> {
        let defaults = Config::default();

        let settings = config::Config::builder()
            .set_default("endpoint", defaults.endpoint)?
            .set_default("chart_id", defaults.chart_id)?
            .set_default("page_count", defaults.page_count as i64)?
            .set_default("output", "records")?
            .set_default("poll_interval_seconds", defaults.poll_interval_seconds as i64)?
            .set_default("user_agent", defaults.user_agent)?
            .set_default("timeout_seconds", defaults.timeout_seconds as i64)?
            .set_default("max_retries", defaults.max_retries as i64)?
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to build configuration")?;

        let config: Config = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", self.endpoint))?;

        if self.page_count == 0 {
            anyhow::bail!("page_count must be at least 1");
        }
        if self.max_retries == 0 || self.max_retries > MAX_RETRIES_LIMIT {
            anyhow::bail!("max_retries must be between 1 and {}", MAX_RETRIES_LIMIT);
        }

        Ok(())
    }
}
