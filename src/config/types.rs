use serde::Deserialize;
use std::time::Duration;

/// Root document of NASA's CMR STAC API
pub const DEFAULT_ROOT_URL: &str = "https://cmr.earthdata.nasa.gov/stac/";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Main configuration structure for STAC Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// URL of the root document listing child catalogs
    #[serde(rename = "root-url")]
    pub root_url: String,

    /// Timeout applied to every individual request (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl ApiConfig {
    /// Returns the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            root_url: DEFAULT_ROOT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}
