use crate::config::types::{ApiConfig, Config};
use crate::ConfigError;
use url::Url;

/// Upper bound for the per-request timeout (seconds)
const MAX_TIMEOUT_SECS: u64 = 600;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_api_config(&config.api)
}

/// Validates the remote API settings
fn validate_api_config(config: &ApiConfig) -> Result<(), ConfigError> {
    validate_root_url(&config.root_url)?;

    if config.timeout_secs < 1 || config.timeout_secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and {}, got {}",
            MAX_TIMEOUT_SECS, config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the API root URL: must parse and use http(s)
fn validate_root_url(root_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(root_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid root-url '{}': {}", root_url, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl(format!(
            "root-url '{}' must use http or https, got '{}'",
            root_url, other
        ))),
    }
}
