//! STAC Harvest: a catalog-and-collection dumper for STAC-style metadata APIs
//!
//! This crate lists the child catalogs published by an API root, walks each
//! catalog's paginated `collections` endpoint by following `next` links, and
//! writes the results to disk as compact JSON.

pub mod config;
pub mod harvest;
pub mod model;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Request for {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("Collection in catalog '{catalog}' is missing required field '{field}'")]
    MissingField { catalog: String, field: &'static str },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Errors produced by a single page request
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error for {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The URL of the request that failed
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }

    /// Returns true if pagination may stop here and keep its partial results.
    ///
    /// Status and transport failures truncate a catalog; a malformed body
    /// on a successful response does not.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { .. })
    }
}

impl From<FetchError> for HarvestError {
    fn from(source: FetchError) -> Self {
        HarvestError::Fetch {
            url: source.url().to_string(),
            source,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use harvest::{HarvestOptions, Harvester};
pub use model::{Catalog, CollectionRecord, Link, Page};
pub use output::HarvestSummary;
