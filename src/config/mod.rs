//! Configuration module for STAC Harvest
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every setting has a default, so a harvest can run
//! without any file at all.
//!
//! # Example
//!
//! ```no_run
//! use stac_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Harvesting from: {}", config.api.root_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ApiConfig, Config, DEFAULT_ROOT_URL, DEFAULT_TIMEOUT_SECS};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
