//! Harvest module for catalog listing and collection pagination
//!
//! This module contains the core harvesting logic, including:
//! - HTTP fetching of JSON documents
//! - Catalog listing from the API root
//! - Cursor-chain aggregation of collections
//! - Overall run coordination

mod aggregator;
mod coordinator;
mod fetcher;
mod lister;
mod progress;

pub use aggregator::{aggregate, project, Aggregation};
pub use coordinator::{run_harvest, HarvestOptions, Harvester};
pub use fetcher::{build_http_client, fetch_json, fetch_page, next_link};
pub use lister::list_catalogs;
pub use progress::{NoProgress, ProgressObserver, TracingProgress};
