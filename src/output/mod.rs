//! Output module for persisting harvest results
//!
//! This module handles:
//! - Writing compact JSON files (catalog index, per-catalog collections)
//! - Writing the sorted catalog-names listing
//! - Deciding whether an existing collections file is left untouched
//! - Summarizing a run

mod files;
pub mod summary;

pub use files::{
    collection_path, ensure_dir, should_skip, write_catalog_index, write_json,
    CATALOGS_FILE, CATALOG_NAMES_FILE,
};
pub use summary::{print_summary, HarvestSummary};
