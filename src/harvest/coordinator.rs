//! Harvest coordinator - main orchestration logic
//!
//! This module ties the pieces of a run together:
//! - Listing catalogs from the API root
//! - Rewriting the catalog index
//! - Paginating each selected catalog's collections
//! - Applying the skip/force policy to per-catalog output files

use crate::config::Config;
use crate::harvest::aggregator::aggregate;
use crate::harvest::fetcher::build_http_client;
use crate::harvest::lister::list_catalogs;
use crate::harvest::progress::{ProgressObserver, TracingProgress};
use crate::model::Catalog;
use crate::output::{
    collection_path, ensure_dir, should_skip, write_catalog_index, write_json, HarvestSummary,
};
use crate::HarvestError;
use reqwest::Client;
use std::path::PathBuf;

/// Per-run options supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct HarvestOptions {
    /// Directory receiving every output file
    pub download_dir: PathBuf,

    /// Persist complete collection records instead of `{id, title}`
    pub full: bool,

    /// Overwrite existing per-catalog collection files
    pub force: bool,

    /// Catalog titles flagged with a skip notice in all-catalogs mode
    ///
    /// Advisory only: flagged catalogs are still harvested.
    pub skip: Vec<String>,
}

impl HarvestOptions {
    /// Creates options writing to `download_dir` with every flag off
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
            ..Self::default()
        }
    }
}

/// Main harvest coordinator structure
pub struct Harvester {
    config: Config,
    options: HarvestOptions,
    client: Client,
    observer: Box<dyn ProgressObserver + Send>,
}

impl Harvester {
    /// Creates a new harvester reporting progress through tracing
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Ready to run
    /// * `Err(HarvestError)` - The HTTP client could not be built
    pub fn new(config: Config, options: HarvestOptions) -> Result<Self, HarvestError> {
        Self::with_observer(config, options, Box::new(TracingProgress))
    }

    /// Creates a new harvester with a custom progress observer
    pub fn with_observer(
        config: Config,
        options: HarvestOptions,
        observer: Box<dyn ProgressObserver + Send>,
    ) -> Result<Self, HarvestError> {
        let client = build_http_client(&config.api)?;

        Ok(Self {
            config,
            options,
            client,
            observer,
        })
    }

    /// Harvests every catalog listed by the API root, in API order
    pub async fn harvest_all(&mut self) -> Result<HarvestSummary, HarvestError> {
        let catalogs = self.prepare().await?;
        let mut summary = HarvestSummary {
            catalogs_listed: catalogs.len(),
            ..HarvestSummary::default()
        };

        for catalog in &catalogs {
            if self.options.skip.iter().any(|s| s.as_str() == catalog.title()) {
                tracing::info!("Skipping {}. Ignored via --skip.", catalog.title());
            }
            self.harvest_catalog(catalog, &mut summary).await?;
        }

        tracing::info!(
            "Harvest finished: {} catalogs harvested, {} already present",
            summary.catalogs_harvested,
            summary.catalogs_existing
        );
        Ok(summary)
    }

    /// Harvests only the catalog whose title is exactly `name`
    ///
    /// The catalog index is still rewritten for all catalogs.
    pub async fn harvest_one(&mut self, name: &str) -> Result<HarvestSummary, HarvestError> {
        let catalogs = self.prepare().await?;
        let mut summary = HarvestSummary {
            catalogs_listed: catalogs.len(),
            ..HarvestSummary::default()
        };

        let catalog = catalogs
            .iter()
            .find(|c| c.title() == name)
            .ok_or_else(|| HarvestError::CatalogNotFound(name.to_string()))?;

        self.harvest_catalog(catalog, &mut summary).await?;
        Ok(summary)
    }

    /// Lists catalogs and rewrites the catalog index
    async fn prepare(&self) -> Result<Vec<Catalog>, HarvestError> {
        ensure_dir(&self.options.download_dir)?;

        let catalogs = list_catalogs(&self.client, &self.config.api.root_url).await?;
        write_catalog_index(&catalogs, &self.options.download_dir)?;

        Ok(catalogs)
    }

    /// Fetches and writes one catalog's collections unless its file is kept
    async fn harvest_catalog(
        &mut self,
        catalog: &Catalog,
        summary: &mut HarvestSummary,
    ) -> Result<(), HarvestError> {
        let title = catalog.title();
        let path = collection_path(&self.options.download_dir, &title);

        if should_skip(&path, self.options.force) {
            tracing::info!("Skipping {}. File already exists.", title);
            summary.catalogs_existing += 1;
            return Ok(());
        }

        let aggregation = aggregate(
            &self.client,
            catalog,
            self.options.full,
            self.observer.as_mut(),
        )
        .await?;

        write_json(&aggregation.records, &path)?;
        tracing::info!(
            "Wrote {} collections for {} to {}",
            aggregation.records.len(),
            title,
            path.display()
        );

        summary.catalogs_harvested += 1;
        summary.collections_written += aggregation.records.len();
        if let Some(reason) = aggregation.stopped_early {
            summary.truncated.push((title.to_string(), reason.to_string()));
        }

        Ok(())
    }
}

/// Runs a harvest with the default progress observer
///
/// With `catalog` set only that catalog is harvested; otherwise every
/// catalog is.
///
/// # Example
///
/// ```no_run
/// use stac_harvest::config::Config;
/// use stac_harvest::harvest::{run_harvest, HarvestOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let options = HarvestOptions::new("./stac");
/// let summary = run_harvest(Config::default(), options, None).await?;
/// println!("{} collections written", summary.collections_written);
/// # Ok(())
/// # }
/// ```
pub async fn run_harvest(
    config: Config,
    options: HarvestOptions,
    catalog: Option<&str>,
) -> Result<HarvestSummary, HarvestError> {
    let mut harvester = Harvester::new(config, options)?;
    match catalog {
        Some(name) => harvester.harvest_one(name).await,
        None => harvester.harvest_all().await,
    }
}
