//! Catalog listing from the API root document

use crate::harvest::fetcher::fetch_json;
use crate::model::{Catalog, RootDocument};
use crate::HarvestError;
use reqwest::Client;

/// Fetches the root document and returns its child catalogs
///
/// The root is expected to enumerate every catalog in a single response.
/// Any failure here is fatal to the run.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `root_url` - URL of the API root document
///
/// # Returns
///
/// * `Ok(Vec<Catalog>)` - Child catalogs in document order
/// * `Err(HarvestError)` - The request failed or the body was not JSON
pub async fn list_catalogs(client: &Client, root_url: &str) -> Result<Vec<Catalog>, HarvestError> {
    let root: RootDocument = fetch_json(client, root_url).await?;
    let catalogs = root.catalogs();

    tracing::info!("Found {} catalogs at {}", catalogs.len(), root_url);
    Ok(catalogs)
}
