//! Collection aggregation over a cursor chain
//!
//! Starting from `<catalog href>/collections`, pages are fetched one at a
//! time and their records appended in cursor order until a page carries no
//! `next` link. A status or network failure ends the walk early and keeps
//! whatever was accumulated. Records are never deduplicated, and the chain
//! is not checked for cycles.

use crate::harvest::fetcher::{fetch_page, next_link};
use crate::harvest::progress::ProgressObserver;
use crate::model::{Catalog, CollectionRecord};
use crate::url::collections_url;
use crate::{FetchError, HarvestError};
use reqwest::Client;
use serde_json::Value;

/// Collections accumulated for one catalog
#[derive(Debug, Default)]
pub struct Aggregation {
    /// Records in cursor order
    pub records: Vec<CollectionRecord>,

    /// Number of pages successfully consumed
    pub pages: usize,

    /// Set when pagination stopped before the chain was exhausted
    pub stopped_early: Option<FetchError>,
}

impl Aggregation {
    /// Returns true if every page of the chain was consumed
    pub fn is_complete(&self) -> bool {
        self.stopped_early.is_none()
    }
}

/// Fetches every collection of a catalog
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `catalog` - The catalog whose collections are listed
/// * `full` - Keep complete records instead of `{id, title}` projections
/// * `observer` - Receives a report after each page
///
/// # Returns
///
/// * `Ok(Aggregation)` - All records reachable before the chain ended or a
///   request failed
/// * `Err(HarvestError)` - A record lacked `id`/`title`, a successful
///   response was not valid JSON, or the catalog href is unusable
pub async fn aggregate(
    client: &Client,
    catalog: &Catalog,
    full: bool,
    observer: &mut dyn ProgressObserver,
) -> Result<Aggregation, HarvestError> {
    let title = catalog.title();
    let mut aggregation = Aggregation::default();
    let mut cursor = Some(collections_url(catalog.href())?);

    while let Some(url) = cursor {
        let page = match fetch_page(client, &url).await {
            Ok(page) => page,
            Err(e) if e.is_recoverable() => {
                tracing::warn!(
                    "Stopping pagination of {} after {} pages: {}",
                    title,
                    aggregation.pages,
                    e
                );
                aggregation.stopped_early = Some(e);
                break;
            }
            Err(e) => return Err(e.into()),
        };

        cursor = next_link(&page);

        for value in page.collections {
            aggregation.records.push(project(value, full, &title)?);
        }
        aggregation.pages += 1;

        observer.on_page_fetched(&title, aggregation.pages, aggregation.records.len());
    }

    Ok(aggregation)
}

/// Converts a raw collection into the record kept on disk
///
/// With `full` the value is kept whole, whatever its shape; otherwise it is
/// reduced to `id` and `title`, both of which must be present. Values are
/// never rewritten.
pub fn project(value: Value, full: bool, catalog: &str) -> Result<CollectionRecord, HarvestError> {
    if full {
        return Ok(CollectionRecord::Full(value));
    }

    let missing = |field: &'static str| HarvestError::MissingField {
        catalog: catalog.to_string(),
        field,
    };

    let mut map = match value {
        Value::Object(map) => map,
        _ => return Err(missing("id")),
    };

    let id = map.remove("id").ok_or_else(|| missing("id"))?;
    let title = map.remove("title").ok_or_else(|| missing("title"))?;

    Ok(CollectionRecord::Projected { id, title })
}
