//! Progress reporting for collection pagination
//!
//! The aggregation loop reports after every page; what happens with the
//! report is up to the observer.

/// Receives a notification after each page of collections is accumulated
pub trait ProgressObserver {
    /// Called once per successfully fetched page
    ///
    /// # Arguments
    ///
    /// * `catalog` - Title of the catalog being paginated
    /// * `pages` - Number of pages fetched so far for this catalog
    /// * `collections` - Number of collections accumulated so far
    fn on_page_fetched(&mut self, catalog: &str, pages: usize, collections: usize);
}

/// Emits a tracing event per page
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressObserver for TracingProgress {
    fn on_page_fetched(&mut self, catalog: &str, pages: usize, collections: usize) {
        tracing::info!(
            "Fetching {} collections: page {}, #collections={}",
            catalog,
            pages,
            collections
        );
    }
}

/// Discards all progress reports
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_page_fetched(&mut self, _catalog: &str, _pages: usize, _collections: usize) {}
}
