//! Per-run harvest summary

/// Counters accumulated over one harvest run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestSummary {
    /// Number of catalogs listed by the API root
    pub catalogs_listed: usize,

    /// Catalogs whose collections were fetched and written
    pub catalogs_harvested: usize,

    /// Catalogs left untouched because their file already existed
    pub catalogs_existing: usize,

    /// Total collection records written across all files
    pub collections_written: usize,

    /// Catalogs whose pagination stopped early, with the reason
    pub truncated: Vec<(String, String)>,
}

impl HarvestSummary {
    /// Returns true if every harvested catalog was paginated to the end
    pub fn is_complete(&self) -> bool {
        self.truncated.is_empty()
    }
}

/// Prints a summary to stdout in a formatted manner
///
/// # Arguments
///
/// * `summary` - The summary to display
pub fn print_summary(summary: &HarvestSummary) {
    println!("=== Harvest Summary ===\n");

    println!("Catalogs:");
    println!("  Listed: {}", summary.catalogs_listed);
    println!("  Harvested: {}", summary.catalogs_harvested);
    println!("  Already present: {}", summary.catalogs_existing);
    println!();

    println!("Collections written: {}", summary.collections_written);

    if !summary.truncated.is_empty() {
        println!();
        println!("Incomplete Catalogs ({}):", summary.truncated.len());
        for (title, reason) in &summary.truncated {
            println!("  - {}: {}", title, reason);
        }
    }
}
