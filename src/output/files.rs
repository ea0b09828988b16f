//! File writers and the existence-based skip policy
//!
//! Every write truncates and rewrites its target; nothing is appended and
//! nothing is written atomically.

use crate::model::Catalog;
use crate::HarvestError;
use serde::Serialize;
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Name of the file holding the full catalog link objects
pub const CATALOGS_FILE: &str = "catalogs.json";

/// Name of the file holding the sorted catalog titles
pub const CATALOG_NAMES_FILE: &str = "catalog_names.txt";

/// Serializes a value as compact JSON, overwriting `path`
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), HarvestError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Writes `catalogs.json` and `catalog_names.txt` into `dir`
///
/// `catalogs.json` keeps the API order; `catalog_names.txt` holds the
/// titles sorted lexicographically, one per line, without a trailing
/// newline.
pub fn write_catalog_index(catalogs: &[Catalog], dir: &Path) -> Result<(), HarvestError> {
    write_json(catalogs, &dir.join(CATALOGS_FILE))?;

    let mut names: Vec<Cow<'_, str>> = catalogs.iter().map(Catalog::title).collect();
    names.sort_unstable();
    fs::write(dir.join(CATALOG_NAMES_FILE), names.join("\n"))?;

    tracing::debug!("Wrote catalog index for {} catalogs", catalogs.len());
    Ok(())
}

/// Returns true if an existing file at `path` must be left untouched
pub fn should_skip(path: &Path, force: bool) -> bool {
    !force && path.exists()
}

/// Path of the collections file for a catalog title
///
/// The title is used verbatim; filesystem-unsafe characters are not
/// rewritten.
pub fn collection_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("collections_{}.json", title))
}

/// Creates the download directory and its parents if missing
pub fn ensure_dir(dir: &Path) -> Result<(), HarvestError> {
    fs::create_dir_all(dir)?;
    Ok(())
}
