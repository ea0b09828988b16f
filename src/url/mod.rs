//! URL handling for STAC Harvest
//!
//! Catalog links point at a catalog root; its collections live one path
//! segment below. The join is a path join, not RFC 3986 reference
//! resolution: `https://host/stac/LPCLOUD` and `https://host/stac/LPCLOUD/`
//! both yield `https://host/stac/LPCLOUD/collections`.

use url::Url;

/// Path segment appended to a catalog href to reach its collections
pub const COLLECTIONS_SEGMENT: &str = "collections";

/// Joins a base URL and a path segment with exactly one `/` between them
///
/// # Examples
///
/// ```
/// use stac_harvest::url::join_path;
///
/// assert_eq!(join_path("https://a.org/stac", "x"), "https://a.org/stac/x");
/// assert_eq!(join_path("https://a.org/stac/", "x"), "https://a.org/stac/x");
/// ```
pub fn join_path(base: &str, segment: &str) -> String {
    let base = base.trim_end_matches('/');
    let segment = segment.trim_start_matches('/');
    format!("{}/{}", base, segment)
}

/// Builds the first-page URL of a catalog's collections listing
///
/// # Returns
///
/// * `Ok(String)` - The collections URL
/// * `Err(url::ParseError)` - The catalog href is not an absolute URL
pub fn collections_url(catalog_href: &str) -> Result<String, url::ParseError> {
    Url::parse(catalog_href)?;
    Ok(join_path(catalog_href, COLLECTIONS_SEGMENT))
}
