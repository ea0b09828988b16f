//! Documents exchanged with a STAC-style API
//!
//! Links and catalogs keep every field they arrived with so that
//! `catalogs.json` reproduces the source link objects verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Link relation marking a child catalog in the root document
pub const REL_CHILD: &str = "child";

/// Link relation marking the cursor to the following page
pub const REL_NEXT: &str = "next";

/// A link object as found in a `links` array
///
/// `rel` and `href` must be strings when present. `title` is kept as any
/// JSON value so an unusual title never makes the whole document unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub rel: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,

    /// Any other fields of the link object (`type`, etc.)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Link {
    /// Creates a link with only `rel` and `href` set
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: Some(href.into()),
            title: None,
            extra: Map::new(),
        }
    }

    /// Returns true if this link has the given relation
    pub fn is_rel(&self, rel: &str) -> bool {
        self.rel == rel
    }
}

/// A child catalog listed by the API root
///
/// Identified by its title. Serializes exactly as the source link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(pub Link);

impl Catalog {
    /// The catalog title, or an empty string when the link has none
    ///
    /// A non-string title is rendered as its JSON text.
    pub fn title(&self) -> Cow<'_, str> {
        match &self.0.title {
            Some(Value::String(title)) => Cow::Borrowed(title),
            Some(other) => Cow::Owned(other.to_string()),
            None => Cow::Borrowed(""),
        }
    }

    /// The catalog base URL, or an empty string when the link has none
    pub fn href(&self) -> &str {
        self.0.href.as_deref().unwrap_or("")
    }
}

impl From<Link> for Catalog {
    fn from(link: Link) -> Self {
        Self(link)
    }
}

/// The root document of the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RootDocument {
    #[serde(default)]
    pub links: Vec<Link>,
}

impl RootDocument {
    /// Returns the child catalogs in document order
    pub fn catalogs(self) -> Vec<Catalog> {
        self.links
            .into_iter()
            .filter(|link| link.is_rel(REL_CHILD))
            .map(Catalog::from)
            .collect()
    }
}

/// One page of a paginated `collections` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub collections: Vec<Value>,

    #[serde(default)]
    pub links: Vec<Link>,
}

/// A collection record as persisted on disk
///
/// `Full` keeps the record exactly as received; `Projected` keeps only the
/// identifying fields, each with the value it arrived with. Serialization
/// is untagged, so neither variant adds wrapper keys to the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CollectionRecord {
    Projected { id: Value, title: Value },
    Full(Value),
}

impl CollectionRecord {
    /// Returns the record id, if one is present
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Projected { id, .. } => id.as_str(),
            Self::Full(value) => value.get("id").and_then(Value::as_str),
        }
    }
}
