use super::serde_helpers::{
    author_or_none, maintainers_or_empty, string_map_or_empty, string_or_none, weekly_downloads,
};
use serde::Deserialize;
use std::collections::HashMap;

/// One package record as returned by `GET /{package}` on the registry.
///
/// Every field tolerates absence or an unexpected JSON shape; the custom
/// deserializers degrade such values to empty ones instead of failing the
/// whole record.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageRecord {
    #[serde(default, deserialize_with = "maintainers_or_empty")]
    pub maintainers: Vec<Maintainer>,

    #[serde(default, deserialize_with = "author_or_none")]
    pub author: Option<Author>,

    #[serde(rename = "dist-tags", default, deserialize_with = "string_map_or_empty")]
    pub dist_tags: HashMap<String, String>,

    #[serde(default, deserialize_with = "string_or_none")]
    pub description: Option<String>,

    /// Weekly download count, flattened out of `downloads.weekly`.
    ///
    /// The registry omits the field for most packages; an absent or
    /// malformed value reads as 0 and cannot be told apart from a package
    /// with genuinely zero downloads.
    #[serde(rename = "downloads", default, deserialize_with = "weekly_downloads")]
    pub weekly_downloads: u64,
}

/// One entry of a record's `maintainers` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maintainer {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// The `author` field of a record, resolved into its two wire forms at
/// parse time.
///
/// The registry serves either a structured mapping or the conventional
/// free-text `"Name <email>"` form. Any other shape is dropped during
/// deserialization, so holders of this enum never see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Author {
    Structured {
        name: Option<String>,
        email: Option<String>,
    },
    Text(String),
}

impl Author {
    /// Display name of the author: the structured `name` when present, the
    /// raw text otherwise.
    pub fn display_name(&self) -> &str {
        match self {
            Author::Structured { name: Some(name), .. } => name,
            Author::Structured { name: None, .. } => "not specified",
            Author::Text(raw) => raw,
        }
    }
}

/// Response of `GET /-/v1/search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub objects: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SearchEntry {
    pub package: SearchPackage,
}

#[derive(Debug, Deserialize)]
pub struct SearchPackage {
    pub name: String,
}
