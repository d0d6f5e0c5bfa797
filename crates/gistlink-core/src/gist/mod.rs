//! Gist API records and the client that fetches them.
//!
//! The `files` object is decoded into a vector so the order in which the API
//! lists files is kept; the first file is the one that gets linked.

mod client;
mod files;

pub use client::{GistSource, HttpGistClient};

use serde::{Deserialize, Deserializer};

/// One file of a Gist as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub raw_url: Option<String>,
}

/// One entry of a Gist's revision history.
///
/// History is only consulted when a revision prefix is given, so an entry
/// without a version must not make the whole record undecodable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub committed_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A Gist (or one revision of it).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GistRecord {
    #[serde(default)]
    pub description: Option<String>,
    /// Files in source order. A `null` entry is kept as `None`.
    #[serde(default, deserialize_with = "files::ordered_files")]
    pub files: Vec<(String, Option<FileEntry>)>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub history: Vec<HistoryEntry>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl GistRecord {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Version of the first history entry that starts with `prefix`.
    /// Entries without a version never match.
    pub fn find_revision(&self, prefix: &str) -> Option<&str> {
        self.history
            .iter()
            .filter_map(|h| h.version.as_deref())
            .find(|version| version.starts_with(prefix))
    }

    /// First file in source order, with the key it was listed under.
    pub fn first_file(&self) -> Option<(&str, Option<&FileEntry>)> {
        self.files
            .first()
            .map(|(name, entry)| (name.as_str(), entry.as_ref()))
    }
}
