//! Resolve pipeline: gist ID (+ optional revision) to a link target.
//!
//! Two steps, run strictly in sequence by the session:
//! [`fetch_record`] talks to the API, [`select_target`] picks the file and
//! derives the display values. Both return typed errors and never retry.

mod button;
mod description;

pub use button::{button_text, file_extension, CALENDAR_LABEL, DOWNLOAD_LABEL};
pub use description::description_text;

use crate::error::ResolveError;
use crate::gist::{GistRecord, GistSource};
use crate::params::InputParameters;

/// Everything the page needs once resolution succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub button_text: String,
    pub description: String,
    pub download_url: String,
    /// Name of the linked file.
    pub filename: String,
}

/// Record that will be linked, plus the history version the revision prefix matched.
#[derive(Debug, Clone)]
pub struct FetchedRecord {
    pub record: GistRecord,
    pub matched_version: Option<String>,
}

/// Fetches the Gist and, when a revision prefix is given, the matching revision.
///
/// The revision request uses the prefix as given, not the full matched
/// version.
// TODO: request `matched_version` instead once short prefixes are confirmed to 404 upstream.
pub fn fetch_record<S>(
    gist_id: &str,
    revision_prefix: Option<&str>,
    source: &S,
) -> Result<FetchedRecord, ResolveError>
where
    S: GistSource + ?Sized,
{
    let base = source.fetch_gist(gist_id)?;

    let Some(prefix) = revision_prefix else {
        return Ok(FetchedRecord {
            record: base,
            matched_version: None,
        });
    };

    let matched = base
        .find_revision(prefix)
        .ok_or_else(|| ResolveError::RevisionNotFound {
            prefix: prefix.to_string(),
        })?
        .to_string();
    tracing::debug!(gist_id, prefix, %matched, "revision prefix matched");

    let record = source.fetch_revision(gist_id, prefix)?;
    Ok(FetchedRecord {
        record,
        matched_version: Some(matched),
    })
}

/// Picks the first file and derives button text, description and URL.
pub fn select_target(
    record: &GistRecord,
    params: &InputParameters,
) -> Result<Resolution, ResolveError> {
    let (key, entry) = record.first_file().ok_or(ResolveError::EmptyGist)?;

    let entry = entry.ok_or(ResolveError::MissingRawUrl {
        filename: Some(key.to_string()),
    })?;
    let filename = entry.filename.as_deref().unwrap_or(key);
    let download_url = entry
        .raw_url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ResolveError::MissingRawUrl {
            filename: Some(filename.to_string()),
        })?;

    Ok(Resolution {
        button_text: button_text(params.button_label.as_deref(), filename),
        description: description_text(
            params.description.as_deref(),
            record.description.as_deref(),
        ),
        download_url: download_url.to_string(),
        filename: filename.to_string(),
    })
}
