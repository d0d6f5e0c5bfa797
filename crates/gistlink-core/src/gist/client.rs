//! Gist API client.
//!
//! Uses the curl crate (libcurl) for a plain GET per record. No retries, no
//! auth, no pagination.

use std::time::Duration;

use url::Url;

use super::GistRecord;
use crate::config::GistlinkConfig;
use crate::error::{FetchStage, ResolveError};

/// Source of Gist records. The pipeline only depends on this trait.
pub trait GistSource {
    /// `GET /gists/{id}`.
    fn fetch_gist(&self, id: &str) -> Result<GistRecord, ResolveError>;

    /// `GET /gists/{id}/{revision}`.
    fn fetch_revision(&self, id: &str, revision: &str) -> Result<GistRecord, ResolveError>;
}

/// Blocking HTTP client for the Gist REST API.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
/// The API base is only parsed when a request is built, so a bad `api_base`
/// shows up as a page error instead of aborting pages that never fetch.
#[derive(Debug, Clone)]
pub struct HttpGistClient {
    api_base: String,
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpGistClient {
    pub fn new(api_base: &str) -> Self {
        Self::from_config(&GistlinkConfig {
            api_base: api_base.to_string(),
            ..GistlinkConfig::default()
        })
    }

    pub fn from_config(cfg: &GistlinkConfig) -> Self {
        Self {
            api_base: cfg.api_base.clone(),
            user_agent: cfg.user_agent.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }

    /// `{api_base}/gists/{segments...}`, each segment percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ResolveError> {
        let mut url = Url::parse(&self.api_base)?;
        {
            let mut path = url.path_segments_mut().map_err(|()| ResolveError::CannotBeABase {
                api_base: self.api_base.clone(),
            })?;
            path.pop_if_empty().push("gists");
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    fn get_record(&self, url: &Url, stage: FetchStage) -> Result<GistRecord, ResolveError> {
        let transport = |source: curl::Error| ResolveError::Transport {
            url: url.to_string(),
            source,
        };

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str()).map_err(transport)?;
        easy.get(true).map_err(transport)?;
        easy.follow_location(true).map_err(transport)?;
        easy.useragent(&self.user_agent).map_err(transport)?;
        easy.connect_timeout(self.connect_timeout).map_err(transport)?;
        easy.timeout(self.timeout).map_err(transport)?;

        let mut list = curl::easy::List::new();
        list.append("Accept: application/vnd.github+json")
            .map_err(transport)?;
        easy.http_headers(list).map_err(transport)?;

        tracing::debug!(%url, ?stage, "fetching gist record");
        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transport)?;
            transfer.perform().map_err(transport)?;
        }

        let status = easy.response_code().map_err(transport)?;
        if !(200..300).contains(&status) {
            tracing::warn!(%url, status, "gist API returned non-success status");
            return Err(ResolveError::Http { stage, status });
        }

        let record = GistRecord::from_slice(&body)?;
        tracing::debug!(
            %url,
            files = record.files.len(),
            history = record.history.len(),
            "gist record decoded"
        );
        Ok(record)
    }
}

impl GistSource for HttpGistClient {
    fn fetch_gist(&self, id: &str) -> Result<GistRecord, ResolveError> {
        let url = self.endpoint(&[id])?;
        self.get_record(&url, FetchStage::Base)
    }

    fn fetch_revision(&self, id: &str, revision: &str) -> Result<GistRecord, ResolveError> {
        let url = self.endpoint(&[id, revision])?;
        self.get_record(&url, FetchStage::Revision)
    }
}
