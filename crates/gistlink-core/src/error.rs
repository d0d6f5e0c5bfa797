//! Failure taxonomy for the resolve pipeline.
//!
//! Every failure is non-fatal to the process: the session turns it into a
//! single user-visible message via [`ResolveError::user_message`].

use thiserror::Error;

/// Prefix put in front of every failure that happens after the gist ID was read.
pub const GENERIC_PREFIX: &str = "An error occurred while loading the Gist. ";

/// Which of the two dependent requests a network failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    /// `GET /gists/{id}`.
    Base,
    /// `GET /gists/{id}/{rev}`.
    Revision,
}

impl FetchStage {
    fn failure_message(self) -> &'static str {
        match self {
            FetchStage::Base => "Failed to load Gist info",
            FetchStage::Revision => "Failed to load specified revision of Gist",
        }
    }
}

/// High-level classification used for logging and session phase selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingInput,
    Network,
    NotFound,
    EmptyGist,
    MissingAsset,
    Unknown,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No gist ID provided. Cannot load file.")]
    MissingInput,

    /// API answered with a non-2xx status.
    #[error("{}", .stage.failure_message())]
    Http { stage: FetchStage, status: u32 },

    /// libcurl could not complete the request (DNS, connect, timeout...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },

    #[error("Specified revision not found.")]
    RevisionNotFound { prefix: String },

    #[error("No files found in this Gist.")]
    EmptyGist,

    #[error("No raw_url found for the Gist file.")]
    MissingRawUrl { filename: Option<String> },

    /// Response body was not a Gist record.
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid API endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// `api_base` parsed, but is an opaque URL such as `mailto:`.
    #[error("API base `{api_base}` cannot have path segments")]
    CannotBeABase { api_base: String },
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::MissingInput => ErrorKind::MissingInput,
            ResolveError::Http { .. } | ResolveError::Transport { .. } => ErrorKind::Network,
            ResolveError::RevisionNotFound { .. } => ErrorKind::NotFound,
            ResolveError::EmptyGist => ErrorKind::EmptyGist,
            ResolveError::MissingRawUrl { .. } => ErrorKind::MissingAsset,
            ResolveError::Malformed(_)
            | ResolveError::Endpoint(_)
            | ResolveError::CannotBeABase { .. } => ErrorKind::Unknown,
        }
    }

    /// Message shown to the user. Missing input is reported as-is; everything
    /// else gets the generic prefix.
    pub fn user_message(&self) -> String {
        match self {
            ResolveError::MissingInput => self.to_string(),
            other => format!("{GENERIC_PREFIX}{other}"),
        }
    }
}
