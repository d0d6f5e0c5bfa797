//! One mount of the page: parse parameters, resolve once, hold render state.
//!
//! Phases only move forward:
//!
//! ```text
//! Idle -> ParamsParsed -> NoGist
//!                      -> Fetching -> FetchFailed
//!                                  -> FileResolved -> Invalid
//!                                                  -> Ready
//! ```

use serde::Serialize;

use crate::config::DEFAULT_TITLE;
use crate::error::{ErrorKind, ResolveError};
use crate::gist::GistSource;
use crate::params::InputParameters;
use crate::resolve::{self, Resolution};

/// Everything the renderers read. Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderState {
    pub title: String,
    pub button_text: String,
    pub description: String,
    pub download_url: String,
    pub error: String,
}

impl RenderState {
    /// Sets button text, description and URL together.
    pub fn commit(&mut self, resolution: Resolution) {
        self.button_text = resolution.button_text;
        self.description = resolution.description;
        self.download_url = resolution.download_url;
    }

    /// Records a failure unless an error is already shown. Committed fields stay.
    pub fn fail(&mut self, err: &ResolveError) {
        if self.error.is_empty() {
            self.error = err.user_message();
        }
    }

    pub fn has_link(&self) -> bool {
        !self.download_url.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    ParamsParsed,
    NoGist,
    Fetching,
    FetchFailed,
    FileResolved,
    Invalid,
    Ready,
}

#[derive(Debug)]
pub struct Session {
    params: InputParameters,
    default_title: String,
    state: RenderState,
    phase: Phase,
}

impl Session {
    pub fn new(params: InputParameters) -> Self {
        Self::with_default_title(params, DEFAULT_TITLE)
    }

    pub fn with_default_title(params: InputParameters, default_title: &str) -> Self {
        Self {
            params,
            default_title: default_title.to_string(),
            state: RenderState::default(),
            phase: Phase::Idle,
        }
    }

    pub fn params(&self) -> &InputParameters {
        &self.params
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn into_state(self) -> RenderState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs the whole sequence. Only the first call does anything; later
    /// calls return the state as it is.
    pub fn run<S>(&mut self, source: &S) -> &RenderState
    where
        S: GistSource + ?Sized,
    {
        if self.phase != Phase::Idle {
            return &self.state;
        }

        self.state.title = self
            .params
            .title
            .clone()
            .unwrap_or_else(|| self.default_title.clone());
        self.phase = Phase::ParamsParsed;

        let Some(gist_id) = self.params.gist_id.clone() else {
            self.phase = Phase::NoGist;
            self.state.fail(&ResolveError::MissingInput);
            tracing::info!("no gist id in query; nothing to resolve");
            return &self.state;
        };

        self.phase = Phase::Fetching;
        let fetched =
            match resolve::fetch_record(&gist_id, self.params.revision_prefix.as_deref(), source) {
                Ok(fetched) => fetched,
                Err(err) => {
                    self.phase = Phase::FetchFailed;
                    self.record_failure(&gist_id, &err);
                    return &self.state;
                }
            };

        self.phase = Phase::FileResolved;
        match resolve::select_target(&fetched.record, &self.params) {
            Ok(resolution) => {
                tracing::info!(
                    gist_id = %gist_id,
                    file = %resolution.filename,
                    revision = fetched.matched_version.as_deref().unwrap_or("latest"),
                    "gist resolved"
                );
                self.state.commit(resolution);
                self.phase = Phase::Ready;
            }
            Err(err) => {
                self.phase = Phase::Invalid;
                self.record_failure(&gist_id, &err);
            }
        }
        &self.state
    }

    fn record_failure(&mut self, gist_id: &str, err: &ResolveError) {
        match err.kind() {
            ErrorKind::Network | ErrorKind::Unknown => {
                tracing::error!(gist_id, error = %err, detail = ?err, "gist resolution failed")
            }
            kind => tracing::warn!(gist_id, ?kind, error = %err, "gist cannot be linked"),
        }
        self.state.fail(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::testing::StubSource;

    const RECORD: &str = r#"{
        "description": "desc",
        "files": { "a.txt": { "filename": "a.txt", "raw_url": "https://x/a.txt" } },
        "history": [ { "version": "0123abcd" } ]
    }"#;

    const ICS_RECORD: &str = r#"{
        "description": "party",
        "files": { "event.ics": { "filename": "event.ics", "raw_url": "https://x/event.ics" } }
    }"#;

    fn run(query: &str, stub: &StubSource) -> Session {
        let mut session = Session::new(InputParameters::from_query(query));
        session.run(stub);
        session
    }

    #[test]
    fn scenario_a_default_link() {
        let stub = StubSource::with_gist("abc123", RECORD);
        let session = run("?gistid=abc123", &stub);
        let state = session.state();
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(state.title, "Link to Gist");
        assert_eq!(state.button_text, "Download");
        assert_eq!(state.description, "desc");
        assert_eq!(state.download_url, "https://x/a.txt");
        assert!(state.error.is_empty());
    }

    #[test]
    fn scenario_b_description_suppressed() {
        let stub = StubSource::with_gist("abc123", RECORD);
        let session = run("?gistid=abc123&descr=0", &stub);
        assert_eq!(session.state().description, "");
        assert_eq!(session.state().download_url, "https://x/a.txt");
    }

    #[test]
    fn scenario_c_calendar_button() {
        let stub = StubSource::with_gist("abc123", ICS_RECORD);
        let session = run("?gistid=abc123", &stub);
        assert_eq!(session.state().button_text, "Add to calendar");
    }

    #[test]
    fn scenario_d_revision_not_found() {
        let stub = StubSource::with_gist("abc123", RECORD);
        let session = run("?gistid=abc123&rev=deadbeef", &stub);
        assert_eq!(session.phase(), Phase::FetchFailed);
        assert_eq!(
            session.state().error,
            "An error occurred while loading the Gist. Specified revision not found."
        );
        assert!(session.state().download_url.is_empty());
        assert!(!session.state().has_link());
    }

    #[test]
    fn scenario_e_no_gist_id() {
        let stub = StubSource::default();
        let session = run("?title=Hello", &stub);
        assert_eq!(session.phase(), Phase::NoGist);
        assert_eq!(session.state().title, "Hello");
        assert_eq!(session.state().error, "No gist ID provided. Cannot load file.");
        assert!(stub.calls().is_empty());
    }

    #[test]
    fn versionless_history_without_rev_is_ready() {
        let stub = StubSource::with_gist(
            "abc123",
            r#"{
                "files": { "a.txt": { "filename": "a.txt", "raw_url": "https://x/a.txt" } },
                "history": [ { "committed_at": "2024" } ]
            }"#,
        );
        let session = run("?gistid=abc123", &stub);
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.state().download_url, "https://x/a.txt");

        let session = run("?gistid=abc123&rev=abc", &stub);
        assert_eq!(session.phase(), Phase::FetchFailed);
        assert_eq!(
            session.state().error,
            "An error occurred while loading the Gist. Specified revision not found."
        );
    }

    #[test]
    fn base_fetch_failure() {
        let stub = StubSource::default();
        let session = run("?gistid=missing", &stub);
        assert_eq!(session.phase(), Phase::FetchFailed);
        assert_eq!(
            session.state().error,
            "An error occurred while loading the Gist. Failed to load Gist info"
        );
    }

    #[test]
    fn empty_gist_is_invalid() {
        let stub = StubSource::with_gist("abc123", r#"{"files": {}}"#);
        let session = run("?gistid=abc123", &stub);
        assert_eq!(session.phase(), Phase::Invalid);
        assert_eq!(
            session.state().error,
            "An error occurred while loading the Gist. No files found in this Gist."
        );
    }

    #[test]
    fn runs_only_once() {
        let stub = StubSource::with_gist("abc123", RECORD);
        let mut session = Session::new(InputParameters::from_query("gistid=abc123"));
        session.run(&stub);
        session.run(&stub);
        assert_eq!(stub.calls(), ["/gists/abc123"]);
        assert_eq!(session.phase(), Phase::Ready);
    }

    #[test]
    fn custom_default_title() {
        let stub = StubSource::default();
        let mut session =
            Session::with_default_title(InputParameters::from_query(""), "Calendar links");
        session.run(&stub);
        assert_eq!(session.state().title, "Calendar links");
    }

    #[test]
    fn first_error_wins_and_commit_survives() {
        let mut state = RenderState::default();
        state.commit(Resolution {
            button_text: "Download".into(),
            description: "d".into(),
            download_url: "https://x/a".into(),
            filename: "a".into(),
        });
        state.fail(&ResolveError::EmptyGist);
        state.fail(&ResolveError::MissingInput);
        assert_eq!(
            state.error,
            "An error occurred while loading the Gist. No files found in this Gist."
        );
        assert_eq!(state.download_url, "https://x/a");
    }

    #[test]
    fn state_serializes_to_json() {
        let state = RenderState {
            title: "T".into(),
            ..RenderState::default()
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["title"], "T");
        assert_eq!(json["download_url"], "");
    }
}
