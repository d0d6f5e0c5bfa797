//! One page load: record the view, then run the session off the async runtime.

use anyhow::{Context, Result};
use gistlink_core::config::GistlinkConfig;
use gistlink_core::gist::{GistSource, HttpGistClient};
use gistlink_core::params::PageLocation;
use gistlink_core::session::{RenderState, Session};
use gistlink_core::telemetry::{self, PageViewTracker};

/// Mounts the page against the configured Gist API and the process-wide tracker.
pub async fn mount(cfg: &GistlinkConfig, location: &str) -> Result<RenderState> {
    let client = HttpGistClient::from_config(cfg);
    mount_with(cfg, location, telemetry::tracker(), client).await
}

pub(crate) async fn mount_with<S>(
    cfg: &GistlinkConfig,
    location: &str,
    tracker: Option<&PageViewTracker>,
    source: S,
) -> Result<RenderState>
where
    S: GistSource + Send + 'static,
{
    let location = PageLocation::parse(location);
    let page = location.page_key();
    if let Some(tracker) = tracker {
        tracker.record_page_view(&page);
    }

    let session = Session::with_default_title(location.params(), &cfg.default_title);
    tracing::debug!(%page, gist_id = ?session.params().gist_id, "mounting page");

    // libcurl is blocking; both requests run back to back on one blocking thread.
    let state = tokio::task::spawn_blocking(move || {
        let mut session = session;
        session.run(&source);
        session.into_state()
    })
    .await
    .context("resolve task panicked")?;

    Ok(state)
}
