//! `gistlink resolve <location>` – print the resolved link.

use anyhow::Result;
use gistlink_core::config::GistlinkConfig;
use gistlink_core::render;
use gistlink_core::session::RenderState;
use std::io::{self, Write};

use super::mount::mount;

/// Prints the text (or JSON) rendering. Fails when the page would show an error.
pub async fn run_resolve(cfg: &GistlinkConfig, location: &str, json: bool) -> Result<()> {
    let state = mount(cfg, location).await?;
    print_resolved(&mut io::stdout().lock(), &state, json)
}

pub(crate) fn print_resolved<W: Write>(out: &mut W, state: &RenderState, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(state)?)?;
    } else {
        write!(out, "{}", render::render_text(state))?;
    }
    out.flush()?;
    if !state.error.is_empty() {
        anyhow::bail!("{}", state.error);
    }
    Ok(())
}
