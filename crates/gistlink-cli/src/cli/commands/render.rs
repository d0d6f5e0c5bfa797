//! `gistlink render <location>` – write the HTML page.

use anyhow::{Context, Result};
use gistlink_core::config::GistlinkConfig;
use gistlink_core::render;
use gistlink_core::session::RenderState;
use std::io::{self, Write};
use std::path::Path;

use super::mount::mount;

/// Writes the page whether or not resolution succeeded; errors show up on the page.
pub async fn run_render(cfg: &GistlinkConfig, location: &str, output: Option<&Path>) -> Result<()> {
    let state = mount(cfg, location).await?;
    write_page(&mut io::stdout().lock(), &state, output)
}

/// Page goes to `output` when given (with a note on `out`), otherwise to `out`.
pub(crate) fn write_page<W: Write>(
    out: &mut W,
    state: &RenderState,
    output: Option<&Path>,
) -> Result<()> {
    let page = render::render_page(state);
    match output {
        Some(path) => {
            std::fs::write(path, page).with_context(|| format!("write {}", path.display()))?;
            writeln!(out, "Wrote {}", path.display())?;
        }
        None => out.write_all(page.as_bytes())?,
    }
    out.flush()?;
    Ok(())
}
