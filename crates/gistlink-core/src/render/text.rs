//! Plain-text rendering for the terminal.

use crate::session::RenderState;

pub fn render_text(state: &RenderState) -> String {
    let mut lines = vec![state.title.clone()];
    if state.has_link() {
        lines.push(format!("[{}] {}", state.button_text, state.download_url));
    }
    if !state.description.is_empty() {
        lines.push(String::new());
        lines.push(state.description.clone());
    }
    if !state.error.is_empty() {
        lines.push(format!("error: {}", state.error));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
