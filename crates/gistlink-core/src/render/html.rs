//! Standalone HTML page.

use std::fmt::Write;

use crate::session::RenderState;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f6f8fa;color:#24292f}\
.container{max-width:40rem;margin:4rem auto;padding:2rem;background:#fff;border-radius:8px;text-align:center}\
.link-button{display:inline-block;padding:.75rem 1.5rem;border-radius:6px;background:#2da44e;color:#fff;text-decoration:none;font-weight:600}\
.description{margin-top:1.5rem;white-space:pre-wrap}\
.error{margin-top:1.5rem;color:#cf222e}";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The `.container` block only.
pub fn render_body(state: &RenderState) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"container\">\n");
    let _ = writeln!(out, "  <h1>{}</h1>", escape_html(&state.title));
    if state.has_link() {
        let _ = writeln!(
            out,
            "  <div class=\"button-wrapper\">\n    <a class=\"link-button\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n  </div>",
            escape_html(&state.download_url),
            escape_html(&state.button_text)
        );
    }
    if !state.description.is_empty() {
        let _ = writeln!(
            out,
            "  <div class=\"description\">{}</div>",
            escape_html(&state.description)
        );
    }
    if !state.error.is_empty() {
        let _ = writeln!(out, "  <div class=\"error\">{}</div>", escape_html(&state.error));
    }
    out.push_str("</div>\n");
    out
}

/// Full document; the document title is the page title.
pub fn render_page(state: &RenderState) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape_html(&state.title),
        body = render_body(state),
    )
}
