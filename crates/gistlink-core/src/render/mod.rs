//! Renderers for [`RenderState`](crate::session::RenderState).
//!
//! Both are pure functions of the state. Heading always; link, description
//! and error blocks only when their field is non-empty.

mod html;
mod text;

pub use html::{escape_html, render_body, render_page};
pub use text::render_text;
