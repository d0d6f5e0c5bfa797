//! CLI command handlers. Each command is in its own file.

mod mount;
mod render;
mod resolve;

pub use render::run_render;
pub use resolve::run_resolve;

#[cfg(test)]
pub(crate) use mount::mount_with;
#[cfg(test)]
pub(crate) use render::write_page;
#[cfg(test)]
pub(crate) use resolve::print_resolved;
