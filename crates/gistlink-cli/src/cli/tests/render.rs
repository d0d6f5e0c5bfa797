//! Tests for the render subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_render_stdout() {
    match parse(&["gistlink", "render", "gistid=abc"]).command {
        CliCommand::Render { location, output } => {
            assert_eq!(location, "gistid=abc");
            assert!(output.is_none());
        }
        _ => panic!("expected Render"),
    }
}

#[test]
fn cli_parse_render_output() {
    match parse(&["gistlink", "render", "?gistid=abc", "-o", "/tmp/page.html"]).command {
        CliCommand::Render { output, .. } => {
            assert_eq!(output.as_deref(), Some(std::path::Path::new("/tmp/page.html")));
        }
        _ => panic!("expected Render with --output"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["gistlink", "download", "x"]).is_err());
}
