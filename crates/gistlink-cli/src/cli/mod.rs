//! CLI for gistlink.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gistlink_core::config;
use gistlink_core::telemetry;
use std::path::PathBuf;

use commands::{run_render, run_resolve};

/// Top-level CLI for gistlink.
#[derive(Debug, Parser)]
#[command(name = "gistlink")]
#[command(about = "gistlink: turn a Gist query string into a download or calendar link", long_about = None)]
pub struct Cli {
    /// Override the Gist API root from config.toml (e.g. a GitHub Enterprise API URL).
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a location and print the result.
    Resolve {
        /// Query string (`?gistid=...&rev=...`) or full page URL.
        location: String,

        /// Print the render state as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Resolve a location and write the HTML page.
    Render {
        /// Query string (`?gistid=...&rev=...`) or full page URL.
        location: String,

        /// Write the page to this file instead of stdout.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(api_base) = cli.api_base {
            cfg.api_base = api_base;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        telemetry::init(cfg.effective_measurement_id());

        match cli.command {
            CliCommand::Resolve { location, json } => run_resolve(&cfg, &location, json).await?,
            CliCommand::Render { location, output } => {
                run_render(&cfg, &location, output.as_deref()).await?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
