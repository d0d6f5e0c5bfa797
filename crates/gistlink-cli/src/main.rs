use gistlink_core::logging::{self, LogTarget};

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Logging first so config loading is traced.
    match logging::init() {
        Ok(LogTarget::File(_)) => {}
        Ok(LogTarget::Stderr { reason }) => {
            tracing::warn!("file logging unavailable, using stderr: {:#}", reason)
        }
        Err(err) => eprintln!("gistlink: logging disabled: {:#}", err),
    }

    if let Err(err) = Cli::run_from_args().await {
        eprintln!("gistlink error: {:#}", err);
        std::process::exit(1);
    }
}
