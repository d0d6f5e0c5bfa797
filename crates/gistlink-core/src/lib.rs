pub mod config;
pub mod logging;

pub mod error;
pub mod gist;
pub mod params;
pub mod render;
pub mod resolve;
pub mod session;
pub mod telemetry;
