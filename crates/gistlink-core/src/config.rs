use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Title shown when the query string carries no `title`.
pub const DEFAULT_TITLE: &str = "Link to Gist";

/// Public GitHub REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Global configuration loaded from `~/.config/gistlink/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistlinkConfig {
    /// Root of the Gist API; `/gists/{id}` is appended to it.
    pub api_base: String,
    /// Page title used when the query string has none.
    pub default_title: String,
    /// User-Agent sent with every API request (GitHub rejects requests without one).
    pub user_agent: String,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
    /// Analytics measurement ID; if missing, the build-time
    /// `GISTLINK_MEASUREMENT_ID` is used, and without either, page views are not recorded.
    #[serde(default)]
    pub measurement_id: Option<String>,
}

impl Default for GistlinkConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            user_agent: concat!("gistlink/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            measurement_id: None,
        }
    }
}

impl GistlinkConfig {
    /// Measurement ID from the config file, else the one baked in at build time.
    pub fn effective_measurement_id(&self) -> Option<String> {
        self.measurement_id
            .clone()
            .or_else(|| option_env!("GISTLINK_MEASUREMENT_ID").map(String::from))
            .filter(|id| !id.trim().is_empty())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gistlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GistlinkConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but against an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<GistlinkConfig> {
    if !path.exists() {
        let default_cfg = GistlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GistlinkConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
