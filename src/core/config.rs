//! # Configuration
//!
//! Centralizes settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.shelf/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover the options.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::api::client::DEFAULT_BASE_URL;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub base_url: Option<String>,
}

/// Final config with concrete values, no Options.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Returns the path to `~/.shelf/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".shelf").join("config.toml"))
}

/// Load config from `~/.shelf/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ShelfConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ShelfConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ShelfConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ShelfConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ShelfConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Shelf Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [catalog]
# base_url = "http://localhost:8000"   # Or set SHELF_BASE_URL env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

/// Resolve the final config by collapsing: defaults → config file → env → CLI.
///
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(config: &ShelfConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SHELF_BASE_URL").ok())
        .or_else(|| config.catalog.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ResolvedConfig { base_url }
}
