//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.marquee/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The OMDb API key is deliberately not compiled in: it comes from the
//! config file, the `OMDB_API_KEY` env var (a `.env` file works too), or
//! `--api-key`. The documentation placeholder `YOUR_API_KEY` and empty
//! strings count as "no key configured".

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::omdb::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MarqueeConfig {
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OmdbConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub posters: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Placeholder people leave in copied configs; treated as "no key".
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` when unset, empty, or the documentation placeholder.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Whether the detail view downloads and renders poster artwork.
    pub posters: bool,
}

// ============================================================================
// Error Type
// ============================================================================

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

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.marquee/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".marquee").join("config.toml"))
}

/// Load config from `~/.marquee/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MarqueeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MarqueeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MarqueeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MarqueeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MarqueeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Marquee Configuration
# All settings are optional; defaults cover anything not specified.
# Override hierarchy: defaults -> this file -> env vars -> CLI flags.

# [omdb]
# api_key = "abcd1234"          # Or set OMDB_API_KEY env var (free key at omdbapi.com)
# base_url = "https://www.omdbapi.com/"

# [ui]
# posters = true                # Render poster artwork in the detail view
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

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_api_key` is from the `--api-key` flag (None = not specified).
pub fn resolve(config: &MarqueeConfig, cli_api_key: Option<&str>) -> ResolvedConfig {
    // API key: CLI → env → config, then placeholder/empty normalization
    let api_key = normalize_key(
        cli_api_key
            .map(|s| s.to_string())
            .or_else(|| std::env::var("OMDB_API_KEY").ok())
            .or_else(|| config.omdb.api_key.clone()),
    );

    // Base URL: env → config → default
    let base_url = std::env::var("OMDB_BASE_URL")
        .ok()
        .or_else(|| config.omdb.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ResolvedConfig {
        api_key,
        base_url,
        posters: config.ui.posters.unwrap_or(true),
    }
}

/// Collapses unusable keys to `None`: whitespace, empty, or the placeholder.
fn normalize_key(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let key = raw.trim();
    if key.is_empty() || key == PLACEHOLDER_API_KEY {
        warn!("Configured OMDb API key is empty or the placeholder; treating as unset");
        return None;
    }
    Some(key.to_string())
}
