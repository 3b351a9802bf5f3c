// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[nasa]` - API key, query parameters, timeout and endpoint URLs
//! - `[display]` - Remote image cache sizing
//! - `[logging]` - Log level
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `STELLAR_VIEW_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use stellar_view::config;
//!
//! let (mut config, _warning) = config::load();
//! config.nasa.api_key = "MY_KEY".to_string();
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable holding the NASA API key.
pub const ENV_API_KEY: &str = "NASA_API_KEY";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// NASA service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NasaConfig {
    pub api_key: String,
    pub rover: String,
    pub sol: u32,
    pub library_query: String,
    pub library_media_type: String,
    pub library_limit: usize,
    pub request_timeout_secs: u64,
    pub apod_url: String,
    pub mars_url: String,
    pub epic_url: String,
    pub epic_archive_url: String,
    pub library_url: String,
    pub static_tile_url: String,
}

impl Default for NasaConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            rover: DEFAULT_ROVER.to_string(),
            sol: DEFAULT_SOL,
            library_query: DEFAULT_LIBRARY_QUERY.to_string(),
            library_media_type: DEFAULT_LIBRARY_MEDIA_TYPE.to_string(),
            library_limit: DEFAULT_LIBRARY_LIMIT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            apod_url: DEFAULT_APOD_URL.to_string(),
            mars_url: DEFAULT_MARS_URL.to_string(),
            epic_url: DEFAULT_EPIC_URL.to_string(),
            epic_archive_url: DEFAULT_EPIC_ARCHIVE_URL.to_string(),
            library_url: DEFAULT_LIBRARY_URL.to_string(),
            static_tile_url: DEFAULT_STATIC_TILE_URL.to_string(),
        }
    }
}

impl NasaConfig {
    /// Request timeout clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Library result cap. The grid never shows more than six entries.
    #[must_use]
    pub fn library_limit(&self) -> usize {
        self.library_limit
            .clamp(MIN_LIBRARY_LIMIT, DEFAULT_LIBRARY_LIMIT)
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Number of decoded remote images kept in memory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_cache_entries: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            image_cache_entries: Some(DEFAULT_IMAGE_CACHE_ENTRIES),
        }
    }
}

impl DisplayConfig {
    #[must_use]
    pub fn image_cache_entries(&self) -> usize {
        self.image_cache_entries
            .unwrap_or(DEFAULT_IMAGE_CACHE_ENTRIES)
            .max(MIN_IMAGE_CACHE_ENTRIES)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub nasa: NasaConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// API Key Resolution
// =============================================================================

/// Resolves the API key: CLI flag, then `NASA_API_KEY`, then the config file.
pub fn resolve_api_key(cli_key: Option<String>, nasa: &NasaConfig) -> String {
    pick_api_key(cli_key, std::env::var(ENV_API_KEY).ok(), &nasa.api_key)
}

fn pick_api_key(cli_key: Option<String>, env_key: Option<String>, configured: &str) -> String {
    cli_key
        .into_iter()
        .chain(env_key)
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
        .unwrap_or_else(|| {
            let configured = configured.trim();
            if configured.is_empty() {
                DEFAULT_API_KEY.to_string()
            } else {
                configured.to_string()
            }
        })
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with an i18n key describing the problem.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
