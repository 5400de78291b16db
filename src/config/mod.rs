// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading
//! user preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[contact]` - Contact form endpoint
//! - `[location]` - Geocoded address and map fallback link
//! - `[analytics]` - Consent-gated tag-manager container
//! - `[slideshow]` - Hero slideshow interval and image list
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `PROSPEKT_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Prospekt";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "PROSPEKT_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (`de` or `en`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    /// Remote endpoint receiving the multipart form POST.
    #[serde(default = "default_contact_endpoint")]
    pub endpoint: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_contact_endpoint(),
        }
    }
}

/// Location panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocationConfig {
    /// Free-text address handed to the geocoder.
    #[serde(default = "default_address")]
    pub address: String,

    /// External map link used when geocoding fails or returns nothing.
    #[serde(default = "default_map_fallback_url")]
    pub map_fallback_url: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            map_fallback_url: default_map_fallback_url(),
        }
    }
}

/// Analytics consent settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyticsConfig {
    /// Tag-manager container id loaded after explicit consent.
    #[serde(default = "default_analytics_container_id")]
    pub container_id: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            container_id: default_analytics_container_id(),
        }
    }
}

/// Hero slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlideshowConfig {
    /// Seconds between transitions.
    #[serde(default = "default_slideshow_interval")]
    pub interval_secs: u64,

    /// Ordered image paths; order matters.
    #[serde(default = "default_slideshow_images")]
    pub images: Vec<String>,
}

impl SlideshowConfig {
    /// Interval clamped to the supported range so persisted configs cannot
    /// request nonsensical transition rates.
    #[must_use]
    pub fn clamped_interval_secs(&self) -> u64 {
        self.interval_secs
            .clamp(MIN_SLIDESHOW_INTERVAL_SECS, MAX_SLIDESHOW_INTERVAL_SECS)
    }
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_slideshow_interval(),
            images: default_slideshow_images(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Contact form settings.
    #[serde(default)]
    pub contact: ContactConfig,

    /// Location panel settings.
    #[serde(default)]
    pub location: LocationConfig,

    /// Analytics consent settings.
    #[serde(default)]
    pub analytics: AnalyticsConfig,

    /// Hero slideshow settings.
    #[serde(default)]
    pub slideshow: SlideshowConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_contact_endpoint() -> String {
    DEFAULT_CONTACT_ENDPOINT.to_string()
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

fn default_map_fallback_url() -> String {
    DEFAULT_MAP_FALLBACK_URL.to_string()
}

fn default_analytics_container_id() -> String {
    DEFAULT_ANALYTICS_CONTAINER_ID.to_string()
}

fn default_slideshow_interval() -> u64 {
    DEFAULT_SLIDESHOW_INTERVAL_SECS
}

fn default_slideshow_images() -> Vec<String> {
    DEFAULT_SLIDESHOW_IMAGES
        .iter()
        .map(ToString::to_string)
        .collect()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional directory override.
///
/// Precedence: explicit override, then `PROSPEKT_CONFIG_DIR`, then the
/// platform config directory.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    let dir = base_dir
        .or_else(|| std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        });

    dir.map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning key). If loading fails, the
/// defaults are used and the warning explains what went wrong; startup never
/// aborts over a malformed settings file.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
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
    if let Some(path) = get_config_path_with_override(None) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
