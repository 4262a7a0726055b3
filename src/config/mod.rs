// SPDX-License-Identifier: MPL-2.0
//! This module handles the kit's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Admission policy and display defaults for toasts
//! - `[style]` - Styling backend selection
//! - `[diagnostics]` - Lifecycle event collection
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `TOASTKIT_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toastkit::config;
//!
//! let (mut config, _warning) = config::load();
//! config.toast.allow_multiple = true;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::toast::{MaxConcurrent, ToastDuration};
use crate::error::{Error, Result};
use crate::notifications::Placement;
use crate::style::StyleBackend;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Toastkit";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TOASTKIT_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Provider-level toast defaults. Per-toast options override these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToastConfig {
    /// Whether more than one toast may be visible at once.
    pub allow_multiple: bool,

    /// Cap on simultaneously visible toasts.
    pub max_concurrent: usize,

    /// Auto-dismiss delay in milliseconds (0 = persistent).
    pub duration_ms: u64,

    /// Default placement of the toast stack.
    pub position: Placement,

    /// Whether toasts can be swiped away.
    pub swipeable: bool,

    /// Vertical offset of the toast stack, in pixels.
    pub offset_y: f32,

    /// Optional cap on queued toasts. Unbounded when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pending: Option<usize>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            allow_multiple: DEFAULT_ALLOW_MULTIPLE,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            position: Placement::default(),
            swipeable: DEFAULT_SWIPEABLE,
            offset_y: DEFAULT_OFFSET_Y,
            max_pending: None,
        }
    }
}

impl ToastConfig {
    /// Returns the validated concurrency cap.
    #[must_use]
    pub fn max_concurrent(&self) -> MaxConcurrent {
        MaxConcurrent::new(self.max_concurrent)
    }

    /// Returns the default display duration.
    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        ToastDuration::from_millis(self.duration_ms)
    }
}

/// Styling backend selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StyleConfig {
    pub backend: StyleBackend,
}

/// Lifecycle event collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Whether toast lifecycle events are recorded.
    pub enabled: bool,

    /// Number of events kept in memory.
    pub buffer_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        }
    }
}

impl DiagnosticsConfig {
    /// Returns the validated buffer capacity.
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.buffer_capacity)
    }
}

// =============================================================================
// Main Config
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir);
    }
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the default location of `settings.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    config_dir_with_override(None).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, and an unreadable or invalid
/// file yields defaults plus a warning describing the problem.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    let Some(path) = default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
            (Config::default(), Some(err.to_string()))
        }
    }
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    match default_config_path() {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".into())),
    }
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to an explicit path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
