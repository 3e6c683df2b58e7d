//! Configuration management
//!
//! Settings are layered, later layers winning key by key:
//! 1. Built-in defaults
//! 2. User config (`<config dir>/qloss/config.yaml`)
//! 3. Project config (`./.qloss.yaml`)
//! 4. File named by `QLOSS_CONFIG`
//!
//! Command-line flags override the merged result.

use serde::{Deserialize, Serialize};
use serde_yml::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::density::Bandwidth;
use crate::core::one_sided::OneSidedOptions;
use crate::core::two_sided::TwoSidedOptions;

/// Environment variable naming an extra config file
pub const CONFIG_ENV: &str = "QLOSS_CONFIG";

/// Project-local config file name
pub const PROJECT_CONFIG: &str = ".qloss.yaml";

/// Merged configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub two_sided: TwoSidedOptions,
    pub one_sided: OneSidedOptions,
    pub chart: ChartConfig,
}

/// Default chart appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Canvas width in braille dots
    pub width: u32,

    /// Canvas height in braille dots
    pub height: u32,

    pub density: bool,
    pub mean_marker: bool,
    pub annotate: bool,
    pub ticks: bool,
    pub bandwidth: Bandwidth,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 120,
            height: 48,
            density: true,
            mean_marker: true,
            annotate: true,
            ticks: true,
            bandwidth: Bandwidth::Scott,
            x_label: None,
            y_label: None,
        }
    }
}

impl Config {
    /// Load configuration from all standard locations
    pub fn load() -> Self {
        Self::load_from(&Self::sources())
    }

    /// Candidate config files in precedence order (lowest first)
    pub fn sources() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(path) = Self::user_config_path() {
            paths.push(path);
        }
        paths.push(PathBuf::from(PROJECT_CONFIG));
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.is_empty() {
                paths.push(PathBuf::from(path));
            }
        }
        paths
    }

    /// User-level config file path
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "qloss")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge the given files over the defaults
    ///
    /// Missing files are skipped. Unreadable, malformed or wrongly typed
    /// files are logged and skipped on their own; the other layers still
    /// apply.
    pub fn load_from(paths: &[PathBuf]) -> Self {
        let mut config = Self::default();
        let mut merged = match serde_yml::to_value(&config) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to serialize default config: {}", e);
                return config;
            }
        };

        for path in paths {
            let Some(layer) = read_layer(path) else {
                continue;
            };
            let mut candidate = merged.clone();
            merge(&mut candidate, layer);
            match serde_yml::from_value::<Self>(candidate.clone()) {
                Ok(applied) => {
                    log::debug!("Applied config layer {}", path.display());
                    config = applied;
                    merged = candidate;
                }
                Err(e) => log::warn!("Ignoring invalid config {}: {}", path.display(), e),
            }
        }

        config
    }
}

fn read_layer(path: &Path) -> Option<Value> {
    if !path.exists() {
        return None;
    }
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Cannot read config {}: {}", path.display(), e);
            return None;
        }
    };
    match serde_yml::from_str::<Value>(&content) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Cannot parse config {}: {}", path.display(), e);
            None
        }
    }
}

/// Deep-merge `overlay` into `base`; mappings merge, everything else replaces
fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
