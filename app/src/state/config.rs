//! Configuration loading and persistence.
//!
//! Handles the TOML config file (~/.config/greenside/config.toml): the
//! statistics windows and an optional data-directory override. All fields
//! have defaults so the file is optional and hand-editable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use greenside::StatsConfig;

/// Returns `~/.config/greenside/config.toml`.
pub fn default_config_path() -> PathBuf {
    let dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("greenside");
    dir.join("config.toml")
}

/// Top-level persisted config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreensideConfig {
    /// Override for the round-store directory (default: platform data dir).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Trend and handicap windows for the statistics engine.
    #[serde(default)]
    pub stats: StatsConfig,
}

impl Default for GreensideConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            stats: StatsConfig::default(),
        }
    }
}

/// Load persisted config from disk. If the file does not exist, creates it
/// with all-defaults and returns that. A file that fails to parse is left
/// alone and defaults are used.
pub fn load(path: &Path) -> GreensideConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GreensideConfig>(&contents) {
            Ok(config) => {
                tracing::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("failed to parse {}: {e}", path.display());
                GreensideConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let defaults = GreensideConfig::default();
            tracing::info!("no config file found, creating {}", path.display());
            save_to(path, &defaults);
            defaults
        }
        Err(e) => {
            tracing::warn!("failed to read {}: {e}", path.display());
            GreensideConfig::default()
        }
    }
}

/// Write config to a specific path. Creates parent dirs if needed. Never panics.
pub fn save_to(path: &Path, config: &GreensideConfig) {
    if let Some(dir) = path.parent()
        && let Err(e) = std::fs::create_dir_all(dir)
    {
        tracing::warn!("failed to create config dir {}: {e}", dir.display());
        return;
    }
    match toml::to_string_pretty(config) {
        Ok(contents) => {
            if let Err(e) = std::fs::write(path, contents) {
                tracing::warn!("failed to write {}: {e}", path.display());
            }
        }
        Err(e) => {
            tracing::warn!("failed to serialize config: {e}");
        }
    }
}
