//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{OpenfishError, OpenfishResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Playback and sampling defaults.
    #[serde(default)]
    pub playback: PlaybackDefaults,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for the playback loop that drives interpolation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackDefaults {
    /// Rate at which the overlay is recomputed during playback (Hz).
    pub tick_rate_hz: u32,

    /// Number of bins used for the timeline heatmap.
    pub heatmap_bins: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "openfish=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for PlaybackDefaults {
    fn default() -> Self {
        Self {
            tick_rate_hz: 30,
            heatmap_bins: 50,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Load config from an explicit path. Errors are returned, not defaulted.
    pub fn load_from(path: impl AsRef<Path>) -> OpenfishResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OpenfishError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> OpenfishResult<()> {
        if self.playback.tick_rate_hz == 0 {
            return Err(OpenfishError::config("playback.tick_rate_hz must be > 0"));
        }
        if self.playback.heatmap_bins == 0 {
            return Err(OpenfishError::config("playback.heatmap_bins must be > 0"));
        }
        Ok(())
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("openfish").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.playback.tick_rate_hz, 30);
        assert_eq!(config.playback.heatmap_bins, 50);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "logging": { "level": "debug" } }"#).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.playback.tick_rate_hz, 30);
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("openfish_missing_config.json");
        let _ = std::fs::remove_file(&path);
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, OpenfishError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_from_rejects_zero_tick_rate() {
        let path = std::env::temp_dir().join("openfish_zero_tick_config.json");
        std::fs::write(&path, r#"{ "playback": { "tick_rate_hz": 0 } }"#).unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, OpenfishError::Config { .. }));

        std::fs::remove_file(&path).ok();
    }
}
