//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader
//!
//! Loads settings as TOML from the platform config directory using
//! the [`directories`](https://docs.rs/directories) crate. Every section is
//! `#[serde(default)]`, so a partial file fills the gaps with defaults.
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! let settings = ControllerSettings::from(&config);
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs as TokioFs;
use tracing::info;

use crate::error::{AppError, AppResult};

/// App theme (color scheme) selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Mocha,

    Latte,
}

/// Log file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` is layered on top.
    pub level: String,

    /// Directory for the daily rolling log file.
    pub dir: PathBuf,

    pub file_prefix: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: PathBuf::from("logs"),
            file_prefix: "galleria".to_string(),
        }
    }
}

/// Recycle bin behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecycleBinConfig {
    /// How often the event loop runs a purge pass when nothing else happens.
    #[serde(with = "humantime_serde")]
    pub purge_interval: Duration,

    /// Ask before "Delete All" empties the bin.
    pub confirm_delete_all: bool,
}

impl Default for RecycleBinConfig {
    fn default() -> Self {
        Self {
            purge_interval: Duration::from_secs(60 * 60),
            confirm_delete_all: true,
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event loop tick (notification expiry, purge timer check).
    #[serde(with = "humantime_serde")]
    pub tick_rate: Duration,

    /// How long a notification stays on screen.
    #[serde(with = "humantime_serde")]
    pub notification_ttl: Duration,

    pub show_sidebar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            notification_ttl: Duration::from_secs(3),
            show_sidebar: true,
        }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,

    pub log: LogConfig,

    pub recycle_bin: RecycleBinConfig,

    pub ui: UiConfig,
}

impl Config {
    /// Loads config from the platform config dir, creating it with defaults
    /// when missing.
    ///
    /// Expected at `$XDG_CONFIG_HOME/galleria/config.toml` (Linux), or the
    /// equivalent on Windows/macOS.
    pub async fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        Ok(Self::load_from(&path).await?)
    }

    /// Load from an explicit path, writing defaults there if it does not exist.
    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if TokioFs::try_exists(path)
            .await
            .map_err(|e| AppError::config_io(path, e))?
        {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(path)
                .await
                .map_err(|e| AppError::config_io(path, e))?;
            Ok(toml::from_str(&text)?)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(path).await?;

            Ok(default_config)
        }
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::config_io(parent, e))?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        TokioFs::write(path, toml_str)
            .await
            .map_err(|e| AppError::config_io(path, e))?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "galleria", "galleria")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory."))?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            theme = "latte"

            [recycle_bin]
            purge_interval = "15m"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.theme, Theme::Latte);
        assert_eq!(cfg.recycle_bin.purge_interval, Duration::from_secs(15 * 60));
        assert!(cfg.recycle_bin.confirm_delete_all);
        assert_eq!(cfg.ui, UiConfig::default());
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn test_bad_duration_is_config_error() {
        let err = toml::from_str::<Config>("[ui]\ntick_rate = \"soon\"\n").unwrap_err();
        let err: AppError = err.into();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[tokio::test]
    async fn test_load_creates_then_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = Config::load_from(&path).await.unwrap();
        assert_eq!(created, Config::default());
        assert!(path.exists());

        let mut changed = created.clone();
        changed.ui.show_sidebar = false;
        changed.log.level = "debug".to_string();
        changed.save_to(&path).await.unwrap();

        let loaded = Config::load_from(&path).await.unwrap();
        assert_eq!(loaded, changed);
    }
}
