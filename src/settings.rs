//! CLI settings with persistence
//!
//! Settings are saved to `~/.config/pokedex/settings.toml`

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use pokedex_integration::CatalogConfig;

/// All CLI settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pokedex"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found.
    /// Logging is not initialized yet when this runs, so problems are
    /// returned as warnings for the caller to report.
    pub fn load() -> (Self, Vec<String>) {
        let Some(path) = Self::settings_path() else {
            return (Self::default(), vec!["Could not determine config directory".into()]);
        };

        if !path.exists() {
            return (Self::default(), Vec::new());
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(e) => (
                Self::default(),
                vec![format!("Failed to read settings file {:?}: {}, using defaults", path, e)],
            ),
        }
    }

    fn parse(content: &str) -> (Self, Vec<String>) {
        match toml::from_str(content) {
            Ok(settings) => (settings, Vec::new()),
            Err(e) => (
                Self::default(),
                vec![format!("Failed to parse settings: {}, using defaults", e)],
            ),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("settings.toml");

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(path)
    }

    pub fn report(warnings: &[String]) {
        for warning in warnings {
            warn!("{}", warning);
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
