//! Persisted settings.
//!
//! Provider choice, endpoint, model, and credential survive across
//! sessions as a TOML file. Loading an absent file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use liveforge_protocols::provider::{ProviderConfig, ProviderKind};

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

/// User-facing settings for the generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub provider: ProviderKind,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub api_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        let config = ProviderConfig::default();
        Self {
            provider: config.provider,
            endpoint: config.endpoint,
            model: config.model,
            api_key: config.api_key,
        }
    }
}

impl Settings {
    /// The provider configuration these settings describe.
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            provider: self.provider,
            endpoint: self.endpoint.trim().to_string(),
            model: self.model.trim().to_string(),
            api_key: self.api_key.trim().to_string(),
        }
    }
}

/// Settings persistence errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Loads and saves [`Settings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform config location, e.g. `~/.config/liveforge/settings.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("liveforge")
            .join("settings.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings; an absent file yields the defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No settings file, using defaults");
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save settings, creating parent directories as needed.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(settings)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }
}
