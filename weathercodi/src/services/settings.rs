//! Settings service
//!
//! Manages application settings persistence using JSON file storage.

use crate::config::{
    DEFAULT_LOCATION, DEFAULT_LOGIN_DELAY_MS, DEFAULT_WEATHER_MAX_DELAY_MS,
    DEFAULT_WEATHER_MIN_DELAY_MS, MAX_SIMULATED_DELAY_MS,
};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

/// Which key-value backend persists sessions and wardrobes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Nothing survives a restart
    Memory,
    /// One JSON file per key
    #[default]
    File,
    Sqlite,
}

/// Storage configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Custom location (if None, uses a default under the data directory)
    #[serde(default)]
    pub path: Option<String>,
}

impl StorageSettings {
    /// Directory (file backend) or database file (sqlite backend) to use
    pub fn resolve_path(&self, data_dir: &Path) -> PathBuf {
        match &self.path {
            Some(custom) => PathBuf::from(custom),
            None => match self.backend {
                StorageBackend::Sqlite => data_dir.join("weathercodi.db"),
                StorageBackend::Memory | StorageBackend::File => data_dir.join("store"),
            },
        }
    }
}

/// Fake network latency applied to login and weather lookups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencySettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,
    #[serde(default = "default_weather_min_ms")]
    pub weather_min_ms: u64,
    #[serde(default = "default_weather_max_ms")]
    pub weather_max_ms: u64,
}

fn default_true() -> bool {
    true
}

fn default_login_ms() -> u64 {
    DEFAULT_LOGIN_DELAY_MS
}

fn default_weather_min_ms() -> u64 {
    DEFAULT_WEATHER_MIN_DELAY_MS
}

fn default_weather_max_ms() -> u64 {
    DEFAULT_WEATHER_MAX_DELAY_MS
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            login_ms: default_login_ms(),
            weather_min_ms: default_weather_min_ms(),
            weather_max_ms: default_weather_max_ms(),
        }
    }
}

impl LatencySettings {
    /// No delays at all
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn login_delay(&self) -> Duration {
        if self.enabled {
            Duration::from_millis(self.login_ms)
        } else {
            Duration::ZERO
        }
    }

    /// Inclusive delay range for a weather lookup, in milliseconds
    pub fn weather_delay_range(&self) -> Option<(u64, u64)> {
        self.enabled
            .then_some((self.weather_min_ms, self.weather_max_ms))
    }
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default = "default_location")]
    pub default_location: String,
    /// Seed a starter wardrobe for users that have none yet
    #[serde(default = "default_true")]
    pub seed_default_wardrobe: bool,
    #[serde(default)]
    pub latency: LatencySettings,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            storage: StorageSettings::default(),
            default_location: default_location(),
            seed_default_wardrobe: true,
            latency: LatencySettings::default(),
        }
    }
}

impl AppSettings {
    /// Check values against the limits in `config`
    pub fn validate(&self) -> Result<()> {
        if self.default_location.trim().is_empty() {
            return Err(AppError::Settings(
                "default_location must not be empty".to_string(),
            ));
        }

        let latency = &self.latency;
        for (name, value) in [
            ("login_ms", latency.login_ms),
            ("weather_min_ms", latency.weather_min_ms),
            ("weather_max_ms", latency.weather_max_ms),
        ] {
            if value > MAX_SIMULATED_DELAY_MS {
                return Err(AppError::Settings(format!(
                    "{} must be at most {}ms, got {}",
                    name, MAX_SIMULATED_DELAY_MS, value
                )));
            }
        }

        if latency.weather_min_ms > latency.weather_max_ms {
            return Err(AppError::Settings(format!(
                "weather_min_ms ({}) exceeds weather_max_ms ({})",
                latency.weather_min_ms, latency.weather_max_ms
            )));
        }

        Ok(())
    }
}

/// Service for managing application settings
#[derive(Clone)]
pub struct SettingsService {
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            settings_path: data_dir.join("settings.json"),
        }
    }

    /// Load settings from disk or create default if not exists
    pub async fn load(&self) -> Result<AppSettings> {
        if !self.settings_path.exists() {
            tracing::info!("Settings file not found, creating default settings");
            let default = AppSettings::default();
            self.save(&default).await?;
            return Ok(default);
        }

        let content = fs::read_to_string(&self.settings_path).await?;
        let settings: AppSettings = serde_json::from_str(&content)
            .map_err(|e| AppError::Settings(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;

        Ok(settings)
    }

    /// Save settings to disk
    pub async fn save(&self, settings: &AppSettings) -> Result<()> {
        settings.validate()?;

        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| AppError::Settings(format!("Failed to serialize settings: {}", e)))?;

        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&self.settings_path, content).await?;
        tracing::info!("Settings saved to {:?}", self.settings_path);

        Ok(())
    }

    /// Update latency settings
    pub async fn update_latency(&self, latency: LatencySettings) -> Result<()> {
        let mut settings = self.load().await?;
        settings.latency = latency;
        self.save(&settings).await
    }

    /// Update the location used for the default weather lookup
    pub async fn update_default_location(&self, location: String) -> Result<()> {
        let mut settings = self.load().await?;
        settings.default_location = location;
        self.save(&settings).await
    }
}
