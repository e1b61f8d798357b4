//! Configuration file support for Pillbox.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/pillbox/config.toml`.

use crate::{Error, QuickAddPreset, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub quick_add: QuickAddConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl DataConfig {
    /// Key-value store file inside the data directory
    pub fn store_path(data_dir: &Path) -> PathBuf {
        data_dir.join("store.json")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
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

/// Quick-add buttons
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuickAddConfig {
    #[serde(default = "default_presets")]
    pub presets: Vec<QuickAddPreset>,
}

impl Default for QuickAddConfig {
    fn default() -> Self {
        Self {
            presets: default_presets(),
        }
    }
}

impl QuickAddConfig {
    /// Preset with exactly this name
    pub fn find(&self, name: &str) -> Option<&QuickAddPreset> {
        self.presets.iter().find(|p| p.name == name)
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("pillbox")
}

fn default_log_level() -> String {
    "warn".into()
}

fn default_presets() -> Vec<QuickAddPreset> {
    vec![
        QuickAddPreset::new("Vitamin D", 1),
        QuickAddPreset::new("Vitamin C", 1),
        QuickAddPreset::new("Omega-3", 1),
        QuickAddPreset::new("Magnesium", 1),
    ]
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Quick-add presets skip manual entry checks, so they are checked here
    pub fn validate(&self) -> Result<()> {
        for preset in &self.quick_add.presets {
            if preset.name.trim().is_empty() {
                return Err(Error::Config("quick-add preset with empty name".into()));
            }
            if preset.dose < 1 {
                return Err(Error::Config(format!(
                    "quick-add preset {:?} must have a dose of 1 or more",
                    preset.name
                )));
            }
        }
        Ok(())
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("pillbox").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
