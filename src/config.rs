//! Studio Configuration
//!
//! Configuration can be loaded from:
//! - Default values
//! - Config file (~/.config/roadmap-studio/config.toml)
//! - Command line overrides (see main.rs)

use crate::canvas::PathLayout;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Backend connection
    pub api: ApiConfig,

    /// Canvas defaults
    pub canvas: CanvasConfig,

    /// Native window
    pub window: WindowConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, without trailing slash
    pub base_url: String,

    /// Request timeout
    pub timeout_secs: u64,

    /// Where the access/refresh tokens live
    pub token_path: PathBuf,
}

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Container width assumed before the first frame is laid out
    pub container_width: f32,

    /// Draw the dashed path line behind the nodes
    pub show_path: bool,

    /// Placement of fetched milestones
    pub path: PathLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            timeout_secs: 10,
            token_path: config_dir().join("tokens.json"),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            container_width: 1000.0,
            show_path: true,
            path: PathLayout::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            canvas: CanvasConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

/// ~/.config/roadmap-studio
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roadmap-studio")
}

impl StudioConfig {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Failed to load {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StudioConfig::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.canvas.container_width, 1000.0);
        assert_eq!(config.canvas.path, PathLayout::default());
        assert!(config.api.token_path.ends_with("tokens.json"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        let mut config = StudioConfig::default();
        config.api.base_url = "https://roadmap.example.com/api".to_string();
        config.canvas.path.gap = 80.0;
        config.save_to(&path).unwrap();

        let loaded = StudioConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[canvas]\ncontainer_width = 1400.0\n").unwrap();

        let loaded = StudioConfig::load_from(&path).unwrap();
        assert_eq!(loaded.canvas.container_width, 1400.0);
        assert!(loaded.canvas.show_path);
        assert_eq!(loaded.api, ApiConfig::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "canvas = 3").unwrap();
        assert!(StudioConfig::load_from(&path).is_err());
    }
}
