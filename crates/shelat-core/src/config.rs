//! Site configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `/images/...` and other static files
    pub assets_dir: PathBuf,
    /// Optional JSON file replacing the built-in site content
    pub content_path: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            assets_dir: data_dir.join("public"),
            content_path: None,
            log_filter: "info".to_string(),
            window: WindowConfig::default(),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("ShelatOrthodontics"))
            .unwrap_or_else(|| PathBuf::from(".shelat"))
    }

    /// Default location of `config.json`
    pub fn default_path() -> PathBuf {
        Self::data_dir().join("config.json")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config: Config = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(CoreError::Config(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.log_filter.trim().is_empty() {
            return Err(CoreError::Config("log filter cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Dr Devesh Shelat — Orthodontic Treatments".to_string(),
            width: 1280.0,
            height: 800.0,
        }
    }
}

// Simple dirs implementation for the per-user data directory
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = Config::new(PathBuf::from("/srv/shelat"));
        assert_eq!(config.assets_dir, PathBuf::from("/srv/shelat/public"));
        assert!(config.content_path.is_none());
        assert_eq!(config.log_filter, "info");
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"assets_dir":"/tmp/assets","window":{"width":1024.0}}"#)
                .unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("/tmp/assets"));
        assert_eq!(config.window.width, 1024.0);
        assert_eq!(config.window.height, 800.0);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_window_rejected() {
        let mut config = Config::new(PathBuf::from("/srv/shelat"));
        config.window.height = 0.0;
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/shelat/config.json").unwrap();
        assert_eq!(config, Config::default());
    }
}
