//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/biblioteca/config.toml)
//!
//! A missing config file is not an error; every key has a default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default database file name, resolved from the working directory
pub const DEFAULT_DB_FILE: &str = "biblioteca.db";

/// Default log file name, used when logging is enabled without a path
pub const DEFAULT_LOG_FILE: &str = "biblioteca.log";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Log level filter (e.g. "debug"); logging is off when unset
    #[serde(default)]
    pub log_level: Option<String>,

    /// Log file path (defaults to biblioteca.log)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            log_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        toml::from_str(toml_content).context("Failed to parse config TOML")
    }

    /// Get the config file path
    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("biblioteca")
            .join("config.toml")
    }

    /// Get the path logs are written to
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.db_path, PathBuf::from("biblioteca.db"));
        assert!(config.log_level.is_none());
        assert_eq!(config.log_path(), PathBuf::from("biblioteca.log"));
    }

    #[test]
    fn test_config_file_path() {
        let path = Config::config_file_path();
        assert!(path.ends_with("biblioteca/config.toml"));
    }

    #[test]
    fn test_load_from_str() {
        let toml = r#"
            db_path = "/custom/books.db"
            log_level = "debug"
            log_file = "/tmp/biblioteca-test.log"
        "#;

        let config = Config::load_from_str(toml).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/custom/books.db"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/biblioteca-test.log"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::load_from_str("log_level = \"info\"").unwrap();
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let path = PathBuf::from("/nonexistent/config.toml");
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE));
    }

    #[test]
    fn test_load_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "db_path = \"mis-libros.db\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.db_path, PathBuf::from("mis-libros.db"));
    }

    #[test]
    fn test_load_from_path_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "db_path = [not toml").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_serialization() {
        let config = Config {
            db_path: PathBuf::from("/data/biblioteca.db"),
            log_level: Some("warn".to_string()),
            log_file: None,
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("db_path"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.db_path, config.db_path);
        assert_eq!(parsed.log_level, config.log_level);
    }
}
