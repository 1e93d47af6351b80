use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The file parsed but holds an unusable value: a blank
    /// `theme.primary_color` or a blank `logging.filter`.
    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/appstate/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("appstate").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Rejects a blank `theme.primary_color` or `logging.filter`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme.primary_color.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "theme.primary_color must not be empty".to_string(),
            });
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "logging.filter must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ThemeMode;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert_eq!(config.theme.primary_color, "#007bff");
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let (_dir, path) = write_config("[theme]\nmode = \"dark\"\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert_eq!(config.theme.primary_color, "#007bff");
    }

    #[test]
    fn blank_color_fails_validation() {
        let (_dir, path) = write_config("[theme]\nprimary_color = \"  \"\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(err.to_string().contains("theme.primary_color"));
    }

    #[test]
    fn blank_filter_fails_validation() {
        let (_dir, path) = write_config("[logging]\nfilter = \"\"\n");
        let err = Config::load_from(&path).unwrap_err();
        match err {
            ConfigError::ValidationError { message } => {
                assert_eq!(message, "logging.filter must not be empty")
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }
}
