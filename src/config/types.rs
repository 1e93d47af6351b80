use serde::{Deserialize, Serialize};

use crate::app::{Theme, ThemeMode, DEFAULT_PRIMARY_COLOR};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial theme of the global store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Light or dark (default: light).
    #[serde(default)]
    pub mode: ThemeMode,
    /// Primary colour token (default: "#007bff").
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set (default: "warn").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_primary_color() -> String {
    DEFAULT_PRIMARY_COLOR.to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl ThemeConfig {
    pub fn initial_theme(&self) -> Theme {
        Theme {
            mode: self.mode,
            primary_color: self.primary_color.clone(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            primary_color: default_primary_color(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
