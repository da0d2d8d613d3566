//! Terminal front end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// How long to wait for input before redrawing, in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,

    /// File that receives log output. Logs are discarded when unset.
    #[serde(default)]
    log_file: Option<PathBuf>,

    /// Color of X marks (a ratatui color name or `#rrggbb`).
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color of O marks.
    #[serde(default = "default_o_color")]
    o_color: String,
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "red".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            log_file: None,
            x_color: default_x_color(),
            o_color: default_o_color(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file, or defaults if the file is absent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.theme()?;
        info!(tick_rate_ms = config.tick_rate_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces the log file.
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }

    /// Resolves the mark colors.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
        })
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid color for {}: {:?}", field, value)))
}

/// Colors used to draw marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Color of X marks.
    pub x: Color,
    /// Color of O marks.
    pub o: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.theme().unwrap(), Theme::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = write_config("tick_rate_ms = 250\nx_color = \"green\"\n");
        let config = TuiConfig::load(file.path()).unwrap();
        assert_eq!(*config.tick_rate_ms(), 250);
        assert_eq!(config.x_color(), "green");
        assert_eq!(config.o_color(), "red");
        assert_eq!(config.theme().unwrap().x, Color::Green);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let file = write_config("tick_rate_ms = \"soon\"");
        let err = TuiConfig::load(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_bad_color_is_error() {
        let file = write_config("o_color = \"not-a-color\"");
        let err = TuiConfig::load(file.path()).unwrap_err();
        assert!(err.message.contains("o_color"));
    }

    #[test]
    fn test_log_file_override() {
        let config = TuiConfig::default().with_log_file(Some(PathBuf::from("game.log")));
        assert_eq!(config.log_file(), &Some(PathBuf::from("game.log")));

        let config = config.with_log_file(None);
        assert_eq!(config.log_file(), &Some(PathBuf::from("game.log")));
    }
}
