//! Configuration loaded from `config.toml`.
//!
//! ```toml
//! [shell]
//! error_clear_ms = 1000
//! copy_on_equals = false
//!
//! [logging]
//! level = "warn"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors from loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub shell: ShellConfig,
    pub logging: LoggingConfig,
}

/// Behaviour of the terminal front end.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    /// Milliseconds an error stays on screen before the calculator clears.
    pub error_clear_ms: u64,
    /// Copy the display to the clipboard after every `=`.
    pub copy_on_equals: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            error_clear_ms: 1000,
            copy_on_equals: false,
        }
    }
}

impl ShellConfig {
    pub fn error_clear_delay(&self) -> Duration {
        Duration::from_millis(self.error_clear_ms)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/keycalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the given path, or the default location when `None`.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.shell.error_clear_delay(), Duration::from_secs(1));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml("[shell]\nerror_clear_ms = 250\n").unwrap();
        assert_eq!(config.shell.error_clear_ms, 250);
        assert!(!config.shell.copy_on_equals);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            [shell]
            error_clear_ms = 0
            copy_on_equals = true

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.shell.error_clear_ms, 0);
        assert!(config.shell.copy_on_equals);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_toml("[shell]\nerror_clear_ms = \"soon\"\n").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = Path::new("/nonexistent/keycalc/config.toml");
        assert_eq!(Config::load(path).unwrap(), Config::default());
    }
}
