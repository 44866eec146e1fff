//! Configuration management and validation
//!
//! Provides layered configuration for the block-lot processor: defaults,
//! an optional TOML file, and CLI argument overrides applied on top.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration for the block-lot processor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Processing settings
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Processing pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Input building-records CSV file
    pub input_path: Option<PathBuf>,

    /// Output CSV file for the augmented table
    pub output_path: Option<PathBuf>,

    /// Drop the original combined column from the output
    #[serde(default)]
    pub drop_combined: bool,

    /// Overwrite an existing output file
    #[serde(default)]
    pub force_overwrite: bool,

    /// Report what would be done without writing output
    #[serde(default)]
    pub dry_run: bool,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            output_path: None,
            drop_combined: false,
            force_overwrite: false,
            dry_run: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default config file location (`~/.config/blocklot-processor/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Cannot determine user config directory"))?;
        Ok(config_dir.join("blocklot-processor").join("config.toml"))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config '{}'", path.display()), e))?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            Error::configuration(format!("Invalid config file '{}': {}", path.display(), e))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration with the layered approach: defaults, then the
    /// config file if one exists
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::default_config_path()?;
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.processing.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input_path.display()
                )));
            }
        }

        const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}', expected one of: {}",
                self.logging.level,
                LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.logging.level, "warn");
        assert!(!config.processing.drop_combined);
    }

    #[test]
    fn test_from_file_parses_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[processing]
drop_combined = true
force_overwrite = true

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(config.processing.drop_combined);
        assert!(config.processing.force_overwrite);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_file_rejects_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "processing = not valid toml").unwrap();

        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_input_path() {
        let mut config = Config::default();
        config.processing.input_path = Some(PathBuf::from("/nonexistent/buildings.csv"));
        assert!(config.validate().is_err());
    }
}
