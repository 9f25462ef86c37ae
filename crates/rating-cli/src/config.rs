//! Configuration file loading for the rating calculator.
//!
//! Defaults for each federation and the output format are read from a TOML
//! file. Command-line flags take precedence over anything set here.

use crate::output::OutputFormat;
use rating_engine::EcfKFactor;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// US Chess defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UscfDefaults {
    /// Whether bonus points are applied. Defaults to true.
    #[serde(default = "default_apply_bonus")]
    pub apply_bonus: bool,
}

impl Default for UscfDefaults {
    fn default() -> Self {
        UscfDefaults {
            apply_bonus: default_apply_bonus(),
        }
    }
}

fn default_apply_bonus() -> bool {
    true
}

/// ECF defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct EcfDefaults {
    /// K-factor, 40 or 20. Defaults to 40.
    #[serde(default)]
    pub k_factor: EcfKFactor,
}

/// Main calculator configuration.
///
/// Uses `ratings.toml` in the current directory unless another path is given.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct RatingsConfig {
    /// Output format when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub uscf: UscfDefaults,
    #[serde(default)]
    pub ecf: EcfDefaults,
}

impl RatingsConfig {
    /// Loads the configuration from `path`, or from [`Self::config_path()`] if `None`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path.map_or_else(Self::config_path, Path::to_path_buf);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("ratings.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
format = "json"

[uscf]
apply_bonus = false

[ecf]
k_factor = 20
"#;

        let config: RatingsConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.uscf.apply_bonus);
        assert_eq!(config.ecf.k_factor, EcfKFactor::Reduced);
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: RatingsConfig = toml::from_str("").unwrap();

        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.uscf.apply_bonus);
        assert_eq!(config.ecf.k_factor, EcfKFactor::Standard);
    }

    #[test]
    fn test_partial_section_defaults() {
        let config: RatingsConfig = toml::from_str("[uscf]\n").unwrap();
        assert!(config.uscf.apply_bonus);
    }

    #[test]
    fn test_invalid_ecf_k_factor_rejected() {
        let result: Result<RatingsConfig, _> = toml::from_str("[ecf]\nk_factor = 32\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_path_returns_expected_path() {
        assert_eq!(RatingsConfig::config_path(), PathBuf::from("ratings.toml"));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = RatingsConfig::load(Some(&dir.path().join("missing.toml"))).unwrap();
        assert_eq!(config, RatingsConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = \"json\"").unwrap();

        let config = RatingsConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = ").unwrap();

        let result = RatingsConfig::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
