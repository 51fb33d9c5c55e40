//! Loading of the optional YAML configuration file.
//!
//! Library API for native hosts. The browser build has no file system and
//! starts from `AppConfig::default()`.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use shared::AppConfig;
use thiserror::Error;

use crate::domain::themes::find_theme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Parse and validate a YAML document. Missing fields take their defaults.
pub fn parse_config(yaml: &str) -> Result<AppConfig, ConfigError> {
    if yaml.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(yaml)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.spendsense.storage_key.trim().is_empty() {
        return Err(ConfigError::Invalid("spendsense.storage_key is empty".to_string()));
    }
    if config.spendsense.max_description_length == 0 {
        return Err(ConfigError::Invalid(
            "spendsense.max_description_length must be at least 1".to_string(),
        ));
    }
    if !(config.mocard.pixel_ratio.is_finite() && config.mocard.pixel_ratio > 0.0) {
        return Err(ConfigError::Invalid(format!(
            "mocard.pixel_ratio must be positive, got {}",
            config.mocard.pixel_ratio
        )));
    }
    if find_theme(&config.mocard.default_theme_id).is_none() {
        return Err(ConfigError::Invalid(format!(
            "mocard.default_theme_id '{}' is not a known theme",
            config.mocard.default_theme_id
        )));
    }
    Ok(())
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents)?;
    info!("Loaded configuration from {:?}", path);
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> AppConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config from {:?}: {}", path, e);
            info!("Using default configuration");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = parse_config(
            "mocard:\n  default_theme_id: cyber-taoist\nspendsense:\n  currency_symbol: \"€\"\n",
        )
        .unwrap();
        assert_eq!(config.mocard.default_theme_id, "cyber-taoist");
        assert_eq!(config.mocard.pixel_ratio, 2.0);
        assert_eq!(config.spendsense.currency_symbol, "€");
        assert_eq!(config.spendsense.storage_key, "spendsense-transactions");
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let unknown_theme = parse_config("mocard:\n  default_theme_id: neon\n");
        assert!(matches!(unknown_theme, Err(ConfigError::Invalid(_))));

        let bad_ratio = parse_config("mocard:\n  pixel_ratio: 0\n");
        assert!(matches!(bad_ratio, Err(ConfigError::Invalid(_))));

        let malformed = parse_config("mocard: [unclosed");
        assert!(matches!(malformed, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "spendsense:\n  max_description_length: 50\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.spendsense.max_description_length, 50);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yaml");

        assert!(matches!(load_config(&path), Err(ConfigError::Read { .. })));
        assert_eq!(load_config_or_default(&path), AppConfig::default());
    }
}
