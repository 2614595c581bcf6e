//! Configuration management.
//!
//! Handles:
//! - Default output format
//! - Default field options (masked model, digit validation)
//! - Environment overrides

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use docmask::FieldOptions;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the config file path.
const CONFIG_PATH_ENV: &str = "DOCMASK_CONFIG";

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    ProjectDirs::from("com", "docmask", "docmask")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format (`table` or `json`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Default field options.
    pub field: FieldOptions,
}

impl Config {
    /// Load config from disk (or defaults), then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load config from a specific path, or return default if it is missing.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Apply `DOCMASK_*` overrides using the given lookup.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(format) = lookup("DOCMASK_FORMAT") {
            self.format = Some(format);
        }
        if let Some(value) = lookup("DOCMASK_MODEL_MASK") {
            self.field.model_mask = parse_flag("DOCMASK_MODEL_MASK", &value)?;
        }
        if let Some(value) = lookup("DOCMASK_VALIDATE_DIGIT") {
            self.field.validate_digit = parse_flag("DOCMASK_VALIDATE_DIGIT", &value)?;
        }
        Ok(())
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, CliError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(CliError::InvalidConfig {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.format.is_none());
        assert!(!config.field.model_mask);
        assert!(!config.field.validate_digit);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"format":"json","field":{"validate_digit":true}}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.format.as_deref(), Some("json"));
        assert!(config.field.validate_digit);
        assert!(!config.field.model_mask);
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("DOCMASK_FORMAT", "json"),
            ("DOCMASK_MODEL_MASK", "true"),
            ("DOCMASK_VALIDATE_DIGIT", "0"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.field.validate_digit = true;
        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.format.as_deref(), Some("json"));
        assert!(config.field.model_mask);
        assert!(!config.field.validate_digit);
    }

    #[test]
    fn test_env_invalid_flag() {
        let mut config = Config::default();
        let err = config
            .apply_env(|key| (key == "DOCMASK_MODEL_MASK").then(|| "maybe".to_string()))
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig { .. }));
    }
}
