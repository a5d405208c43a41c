//! Configuration handling for the form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "company_form=warn";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Tracing filter directive, e.g. "company_form=debug"
    pub log_filter: Option<String>,
    /// Print each submitted record as a JSON line after the terminal is restored
    pub print_submissions_on_exit: Option<bool>,
    /// Copy each submitted record to the clipboard
    pub copy_on_submit: Option<bool>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "company-form").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn print_submissions_on_exit(&self) -> bool {
        self.print_submissions_on_exit.unwrap_or(true)
    }

    pub fn copy_on_submit(&self) -> bool {
        self.copy_on_submit.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_config_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("company-form-{}", Uuid::new_v4()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.log_filter.is_none());
        assert!(config.print_submissions_on_exit.is_none());
        assert!(config.copy_on_submit.is_none());
    }

    #[test]
    fn test_defaults_for_unset_options() {
        let config = FormConfig::default();
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert!(config.print_submissions_on_exit());
        assert!(!config.copy_on_submit());
    }

    #[test]
    fn test_serialization() {
        let config = FormConfig {
            log_filter: Some("company_form=debug".to_string()),
            print_submissions_on_exit: Some(false),
            copy_on_submit: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.log_filter(), "company_form=debug");
        assert!(!parsed.print_submissions_on_exit());
        assert!(parsed.copy_on_submit());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.log_filter.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"copy_on_submit": true, "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.copy_on_submit, Some(true));
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let config = FormConfig::load_from(&temp_config_path()).unwrap();
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_load_from_written_file() {
        let path = temp_config_path();
        let config = FormConfig {
            print_submissions_on_exit: Some(false),
            ..Default::default()
        };
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = FormConfig::load_from(&path).unwrap();
        assert_eq!(loaded.print_submissions_on_exit, Some(false));
        assert!(loaded.copy_on_submit.is_none());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_from_invalid_json_fails() {
        let path = temp_config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        assert!(FormConfig::load_from(&path).is_err());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
