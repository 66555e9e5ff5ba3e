// Rust guideline compliant 2026-02-06

//! Configuration management for Tandem.

use crate::fsm::SelfTransitionPolicy;
use crate::models::DEFAULT_MAX_TITLE_LEN;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up by [`Config::load`].
pub const CONFIG_FILE_NAME: &str = "tandem.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Tandem behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How an update that keeps the current status is treated.
    #[serde(default)]
    pub self_transition: SelfTransitionPolicy,

    /// Maximum task title length in characters.
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,

    /// Page size used when a listing does not specify one.
    #[serde(default = "default_page_limit")]
    pub default_page_limit: usize,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_max_title_len() -> usize {
    DEFAULT_MAX_TITLE_LEN
}

fn default_page_limit() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            self_transition: SelfTransitionPolicy::default(),
            max_title_len: default_max_title_len(),
            default_page_limit: default_page_limit(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a directory and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/tandem.toml`, if present
    /// 3. Environment variables with `TANDEM_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let config = if config_path.exists() {
            Self::read_file(&config_path)?
        } else {
            Self::default()
        };
        config.finish()
    }

    /// Loads configuration from an explicit file path and environment variables.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or validation fails.
    pub fn load_file(path: &Path) -> Result<Self> {
        Self::read_file(path)?.finish()
    }

    /// Loads defaults plus environment overrides, without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is invalid.
    pub fn from_env() -> Result<Self> {
        Self::default().finish()
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    fn finish(mut self) -> Result<Self> {
        self.apply_env_overrides()?;
        self.validate()?;
        Ok(self)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TANDEM_SELF_TRANSITION` - Self-transition policy (reject/no_op)
    /// - `TANDEM_MAX_TITLE_LEN` - Maximum title length
    /// - `TANDEM_DEFAULT_PAGE_LIMIT` - Default listing page size
    /// - `TANDEM_OUTPUT_FORMAT` - Output format (json/table/plain)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TANDEM_SELF_TRANSITION") {
            self.self_transition = match val.to_lowercase().as_str() {
                "reject" => SelfTransitionPolicy::Reject,
                "no_op" | "no-op" | "noop" => SelfTransitionPolicy::NoOp,
                _ => {
                    return Err(Error::Config(
                        "TANDEM_SELF_TRANSITION must be reject or no_op".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("TANDEM_MAX_TITLE_LEN") {
            self.max_title_len = val.parse().map_err(|_| {
                Error::Config("TANDEM_MAX_TITLE_LEN must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("TANDEM_DEFAULT_PAGE_LIMIT") {
            self.default_page_limit = val.parse().map_err(|_| {
                Error::Config("TANDEM_DEFAULT_PAGE_LIMIT must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("TANDEM_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "TANDEM_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_title_len` or `default_page_limit` is zero.
    fn validate(&self) -> Result<()> {
        if self.max_title_len == 0 {
            return Err(Error::Config(
                "max_title_len must be greater than 0".to_string(),
            ));
        }

        if self.default_page_limit == 0 {
            return Err(Error::Config(
                "default_page_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `<dir>/tandem.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Environment variables are process-wide; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("TANDEM_SELF_TRANSITION");
        std::env::remove_var("TANDEM_MAX_TITLE_LEN");
        std::env::remove_var("TANDEM_DEFAULT_PAGE_LIMIT");
        std::env::remove_var("TANDEM_OUTPUT_FORMAT");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.self_transition, SelfTransitionPolicy::NoOp);
        assert_eq!(config.max_title_len, 255);
        assert_eq!(config.default_page_limit, 100);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_file_requires_existing_path() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_file(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
self_transition = "reject"
max_title_len = 80
default_page_limit = 10
output_format = "json"
"#;
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.self_transition, SelfTransitionPolicy::Reject);
        assert_eq!(config.max_title_len, 80);
        assert_eq!(config.default_page_limit, 10);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_config_invalid_toml() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "self_transition = 3").unwrap();

        let result = Config::load(temp_dir.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_config_validation_zero_page_limit() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "default_page_limit = 0",
        )
        .unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_env_override_policy() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("TANDEM_SELF_TRANSITION", "reject");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.self_transition, SelfTransitionPolicy::Reject);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_title_len() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();

        std::env::set_var("TANDEM_MAX_TITLE_LEN", "lots");
        assert!(Config::from_env().is_err());

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_format() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();

        std::env::set_var("TANDEM_OUTPUT_FORMAT", "yaml");
        assert!(Config::from_env().is_err());

        clear_all_env_vars();
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "default_page_limit = 5",
        )
        .unwrap();

        std::env::set_var("TANDEM_DEFAULT_PAGE_LIMIT", "25");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.default_page_limit, 25);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            self_transition: SelfTransitionPolicy::Reject,
            max_title_len: 120,
            default_page_limit: 50,
            output_format: OutputFormat::Plain,
        };

        original.save(temp_dir.path()).unwrap();
        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(original, loaded);
    }
}
