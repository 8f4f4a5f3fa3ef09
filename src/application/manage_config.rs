//! Config management use case

use crate::error::{MemoriesError, Result};
use crate::infrastructure::config::{parse_log_level, validate_date_format};
use crate::infrastructure::Config;
use std::path::PathBuf;

const VALID_KEYS: &str = "date_format, log_level";

/// Service for reading and writing `.little-memories/config.toml`
pub struct ConfigService {
    dir: PathBuf,
}

impl ConfigService {
    pub fn new(dir: PathBuf) -> Self {
        ConfigService { dir }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.dir)?;

        match key {
            "date_format" => Ok(config.date_format),
            "log_level" => Ok(config.log_level),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value after validating it
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.dir)?;

        match key {
            "date_format" => {
                validate_date_format(value)?;
                config.date_format = value.to_string();
            }
            "log_level" => {
                let level = parse_log_level(value)?;
                config.log_level = level.to_string().to_lowercase();
            }
            _ => return Err(unknown_key(key)),
        }

        config.save_to_dir(&self.dir)
    }

    /// All config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.dir)
    }
}

fn unknown_key(key: &str) -> MemoriesError {
    MemoriesError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());
        assert_eq!(service.get("date_format").unwrap(), "%d-%m-%Y");
        assert_eq!(service.get("log_level").unwrap(), "warn");
    }

    #[test]
    fn test_set_then_get() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        service.set("date_format", "%Y-%m-%d").unwrap();
        service.set("log_level", "INFO").unwrap();

        assert_eq!(service.get("date_format").unwrap(), "%Y-%m-%d");
        assert_eq!(service.get("log_level").unwrap(), "info");
        assert_eq!(service.list().unwrap().date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        assert!(service.set("log_level", "loud").is_err());
        assert!(service.set("date_format", "%Q").is_err());
        assert!(!Config::path_in(temp.path()).exists());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        match service.get("theme").unwrap_err() {
            MemoriesError::Config(msg) => {
                assert!(msg.contains("'theme'"));
                assert!(msg.contains(VALID_KEYS));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert!(service.set("theme", "dark").is_err());
    }
}
