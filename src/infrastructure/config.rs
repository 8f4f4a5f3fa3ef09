//! Configuration management

use crate::error::{MemoriesError, Result};
use chrono::format::{Item, StrftimeItems};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable pointing at the directory holding `.little-memories/`
pub const DIR_ENV: &str = "LITTLE_MEMORIES_DIR";

const CONFIG_DIR: &str = ".little-memories";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// chrono format string used when printing dates
    pub date_format: String,
    /// Log filter used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            date_format: "%d-%m-%Y".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Directory whose `.little-memories/config.toml` is used:
    /// `LITTLE_MEMORIES_DIR` if set, otherwise the current directory
    pub fn locate() -> Result<PathBuf> {
        match std::env::var_os(DIR_ENV) {
            Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
            _ => Ok(std::env::current_dir()?),
        }
    }

    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load config from `.little-memories/config.toml`, defaults if absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = Self::path_in(dir);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(MemoriesError::Io(e)),
        };

        let config: Config = toml::from_str(&contents)
            .map_err(|e| MemoriesError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to `.little-memories/config.toml`, creating the directory
    pub fn save_to_dir(&self, dir: &Path) -> Result<()> {
        let config_dir = dir.join(CONFIG_DIR);
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_date_format(&self.date_format)?;
        parse_log_level(&self.log_level)?;
        Ok(())
    }

    pub fn level_filter(&self) -> LevelFilter {
        parse_log_level(&self.log_level).unwrap_or(LevelFilter::Warn)
    }
}

/// Reject chrono format strings that would fail at render time
pub fn validate_date_format(format: &str) -> Result<()> {
    if format.trim().is_empty() {
        return Err(MemoriesError::Config(
            "Date format cannot be empty".to_string(),
        ));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(MemoriesError::Config(format!(
            "Invalid date format: '{}'",
            format
        )));
    }
    Ok(())
}

pub fn parse_log_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| MemoriesError::Config(format!("Invalid log level: '{}'", level)))
}
