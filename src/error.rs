//! Error types for little-memories

use thiserror::Error;

/// Main error type for the journaling core and CLI
#[derive(Debug, Error)]
pub enum MemoriesError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Unknown profile key: {0}")]
    UnknownProfileKey(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MemoriesError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MemoriesError::Validation(_) => 2,
            MemoriesError::ProfileNotFound(_) | MemoriesError::UnknownProfileKey(_) => 3,
            MemoriesError::InvalidDate(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MemoriesError::Validation(msg) => {
                format!(
                    "{}\n\n\
                    Required fields per entry type:\n\
                    • Favorite: category, answer\n\
                    • Measurement: measurement, value, unit\n\
                    • Memory: title, description\n\
                    • Journal: title, content\n\
                    • Milestone: title, description",
                    msg
                )
            }
            MemoriesError::UnknownProfileKey(key) => {
                format!(
                    "Unknown profile key: '{}'\n\n\
                    Suggestions:\n\
                    • Declare the profile in a [[profile]] table with key = \"{}\"\n\
                    • Check the spelling of the profile key in [[entry]] and [[step]] tables",
                    key, key
                )
            }
            MemoriesError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD or DD-MM-YYYY",
                    input
                )
            }
            MemoriesError::Config(msg) => {
                if msg.contains("log level") {
                    format!(
                        "{}\n\n\
                        Valid levels: off, error, warn, info, debug, trace\n\
                        Example: little-memories config log_level info",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MemoriesError
pub type Result<T> = std::result::Result<T, MemoriesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(MemoriesError::Validation("x".into()).exit_code(), 2);
        assert_eq!(MemoriesError::ProfileNotFound("x".into()).exit_code(), 3);
        assert_eq!(MemoriesError::UnknownProfileKey("x".into()).exit_code(), 3);
        assert_eq!(MemoriesError::InvalidDate("x".into()).exit_code(), 4);
        assert_eq!(MemoriesError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_validation_lists_required_fields() {
        let err = MemoriesError::Validation("Entry is incomplete".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.starts_with("Entry is incomplete"));
        assert!(msg.contains("Measurement: measurement, value, unit"));
    }

    #[test]
    fn test_unknown_profile_key_suggestions() {
        let err = MemoriesError::UnknownProfileKey("kai".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("[[profile]]"));
        assert!(msg.contains("key = \"kai\""));
    }

    #[test]
    fn test_invalid_date_examples() {
        let err = MemoriesError::InvalidDate("someday".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'someday'"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("last monday"));
    }

    #[test]
    fn test_config_log_level_suggestions() {
        let err = MemoriesError::Config("Invalid log level: loud".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("off, error, warn, info, debug, trace"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = MemoriesError::ProfileNotFound("abc".to_string());
        assert_eq!(err.display_with_suggestions(), "Profile not found: abc");
    }
}
