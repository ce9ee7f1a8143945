use std::path::PathBuf;
use thiserror::Error;

/// Reserved key every user config must define.
pub const DEFAULT_KEY: &str = "default";

/// Validation errors for user configuration files.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Config file does not exist.
    #[error("configuration file '{}' does not exist", .path.display())]
    MissingFile {
        /// Path that was checked.
        path: PathBuf,
    },
    /// Config file exists but could not be read.
    #[error("configuration file '{}' could not be read", .path.display())]
    Unreadable {
        /// Offending file.
        path: PathBuf,
        /// Read failure.
        #[source]
        source: std::io::Error,
    },
    /// Config file is not valid JSON.
    #[error("configuration file '{}' was improperly formatted", .path.display())]
    Malformed {
        /// Offending file.
        path: PathBuf,
        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// Top-level JSON value is not an object.
    #[error("configuration must be a JSON object")]
    NotAnObject,
    /// Mapping has no keys.
    #[error("configuration file is empty")]
    Empty,
    /// Mapping lacks the `default` key.
    #[error("configuration file does not set 'default'")]
    MissingDefault,
    /// A value is not a string.
    #[error("value for user configuration key '{key}' must be a string, got {value}")]
    NonStringValue {
        /// Key holding the value.
        key: String,
        /// JSON rendering of the value.
        value: String,
    },
    /// A literal path could not be created as a log file.
    #[error("value for user configuration key '{key}' was not a valid type name or file path")]
    InvalidLogPath {
        /// Key holding the path.
        key: String,
        /// Failure creating the file.
        #[source]
        source: ti_log::LogError,
    },
}
