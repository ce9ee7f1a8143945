use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during log operations.
#[derive(Error, Debug)]
pub enum LogError {
    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Log file could not be created at the resolved path.
    #[error("log file path '{}' was invalid", .path.display())]
    InvalidPath {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Caller supplied a malformed index range.
    #[error("{count} values given for range, expected 1 or 2")]
    InvalidRange {
        /// Number of endpoints supplied.
        count: usize,
    },
    /// Entry cannot be stored as a single log line.
    #[error("invalid {field}: {reason}")]
    InvalidEntry {
        /// Field that failed validation (`type` or `message`).
        field: &'static str,
        /// Reason for invalidity.
        reason: &'static str,
    },
}

/// A single log line that could not be parsed.
///
/// Format warnings never abort an operation; the offending line is skipped
/// (and preserved verbatim by mutations).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("log line {line} was improperly formatted: expected 3 fields, found {fields}")]
pub struct FormatWarning {
    /// 1-based line number in the file.
    pub line: usize,
    /// Number of `|||`-delimited fields found.
    pub fields: usize,
}
