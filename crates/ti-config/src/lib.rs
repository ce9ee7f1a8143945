//! Configuration and type resolution for `ti`.
//!
//! Two files are involved:
//! - the process config (`{"user_config": "/abs/path.json"}`), whose location
//!   is supplied by the caller, and
//! - the user config, a flat JSON object mapping type names either to a log
//!   file path or to another type name (an alias). It must define `default`.
//!
//! [`ConfigResolver`] loads and updates the process config and validates the
//! user config; [`resolve_type_path`] follows alias chains to a log path and
//! rejects cycles.

#![deny(missing_docs)]

/// Error types for configuration operations.
pub mod errors;
/// Process config model and JSON helpers.
pub mod process;
/// Alias-following type resolution.
pub mod resolve;
/// Process config / user config loader.
pub mod resolver;
/// User config model and validation.
pub mod user;
/// User config validation errors.
pub mod validation;

pub use errors::ConfigError;
pub use process::{ProcessConfig, PROCESS_CONFIG_FILE};
pub use resolve::{resolve_type, resolve_type_path, Resolution};
pub use resolver::ConfigResolver;
pub use user::{validate_user_config, Target, UserConfig};
pub use validation::{ValidationError, DEFAULT_KEY};
