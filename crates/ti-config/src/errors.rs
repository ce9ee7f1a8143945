use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur while loading or resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Process config could not be read, parsed or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// User config violates its invariants.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No user config has been set yet.
    #[error("no user config specified; run `ti config <file>` first")]
    NotConfigured,
    /// Type name is not a key of the user config.
    #[error("type '{0}' not found in user configuration")]
    TypeNotFound(String),
    /// Alias chain never reaches a literal path.
    #[error("alias chain for type '{type_name}' is circular (more than {bound} hops)")]
    Cycle {
        /// Type whose resolution was attempted.
        type_name: String,
        /// Hop limit that was exceeded (the number of keys).
        bound: usize,
    },
}
