//! Two-level configuration: process config pointing at a user config.

use crate::errors::ConfigError;
use crate::process::{read_json, write_json, ProcessConfig};
use crate::resolve::resolve_type_path;
use crate::user::{validate_user_config, UserConfig};
use std::path::{Path, PathBuf};
use tracing::info;

/// Loads configuration from a process config file at a fixed location.
///
/// # Example
///
/// ```rust,no_run
/// use ti_config::ConfigResolver;
///
/// let resolver = ConfigResolver::new(".ticonfig.json");
/// resolver.set_user_config_path("types.json")?;
///
/// let config = resolver.resolve_user_config()?;
/// let log_path = resolver.resolve_type_path("todo", &config)?;
/// println!("todo -> {}", log_path.display());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    process_config_path: PathBuf,
}

impl ConfigResolver {
    /// Creates a resolver reading the process config at `process_config_path`.
    pub fn new(process_config_path: impl Into<PathBuf>) -> Self {
        Self {
            process_config_path: process_config_path.into(),
        }
    }

    /// Location of the process config.
    pub fn process_config_path(&self) -> &Path {
        &self.process_config_path
    }

    /// Loads the process config, creating an empty one if none exists.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, written, or parsed.
    pub fn load_process_config(&self) -> Result<ProcessConfig, ConfigError> {
        if !self.process_config_path.exists() {
            info!(
                path = %self.process_config_path.display(),
                "setting up ti configuration"
            );
            let config = ProcessConfig::default();
            self.save_process_config(&config)?;
            return Ok(config);
        }
        Ok(read_json(&self.process_config_path)?)
    }

    /// Persists `config` as the process config.
    pub fn save_process_config(&self, config: &ProcessConfig) -> Result<(), ConfigError> {
        write_json(&self.process_config_path, config)?;
        Ok(())
    }

    /// Validates the user config at `path` and records its absolute path.
    ///
    /// Returns the absolute path that was stored.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Validation`] if the file is missing, malformed, or
    /// breaks an invariant; [`ConfigError::Io`] if the process config cannot
    /// be updated.
    pub fn set_user_config_path<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf, ConfigError> {
        let path = path.as_ref();
        let config = UserConfig::load(path)?;
        validate_user_config(&config)?;

        let absolute = std::path::absolute(path)?;
        let mut process = self.load_process_config()?;
        process.user_config = Some(absolute.to_string_lossy().into_owned());
        self.save_process_config(&process)?;

        info!(path = %absolute.display(), "saved user configuration");
        Ok(absolute)
    }

    /// Loads and validates the user config the process config points at.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotConfigured`] if no user config has been set, or
    /// [`ConfigError::Validation`] if it no longer loads or validates.
    pub fn resolve_user_config(&self) -> Result<UserConfig, ConfigError> {
        let process = self.load_process_config()?;
        let path = process.user_config.ok_or(ConfigError::NotConfigured)?;

        let config = UserConfig::load(&path)?;
        validate_user_config(&config)?;
        Ok(config)
    }

    /// Resolves `type_name` against `config`. See [`resolve_type_path`].
    pub fn resolve_type_path(
        &self,
        type_name: &str,
        config: &UserConfig,
    ) -> Result<PathBuf, ConfigError> {
        resolve_type_path(type_name, config)
    }
}
