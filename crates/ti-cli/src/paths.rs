//! Location of the process config.

use std::path::{Path, PathBuf};
use ti_config::PROCESS_CONFIG_FILE;

/// Picks the process config path: explicit flag or `TI_CONFIG`, then the
/// home directory, then the working directory.
pub fn process_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| default_process_config_path(dirs::home_dir().as_deref()))
}

fn default_process_config_path(home: Option<&Path>) -> PathBuf {
    match home {
        Some(home) => home.join(PROCESS_CONFIG_FILE),
        None => PathBuf::from(PROCESS_CONFIG_FILE),
    }
}
