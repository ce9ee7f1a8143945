//! Process-level configuration: where the user config lives.

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::Path;

/// File name of the process config when no other location is chosen.
pub const PROCESS_CONFIG_FILE: &str = ".ticonfig.json";

/// Persisted process config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Absolute path of the user config, if one has been set.
    #[serde(default)]
    pub user_config: Option<String>,
}

/// Reads a JSON document from `path`.
///
/// Parse failures surface as [`io::ErrorKind::InvalidData`].
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> io::Result<T> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Writes `value` to `path` as pretty-printed JSON.
pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> io::Result<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    fs::write(path, text)
}
