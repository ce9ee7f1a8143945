//! User configuration: type names mapped to log paths or to other type names.

use crate::validation::{ValidationError, DEFAULT_KEY};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// What a user config value points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// A log file path.
    Literal(&'a Path),
    /// Another key of the same config.
    Alias(&'a str),
}

/// Mapping from type name to target, as stored in the user config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserConfig {
    entries: BTreeMap<String, String>,
}

impl UserConfig {
    /// Builds a config from a parsed JSON document.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NotAnObject`] if `value` is not an object, or
    /// [`ValidationError::NonStringValue`] for the first non-string value.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(map) = value else {
            return Err(ValidationError::NotAnObject);
        };

        let mut entries = BTreeMap::new();
        for (key, value) in map {
            match value {
                Value::String(target) => {
                    entries.insert(key, target);
                }
                other => {
                    return Err(ValidationError::NonStringValue {
                        key,
                        value: other.to_string(),
                    })
                }
            }
        }
        Ok(Self { entries })
    }

    /// Reads and parses the config file at `path` without validating it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ValidationError> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ValidationError::MissingFile {
                    path: path.to_path_buf(),
                })
            }
            Err(source) => {
                return Err(ValidationError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let value: Value =
            serde_json::from_str(&text).map_err(|source| ValidationError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_value(value)
    }

    /// Number of type names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no type names are defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` is a defined type name.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Classifies the value of `key`. A value is an alias exactly when it
    /// is itself a key, including the key it is stored under.
    pub fn target(&self, key: &str) -> Option<Target<'_>> {
        let value = self.entries.get(key)?;
        if self.entries.contains_key(value) {
            Some(Target::Alias(value))
        } else {
            Some(Target::Literal(Path::new(value)))
        }
    }

    /// Iterates over `(type_name, target)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Target<'_>)> {
        self.entries
            .keys()
            .filter_map(move |key| self.target(key).map(|target| (key.as_str(), target)))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UserConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Checks the user config invariants and creates missing log files.
///
/// Every literal target without a file gets an empty log. Alias cycles are
/// not detected here; resolution reports them.
///
/// # Errors
///
/// [`ValidationError::Empty`], [`ValidationError::MissingDefault`], or
/// [`ValidationError::InvalidLogPath`] naming the key whose file could not
/// be created.
pub fn validate_user_config(config: &UserConfig) -> Result<(), ValidationError> {
    if config.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !config.contains(DEFAULT_KEY) {
        return Err(ValidationError::MissingDefault);
    }

    for (key, target) in config.iter() {
        let Target::Literal(path) = target else {
            continue;
        };
        let created = ti_log::create_log_file(path).map_err(|source| {
            ValidationError::InvalidLogPath {
                key: key.to_string(),
                source,
            }
        })?;
        if created {
            info!(type_name = key, path = %path.display(), "created log file");
        }
    }
    Ok(())
}
