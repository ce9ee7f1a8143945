//! Type name to log path resolution.

use crate::errors::ConfigError;
use crate::user::{Target, UserConfig};
use std::path::PathBuf;
use tracing::debug;

/// Outcome of resolving a type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Literal log path at the end of the alias chain.
    pub path: PathBuf,
    /// Number of alias hops taken to reach it.
    pub hops: usize,
}

/// Resolves `type_name` to its log path, following aliases.
///
/// An acyclic chain visits each key at most once, so more hops than there
/// are keys proves a cycle.
///
/// # Errors
///
/// [`ConfigError::TypeNotFound`] if `type_name` is not a key, or
/// [`ConfigError::Cycle`] if the alias chain never reaches a literal path.
pub fn resolve_type(type_name: &str, config: &UserConfig) -> Result<Resolution, ConfigError> {
    let bound = config.len();
    let mut current = type_name;
    let mut hops = 0;

    loop {
        match config.target(current) {
            None => return Err(ConfigError::TypeNotFound(current.to_string())),
            Some(Target::Literal(path)) => {
                debug!(type_name, hops, path = %path.display(), "resolved type");
                return Ok(Resolution {
                    path: path.to_path_buf(),
                    hops,
                });
            }
            Some(Target::Alias(next)) => {
                hops += 1;
                if hops > bound {
                    return Err(ConfigError::Cycle {
                        type_name: type_name.to_string(),
                        bound,
                    });
                }
                current = next;
            }
        }
    }
}

/// Resolves `type_name` to its log path. See [`resolve_type`].
pub fn resolve_type_path(type_name: &str, config: &UserConfig) -> Result<PathBuf, ConfigError> {
    resolve_type(type_name, config).map(|resolution| resolution.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn alias_resolves_to_literal() {
        let config: UserConfig = [("default", "work.log"), ("todo", "default")]
            .into_iter()
            .collect();
        assert_eq!(
            resolve_type_path("todo", &config).unwrap(),
            Path::new("work.log")
        );
    }

    #[test]
    fn hops_match_chain_length() {
        let config: UserConfig = [
            ("default", "d.log"),
            ("a", "b"),
            ("b", "c"),
            ("c", "default"),
        ]
        .into_iter()
        .collect();

        assert_eq!(resolve_type("default", &config).unwrap().hops, 0);
        assert_eq!(resolve_type("c", &config).unwrap().hops, 1);
        let resolution = resolve_type("a", &config).unwrap();
        assert_eq!(resolution.hops, 3);
        assert_eq!(resolution.path, Path::new("d.log"));
    }

    #[test]
    fn longest_acyclic_chain_is_within_bound() {
        let config: UserConfig = [("k0", "k1"), ("k1", "k2"), ("k2", "k3"), ("k3", "end.log")]
            .into_iter()
            .collect();
        assert_eq!(resolve_type("k0", &config).unwrap().hops, 3);
    }

    #[test]
    fn cycle_is_detected() {
        let config: UserConfig = [("default", "d.log"), ("a", "b"), ("b", "a")]
            .into_iter()
            .collect();
        match resolve_type_path("a", &config).unwrap_err() {
            ConfigError::Cycle { type_name, bound } => {
                assert_eq!(type_name, "a");
                assert_eq!(bound, 3);
            }
            other => panic!("Expected Cycle, got {:?}", other),
        }
        assert!(resolve_type_path("default", &config).is_ok());
    }

    #[test]
    fn self_alias_is_a_cycle() {
        let config: UserConfig = [("default", "default")].into_iter().collect();
        assert!(matches!(
            resolve_type_path("default", &config),
            Err(ConfigError::Cycle { .. })
        ));
    }

    #[test]
    fn unknown_type_is_not_found() {
        let config: UserConfig = [("default", "d.log")].into_iter().collect();
        match resolve_type_path("bugs", &config).unwrap_err() {
            ConfigError::TypeNotFound(name) => assert_eq!(name, "bugs"),
            other => panic!("Expected TypeNotFound, got {:?}", other),
        }
    }
}
