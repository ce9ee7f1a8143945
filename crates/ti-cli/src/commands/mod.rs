//! Subcommand implementations.

pub mod config;
pub mod del;
pub mod log;
pub mod mark;
pub mod out;

use ti_config::ConfigResolver;
use ti_log::LogStore;

/// Loads the user config and binds a store to the log `type_name` resolves to.
fn open_store(
    resolver: &ConfigResolver,
    type_name: &str,
) -> Result<LogStore, Box<dyn std::error::Error>> {
    let config = resolver.resolve_user_config()?;
    let path = resolver.resolve_type_path(type_name, &config)?;
    Ok(LogStore::new(path))
}
