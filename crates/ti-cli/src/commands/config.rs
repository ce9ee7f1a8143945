//! Config command implementation.

use ti_config::ConfigResolver;
use std::path::PathBuf;
use tracing::debug;

pub fn run(resolver: &ConfigResolver, file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let stored = resolver.set_user_config_path(&file)?;

    debug!(path = %stored.display(), "user config recorded");
    println!("Saved user configuration file. You are ready to use TI!");
    Ok(())
}
