//! Log command implementation.

use ti_config::ConfigResolver;

pub fn run(
    resolver: &ConfigResolver,
    type_name: String,
    message: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open_store(resolver, &type_name)?;
    store.append(&type_name, &message)?;
    Ok(())
}
