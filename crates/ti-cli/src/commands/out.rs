//! Out command implementation.

use crate::output;
use ti_config::ConfigResolver;
use ti_log::LogStore;

pub fn run(
    resolver: &ConfigResolver,
    types: Vec<String>,
    simple: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolver.resolve_user_config()?;
    let decorated = !simple && !json;

    for type_name in &types {
        let path = resolver.resolve_type_path(type_name, &config)?;
        let store = LogStore::new(path);

        if decorated {
            println!("{}", output::format_type_header(type_name));
        }

        if !store.exists() {
            if !json {
                println!("No messages made yet for {}", type_name);
            }
            continue;
        }

        let listing = store.list(type_name)?;
        for entry in &listing.entries {
            if json {
                println!("{}", output::format_json(type_name, entry)?);
            } else if simple {
                println!("{}", entry.message);
            } else {
                println!("{}", output::format_entry_row(entry));
            }
        }
    }

    Ok(())
}
