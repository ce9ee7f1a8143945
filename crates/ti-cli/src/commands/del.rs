//! Delete command implementation.

use crate::output;
use ti_config::ConfigResolver;
use ti_log::IndexRange;

pub fn run(
    resolver: &ConfigResolver,
    type_name: String,
    range: Vec<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let range = IndexRange::from_endpoints(&range)?;
    let store = super::open_store(resolver, &type_name)?;

    let mutation = store.delete_range(&type_name, range)?;

    println!("{}", output::format_affected("Deleted", mutation.affected));
    Ok(())
}
