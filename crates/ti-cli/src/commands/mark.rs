//! Mark and unmark command implementation.

use crate::output;
use ti_config::ConfigResolver;
use ti_log::IndexRange;

pub fn run(
    resolver: &ConfigResolver,
    type_name: String,
    range: Vec<usize>,
    marked: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let range = IndexRange::from_endpoints(&range)?;
    let store = super::open_store(resolver, &type_name)?;

    let mutation = store.set_marked(&type_name, range, marked)?;

    let verb = if marked { "Marked" } else { "Unmarked" };
    println!("{}", output::format_affected(verb, mutation.affected));
    Ok(())
}
