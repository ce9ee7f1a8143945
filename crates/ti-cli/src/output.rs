//! Output formatting utilities.

use serde::Serialize;
use std::error::Error;
use ti_log::IndexedEntry;

/// Formats an entry as `[n][X] message`.
pub fn format_entry_row(entry: &IndexedEntry) -> String {
    let mark = if entry.marked { 'X' } else { ' ' };
    format!("[{}][{}] {}", entry.index, mark, entry.message)
}

/// Banner printed before each listed type.
pub fn format_type_header(type_name: &str) -> String {
    format!("### Messages for {} ###", type_name)
}

#[derive(Serialize)]
struct JsonRow<'a> {
    #[serde(rename = "type")]
    type_name: &'a str,
    #[serde(flatten)]
    entry: &'a IndexedEntry,
}

/// Formats an entry as a single-line JSON object.
pub fn format_json(type_name: &str, entry: &IndexedEntry) -> Result<String, serde_json::Error> {
    serde_json::to_string(&JsonRow { type_name, entry })
}

/// Summary line for mark, unmark and delete.
pub fn format_affected(verb: &str, count: usize) -> String {
    let noun = if count == 1 { "entry" } else { "entries" };
    format!("{} {} {}", verb, count, noun)
}

/// Prints an error and, when verbose, every underlying cause.
pub fn print_error(error: &dyn Error, verbose: bool) {
    eprintln!("Error: {}", error);

    let mut source = error.source();
    if source.is_some() && !verbose {
        eprintln!("(see more with verbose [-v])");
        return;
    }
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: usize, marked: bool, message: &str) -> IndexedEntry {
        IndexedEntry {
            index,
            marked,
            message: message.to_string(),
        }
    }

    #[test]
    fn entry_row_shows_mark() {
        assert_eq!(format_entry_row(&entry(1, false, "buy milk")), "[1][ ] buy milk");
        assert_eq!(format_entry_row(&entry(12, true, "call mom")), "[12][X] call mom");
    }

    #[test]
    fn json_row_is_parseable() {
        let line = format_json("todo", &entry(2, true, "x")).unwrap();
        assert_eq!(line, r#"{"type":"todo","index":2,"marked":true,"message":"x"}"#);
    }

    #[test]
    fn affected_pluralizes() {
        assert_eq!(format_affected("Marked", 1), "Marked 1 entry");
        assert_eq!(format_affected("Deleted", 0), "Deleted 0 entries");
    }
}
