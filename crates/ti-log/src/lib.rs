//! Flat-file log format for `ti`.
//!
//! This crate provides:
//! - The `type|||marked|||message` line format with an optional `# TI LOG` header
//! - Reader/writer APIs that tolerate malformed lines and report them as warnings
//! - Per-type, 1-based indexing recomputed on every operation
//! - [`LogStore`] for append, list, mark/unmark and range delete
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ti_log::{IndexRange, LogStore};
//!
//! let store = LogStore::new("todo.log");
//! store.append("todo", "buy milk")?;
//! store.append("todo", "call mom")?;
//!
//! store.set_marked("todo", IndexRange::single(1), true)?;
//! store.delete_range("todo", IndexRange::from_endpoints(&[1])?)?;
//!
//! for entry in store.list("todo")?.entries {
//!     println!("[{}][{}] {}", entry.index, if entry.marked { 'X' } else { ' ' }, entry.message);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Format limitations
//!
//! The `|||` separator is not escaped. A message containing it is written
//! as-is and is reported as a [`FormatWarning`] when read back.

#![deny(missing_docs)]

/// Entry line structure and parsing.
pub mod entry;
/// Error and warning types for log operations.
pub mod errors;
/// Entry filters and index ranges.
pub mod filter;
/// Log reader implementation.
pub mod reader;
/// Type-indexed log operations.
pub mod store;
/// Log writer implementation.
pub mod writer;

pub use entry::{LogEntry, LogLine, DELIMITER, HEADER_LINE};
pub use errors::{FormatWarning, LogError};
pub use filter::{EntryFilter, IndexRange, Indexer, TypeFilter};
pub use reader::{LogReader, RawLine};
pub use store::{IndexedEntry, Listing, LogStore, Mutation};
pub use writer::{create_log_file, LogWriter};
