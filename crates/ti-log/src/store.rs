//! Type-indexed operations over a single log file.

use crate::entry::{LogEntry, LogLine};
use crate::errors::{FormatWarning, LogError};
use crate::filter::{IndexRange, Indexer, TypeFilter};
use crate::reader::LogReader;
use crate::writer::{self, LogWriter};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An entry as seen through a per-type listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedEntry {
    /// 1-based position among entries of the listed type.
    pub index: usize,
    /// Whether the entry is marked done.
    pub marked: bool,
    /// Message text.
    pub message: String,
}

/// Result of listing one type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Matching entries in file order.
    pub entries: Vec<IndexedEntry>,
    /// Lines that could not be parsed.
    pub warnings: Vec<FormatWarning>,
}

/// Result of a mark, unmark or delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mutation {
    /// Number of entries changed or removed.
    pub affected: usize,
    /// Lines that could not be parsed (left untouched).
    pub warnings: Vec<FormatWarning>,
}

#[derive(Clone, Copy)]
enum Edit {
    Mark(bool),
    Delete,
}

/// Operations against the log file a type resolved to.
///
/// # Example
///
/// ```rust,no_run
/// use ti_log::{IndexRange, LogStore};
///
/// let store = LogStore::new("todo.log");
/// store.append("todo", "buy milk")?;
/// store.set_marked("todo", IndexRange::single(1), true)?;
/// for entry in store.list("todo")?.entries {
///     println!("[{}] {}", entry.index, entry.message);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    /// Binds a store to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the log file exists yet.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Creates the log file with its header line if it does not exist.
    pub fn ensure_log_file(&self) -> Result<(), LogError> {
        writer::create_log_file(&self.path)?;
        Ok(())
    }

    /// Appends a new, unmarked entry for `type_name`.
    pub fn append(&self, type_name: &str, message: &str) -> Result<(), LogError> {
        let entry = LogEntry::new(type_name, message)?;
        let mut writer = LogWriter::open(&self.path)?;
        writer.append_entry(&entry)?;
        writer.finish()
    }

    /// Lists the entries of `type_name` with their per-type indices.
    ///
    /// A missing log file lists as empty.
    pub fn list(&self, type_name: &str) -> Result<Listing, LogError> {
        let mut reader = match LogReader::open(&self.path) {
            Ok(reader) => reader,
            Err(LogError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Listing::default())
            }
            Err(e) => return Err(e),
        };

        let mut indexer = Indexer::new(TypeFilter::new(type_name));
        let mut entries = Vec::new();
        while let Some(line) = reader.read_line()? {
            if let LogLine::Entry(entry) = line.kind {
                if let Some(index) = indexer.assign(&entry) {
                    entries.push(IndexedEntry {
                        index,
                        marked: entry.marked,
                        message: entry.message,
                    });
                }
            }
        }

        Ok(Listing {
            entries,
            warnings: reader.into_warnings(),
        })
    }

    /// Sets the mark of every `type_name` entry whose index is in `range`.
    pub fn set_marked(
        &self,
        type_name: &str,
        range: IndexRange,
        marked: bool,
    ) -> Result<Mutation, LogError> {
        self.edit(type_name, range, Edit::Mark(marked))
    }

    /// Removes every `type_name` entry whose index is in `range`.
    ///
    /// Remaining entries keep their relative order; their indices close up
    /// on the next read.
    pub fn delete_range(&self, type_name: &str, range: IndexRange) -> Result<Mutation, LogError> {
        self.edit(type_name, range, Edit::Delete)
    }

    fn edit(&self, type_name: &str, range: IndexRange, edit: Edit) -> Result<Mutation, LogError> {
        if writer::create_log_file(&self.path)? {
            return Ok(Mutation::default());
        }

        let mut reader = LogReader::open(&self.path)?;
        let lines = reader.read_all()?;

        let mut indexer = Indexer::new(TypeFilter::new(type_name));
        let mut affected = 0;
        let mut output = Vec::with_capacity(lines.len());

        for line in lines {
            let LogLine::Entry(mut entry) = line.kind else {
                output.push(line.raw);
                continue;
            };

            match indexer.assign(&entry) {
                Some(index) if range.contains(index) => {
                    affected += 1;
                    match edit {
                        Edit::Mark(marked) => {
                            entry.marked = marked;
                            let mut rewritten = entry.to_line();
                            if line.raw.ends_with('\r') {
                                rewritten.push('\r');
                            }
                            output.push(rewritten);
                        }
                        Edit::Delete => {}
                    }
                }
                _ => output.push(line.raw),
            }
        }

        writer::rewrite(&self.path, &output)?;
        debug!(
            path = %self.path.display(),
            type_name,
            lower = range.lower,
            upper = range.upper,
            affected,
            "edited log entries"
        );

        Ok(Mutation {
            affected,
            warnings: reader.into_warnings(),
        })
    }
}
