//! Log reader implementation.

use crate::entry::LogLine;
use crate::errors::{FormatWarning, LogError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// One physical line of a log file together with its classification.
#[derive(Debug, Clone)]
pub struct RawLine {
    /// Line text without its `\n` terminator.
    pub raw: String,
    /// Parsed form of the line.
    pub kind: LogLine,
}

/// Line-oriented reader over a log file.
///
/// Malformed lines are still yielded (so mutations can write them back
/// untouched) and are recorded as [`FormatWarning`]s.
///
/// # Example
///
/// ```rust,no_run
/// use ti_log::{LogLine, LogReader};
///
/// let mut reader = LogReader::open("work.log")?;
/// while let Some(line) = reader.read_line()? {
///     if let LogLine::Entry(entry) = line.kind {
///         println!("{}: {}", entry.type_name, entry.message);
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct LogReader<R = BufReader<File>> {
    inner: R,
    position: usize,
    warnings: Vec<FormatWarning>,
}

impl LogReader {
    /// Opens a log file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LogReader<R> {
    /// Wraps any buffered source.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            position: 0,
            warnings: Vec::new(),
        }
    }

    /// Reads and classifies the next line. Returns `Ok(None)` at end-of-file.
    pub fn read_line(&mut self) -> Result<Option<RawLine>, LogError> {
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
        }

        let position = self.position;
        self.position += 1;

        let kind = LogLine::classify(position, &buf);
        if let LogLine::Malformed { fields } = kind {
            let warning = FormatWarning {
                line: position + 1,
                fields,
            };
            warn!(line = warning.line, fields, "skipping improperly formatted log line");
            self.warnings.push(warning);
        }

        Ok(Some(RawLine {
            raw: buf,
            kind,
        }))
    }

    /// Reads every remaining line.
    pub fn read_all(&mut self) -> Result<Vec<RawLine>, LogError> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            lines.push(line);
        }
        Ok(lines)
    }

    /// Consumes the reader, returning the collected warnings.
    pub fn into_warnings(self) -> Vec<FormatWarning> {
        self.warnings
    }
}
