//! Log writer implementation.

use crate::entry::{LogEntry, HEADER_LINE};
use crate::errors::LogError;
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Creates a log file containing only the header line.
///
/// Returns `Ok(true)` if the file was created and `Ok(false)` if something
/// already exists at `path`.
///
/// # Errors
///
/// Returns [`LogError::InvalidPath`] if the file cannot be created.
pub fn create_log_file<P: AsRef<Path>>(path: P) -> Result<bool, LogError> {
    let path = path.as_ref();
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(source) => {
            return Err(LogError::InvalidPath {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    writeln!(file, "{HEADER_LINE}")?;
    file.flush()?;
    debug!(path = %path.display(), "created log file");
    Ok(true)
}

/// Appending writer for a log file.
///
/// A new or empty file receives the header line first. If the existing file
/// does not end with a newline, one is written before the first entry so the
/// entry never merges into the previous line.
pub struct LogWriter {
    file: File,
    needs_newline: bool,
}

impl LogWriter {
    /// Opens or creates a log file for appending.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidPath`] if the file cannot be created, or
    /// [`LogError::Io`] if it cannot be opened or inspected.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let path = path.as_ref();
        create_log_file(path)?;

        let file = OpenOptions::new().read(true).append(true).open(path)?;
        let len = file.metadata()?.len();

        let mut writer = Self {
            file,
            needs_newline: false,
        };

        if len == 0 {
            writer.write_line(HEADER_LINE)?;
        } else {
            let mut last = [0u8; 1];
            writer.file.seek(io::SeekFrom::End(-1))?;
            writer.file.read_exact(&mut last)?;
            writer.needs_newline = last[0] != b'\n';
        }

        Ok(writer)
    }

    /// Appends one entry line.
    pub fn append_entry(&mut self, entry: &LogEntry) -> Result<(), LogError> {
        if self.needs_newline {
            self.file.write_all(b"\n")?;
            self.needs_newline = false;
        }
        self.write_line(&entry.to_line())
    }

    fn write_line(&mut self, line: &str) -> Result<(), LogError> {
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        self.file.flush()?;
        Ok(())
    }

    /// Finishes writing and closes the file.
    pub fn finish(mut self) -> Result<(), LogError> {
        self.file.flush()?;
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.file.flush();
    }
}

/// Replaces the contents of `path` with `lines`, each terminated by `\n`.
///
/// Symlinks are followed so the file they point at is the one replaced. The
/// lines are written to a temporary file next to that target, given the
/// target's permissions, and renamed over it, so readers see either the old
/// or the new contents.
pub fn rewrite<P, I, S>(path: P, lines: I) -> Result<(), LogError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let target = fs::canonicalize(path.as_ref())?;
    let permissions = fs::metadata(&target)?.permissions();
    let temp_path = temp_path_for(&target);

    let written = write_lines(&temp_path, lines)
        .and_then(|count| {
            fs::set_permissions(&temp_path, permissions)?;
            Ok(count)
        })
        .and_then(|count| {
            fs::rename(&temp_path, &target)?;
            Ok(count)
        });

    match written {
        Ok(count) => {
            debug!(path = %target.display(), lines = count, "rewrote log file");
            Ok(())
        }
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            Err(e.into())
        }
    }
}

fn write_lines<I, S>(path: &Path, lines: I) -> io::Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut file = File::create(path)?;
    let mut count = 0usize;
    for line in lines {
        file.write_all(line.as_ref().as_bytes())?;
        file.write_all(b"\n")?;
        count += 1;
    }
    file.flush()?;
    Ok(count)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("log"));
    name.push(".tmp");
    path.with_file_name(name)
}
