use crate::errors::LogError;

/// Comment line written at the top of every new log file.
pub const HEADER_LINE: &str = "# TI LOG";

/// Field separator inside an entry line.
pub const DELIMITER: &str = "|||";

/// Number of fields in a well-formed entry line.
pub const FIELD_COUNT: usize = 3;

/// Marker value for an unmarked entry.
pub const UNMARKED: &str = "0";

/// Marker value for a marked entry.
pub const MARKED: &str = "1";

/// One entry line: `type|||marked|||message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Type tag the entry was logged under.
    pub type_name: String,
    /// Whether the entry has been marked done.
    pub marked: bool,
    /// Message text, without the line terminator.
    pub message: String,
}

impl LogEntry {
    /// Creates a fresh, unmarked entry after checking it fits on one line.
    ///
    /// `|||` inside the message is accepted as-is; such an entry will not
    /// parse back and is reported as a format warning on read.
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Result<Self, LogError> {
        let type_name = type_name.into();
        let message = message.into();

        if type_name.contains(DELIMITER) {
            return Err(LogError::InvalidEntry {
                field: "type",
                reason: "must not contain '|||'",
            });
        }
        if has_line_break(&type_name) {
            return Err(LogError::InvalidEntry {
                field: "type",
                reason: "must not contain a line break",
            });
        }
        if has_line_break(&message) {
            return Err(LogError::InvalidEntry {
                field: "message",
                reason: "must not contain a line break",
            });
        }

        Ok(Self {
            type_name,
            marked: false,
            message,
        })
    }

    /// Parses an entry line (terminator already removed).
    ///
    /// On failure returns the number of fields that were found.
    pub fn parse(line: &str) -> Result<Self, usize> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(fields.len());
        }

        Ok(Self {
            type_name: fields[0].to_string(),
            marked: fields[1] != UNMARKED,
            message: fields[2].trim_end_matches('\r').to_string(),
        })
    }

    /// Serializes the entry without a line terminator.
    pub fn to_line(&self) -> String {
        let marker = if self.marked { MARKED } else { UNMARKED };
        format!(
            "{}{DELIMITER}{}{DELIMITER}{}",
            self.type_name, marker, self.message
        )
    }
}

/// Classification of one physical line of a log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    /// Leading `#` comment on the first line.
    Header,
    /// Well-formed entry.
    Entry(LogEntry),
    /// Line with the wrong number of fields.
    Malformed {
        /// Number of fields found.
        fields: usize,
    },
}

impl LogLine {
    /// Classifies `raw` found at 0-based position `position` in the file.
    ///
    /// Only the first line may be a header; a later `#` line is parsed as an
    /// entry like any other.
    pub fn classify(position: usize, raw: &str) -> Self {
        if position == 0 && raw.starts_with('#') {
            return LogLine::Header;
        }
        match LogEntry::parse(raw) {
            Ok(entry) => LogLine::Entry(entry),
            Err(fields) => LogLine::Malformed { fields },
        }
    }
}

fn has_line_break(s: &str) -> bool {
    s.contains('\n') || s.contains('\r')
}
