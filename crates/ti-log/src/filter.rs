//! Entry filtering and per-type index assignment.

use crate::entry::LogEntry;
use crate::errors::LogError;

/// Trait for selecting entries during iteration.
pub trait EntryFilter {
    /// Returns true if the entry matches the filter criteria.
    fn matches(&self, entry: &LogEntry) -> bool;
}

/// Filter by exact type tag.
#[derive(Debug, Clone)]
pub struct TypeFilter {
    /// Type tag to match.
    pub type_name: String,
}

impl TypeFilter {
    /// Creates a filter for `type_name`.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

impl EntryFilter for TypeFilter {
    fn matches(&self, entry: &LogEntry) -> bool {
        entry.type_name == self.type_name
    }
}

/// Assigns 1-based sequential indices to the entries a filter accepts.
///
/// Indices are never stored; every operation builds a fresh indexer and
/// walks the file from the top.
#[derive(Debug, Clone)]
pub struct Indexer<F: EntryFilter> {
    filter: F,
    count: usize,
}

impl<F: EntryFilter> Indexer<F> {
    /// Creates an indexer starting before index 1.
    pub fn new(filter: F) -> Self {
        Self { filter, count: 0 }
    }

    /// Returns the entry's index if it matches, advancing the counter.
    pub fn assign(&mut self, entry: &LogEntry) -> Option<usize> {
        if self.filter.matches(entry) {
            self.count += 1;
            Some(self.count)
        } else {
            None
        }
    }
}

/// Inclusive range of per-type indices, always `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    /// Lowest index addressed.
    pub lower: usize,
    /// Highest index addressed.
    pub upper: usize,
}

impl IndexRange {
    /// Range addressing exactly one index.
    pub fn single(index: usize) -> Self {
        Self {
            lower: index,
            upper: index,
        }
    }

    /// Builds a range from caller-supplied endpoints in any order.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidRange`] unless one or two endpoints are given.
    pub fn from_endpoints(endpoints: &[usize]) -> Result<Self, LogError> {
        match *endpoints {
            [index] => Ok(Self::single(index)),
            [a, b] => Ok(Self {
                lower: a.min(b),
                upper: a.max(b),
            }),
            _ => Err(LogError::InvalidRange {
                count: endpoints.len(),
            }),
        }
    }

    /// Whether `index` falls inside the range.
    pub fn contains(&self, index: usize) -> bool {
        self.lower <= index && index <= self.upper
    }
}
