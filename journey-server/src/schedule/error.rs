//! Timetable ingestion error types.

use std::path::PathBuf;

use crate::domain::{DomainError, InvalidLocationCode, InvalidMode, TimeError};

/// Failure to read the timetable source.
///
/// Fatal to searching: without a graph there is nothing to search.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened
    #[error("failed to open schedule {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading records failed part-way through
    #[error("failed to read schedule {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The background load task did not complete
    #[error("schedule load for {path} was interrupted: {message}")]
    Interrupted { path: PathBuf, message: String },
}

/// Why a single timetable record was rejected.
///
/// Record errors are never fatal to a load; the record is skipped.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordError {
    /// Fewer columns than the timetable layout requires
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("bad {field}: {source}")]
    Code {
        field: &'static str,
        #[source]
        source: InvalidLocationCode,
    },

    #[error("bad {field}: {source}")]
    Time {
        field: &'static str,
        #[source]
        source: TimeError,
    },

    #[error(transparent)]
    Mode(#[from] InvalidMode),

    #[error("bad price {0:?}: expected a non-negative integer")]
    Price(String),

    #[error(transparent)]
    Leg(#[from] DomainError),
}

impl RecordError {
    /// Whether this is the silent "short row" case rather than bad data.
    pub fn is_short_row(&self) -> bool {
        matches!(self, RecordError::TooFewFields { .. })
    }
}
