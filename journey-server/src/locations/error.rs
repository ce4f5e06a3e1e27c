//! Location lookup error types.

use std::path::PathBuf;

use crate::domain::InvalidLocationCode;

/// A name that resolves to no known location.
///
/// Recovered at the query boundary into an empty result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown location: {0:?}")]
pub struct UnknownLocation(pub String);

/// Errors loading a name table from configuration.
#[derive(Debug, thiserror::Error)]
pub enum LocationsError {
    /// The file could not be read
    #[error("failed to read locations file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON object of name → code
    #[error("failed to parse locations file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A name maps to a malformed code
    #[error("location {name:?} has an invalid code: {source}")]
    InvalidCode {
        name: String,
        #[source]
        source: InvalidLocationCode,
    },
}
