//! Location name resolution.
//!
//! Maps free-text place names (case-insensitive) to location codes. The
//! table is injected: the built-in one, or one loaded from a JSON file.

mod error;
mod names;

pub use error::{LocationsError, UnknownLocation};
pub use names::LocationNames;
