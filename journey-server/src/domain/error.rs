//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from ingestion/IO errors.

use super::LocationCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Invalid leg construction (e.g., origin equals destination)
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),

    /// Consecutive legs don't connect
    #[error("legs do not connect: route ends at {0} but next leg starts at {1}")]
    NotContiguous(LocationCode, LocationCode),

    /// Route has no legs
    #[error("route must have at least one leg")]
    EmptyRoute,
}
