//! Web layer for the journey planner.
//!
//! JSON endpoints for fastest and cheapest route queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
