//! Route planner using bounded depth-first search.
//!
//! This module implements the core planning algorithm that answers:
//! "What are the best few ways to get from here to there?"
//!
//! The search enumerates simple paths of up to a fixed number of legs,
//! pruning branches that already lose to routes found so far. Results are
//! then ranked by the chosen criterion and deduplicated by stop path.

mod config;
mod criterion;
mod rank;
mod search;

pub use config::{PruneBound, SearchConfig};
pub use criterion::{Criterion, UnknownCriterion};
pub use rank::{distinct_by_stops, rank_routes};
pub use search::{RouteSearch, SearchOutcome};
