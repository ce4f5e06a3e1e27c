//! Route ranking for search results.
//!
//! The search hands back every route it completed. Ranking keeps the best
//! few, and only one route per stop-code path: two routes through the
//! same stops are the same route to a traveller, whichever legs realise it.

use std::collections::HashSet;

use crate::domain::{LocationCode, Route};

use super::search::SearchOutcome;

/// Keep the best `max_results` routes with distinct stop paths.
///
/// Routes are taken best-first from the outcome; a route whose stop path
/// was already kept is discarded. Stops when `max_results` routes are kept
/// or the outcome is exhausted. Returns routes sorted best-first.
pub fn rank_routes(outcome: SearchOutcome, max_results: usize) -> Vec<Route> {
    distinct_by_stops(outcome.into_best_first(), max_results)
}

/// Keep the first `max_results` routes with distinct stop paths from an
/// already ordered sequence.
pub fn distinct_by_stops(
    routes: impl IntoIterator<Item = Route>,
    max_results: usize,
) -> Vec<Route> {
    let mut seen: HashSet<Vec<LocationCode>> = HashSet::new();
    let mut kept = Vec::with_capacity(max_results);

    for route in routes {
        if kept.len() >= max_results {
            break;
        }
        if seen.insert(route.stop_path()) {
            kept.push(route);
        }
    }

    kept
}
