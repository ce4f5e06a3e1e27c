//! Search configuration for the route planner.

use chrono::Duration;

/// How candidates are pruned against routes already found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PruneBound {
    /// Skip a candidate leg when the route it would extend is already
    /// worse than the best completed route. This compares against the
    /// single best route only, so it can discard routes that would have
    /// made the final top list; it does not guarantee the exact top-K.
    #[default]
    BestSoFar,

    /// Skip a candidate leg once `max_results` distinct stop paths are
    /// known and the extended route is already worse than the last of
    /// them. Exact: the ranked top list matches an unpruned search.
    KthBest,

    /// Never prune; explore every simple path within the depth bound.
    None,
}

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of legs in a route.
    pub max_depth: usize,

    /// Maximum number of routes to return.
    pub max_results: usize,

    /// Time added whenever consecutive legs change mode (minutes).
    /// Never affects price.
    pub transfer_penalty_mins: u32,

    /// Branch-and-bound pruning strategy.
    pub prune: PruneBound,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_depth: usize,
        max_results: usize,
        transfer_penalty_mins: u32,
        prune: PruneBound,
    ) -> Self {
        Self {
            max_depth,
            max_results,
            transfer_penalty_mins,
            prune,
        }
    }

    /// Returns the transfer penalty as a Duration.
    pub fn transfer_penalty(&self) -> Duration {
        Duration::minutes(i64::from(self.transfer_penalty_mins))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            max_results: 5,
            transfer_penalty_mins: 120, // 2 hours
            prune: PruneBound::BestSoFar,
        }
    }
}
