//! Depth-first route search with branch-and-bound pruning.
//!
//! Enumerates simple paths from an origin to a destination over the
//! schedule graph, up to a fixed number of legs. A single in-progress
//! route and visited set are grown before each descent and shrunk after
//! it returns, so sibling branches never see each other's stops.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{Leg, LocationCode, Route};
use crate::schedule::ScheduleGraph;

use super::config::{PruneBound, SearchConfig};
use super::criterion::Criterion;
use super::rank::rank_routes;

/// A completed route in the result heap.
///
/// Ordered so the heap pops the lowest metric first, earliest found first
/// among equals.
#[derive(Debug)]
struct Found {
    metric: u64,
    seq: usize,
    route: Route,
}

impl Ord for Found {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .metric
            .cmp(&self.metric)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Found {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Found {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Found {}

/// Every route completed during one search, best first.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    found: BinaryHeap<Found>,
    explored: usize,
}

impl SearchOutcome {
    /// An outcome with no routes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of completed routes.
    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Number of legs descended into during the search.
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// The best route found, if any.
    pub fn best(&self) -> Option<&Route> {
        self.found.peek().map(|f| &f.route)
    }

    /// The best route's metric under the search criterion.
    pub fn best_metric(&self) -> Option<u64> {
        self.found.peek().map(|f| f.metric)
    }

    /// Remove and return the best remaining route.
    pub fn pop_best(&mut self) -> Option<Route> {
        self.found.pop().map(|f| f.route)
    }

    /// Consume the outcome, yielding routes best first.
    pub fn into_best_first(mut self) -> impl Iterator<Item = Route> {
        std::iter::from_fn(move || self.pop_best())
    }
}

/// Mutable state threaded through one search.
struct DfsState {
    route: Route,
    visited: HashSet<LocationCode>,
    found: BinaryHeap<Found>,
    explored: usize,
    seq: usize,
    /// Best metric seen per stop path, for [`PruneBound::KthBest`].
    path_best: HashMap<Vec<LocationCode>, u64>,
    /// Metric of the k-th best distinct stop path, once k are known.
    kth_bound: Option<u64>,
    k: usize,
}

impl DfsState {
    fn new(k: usize) -> Self {
        Self {
            route: Route::new(),
            visited: HashSet::new(),
            found: BinaryHeap::new(),
            explored: 0,
            seq: 0,
            path_best: HashMap::new(),
            kth_bound: None,
            k,
        }
    }

    fn capture(&mut self, criterion: Criterion, track_paths: bool) {
        let metric = criterion.route_metric(&self.route);
        trace!(route = %self.route.route_key(), metric, "Route found");

        if track_paths {
            let best = self.path_best.entry(self.route.stop_path()).or_insert(metric);
            *best = (*best).min(metric);
            if self.k > 0 && self.path_best.len() >= self.k {
                let mut metrics: Vec<u64> = self.path_best.values().copied().collect();
                let (_, kth, _) = metrics.select_nth_unstable(self.k - 1);
                self.kth_bound = Some(*kth);
            }
        }

        self.found.push(Found {
            metric,
            seq: self.seq,
            route: self.route.clone(),
        });
        self.seq += 1;
    }
}

/// Route search over a schedule graph.
pub struct RouteSearch<'a> {
    graph: &'a ScheduleGraph,
    config: &'a SearchConfig,
}

impl<'a> RouteSearch<'a> {
    /// Create a new search.
    pub fn new(graph: &'a ScheduleGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Find routes from `origin` to `destination`, scored by `criterion`.
    ///
    /// Returns every route completed within the depth bound; ranking and
    /// deduplication are left to the caller. An origin with no outbound
    /// legs, a destination no leg arrives at, or an origin equal to the
    /// destination all give an empty outcome.
    pub fn search(
        &self,
        origin: LocationCode,
        destination: LocationCode,
        criterion: Criterion,
    ) -> SearchOutcome {
        if origin == destination {
            debug!(origin = %origin, "Origin and destination coincide");
            return SearchOutcome::empty();
        }
        if !self.graph.has_origin(&origin) {
            debug!(origin = %origin, "No routes found from origin");
            return SearchOutcome::empty();
        }
        if !self.graph.is_known_destination(&destination) {
            debug!(destination = %destination, "No routes found to destination");
            return SearchOutcome::empty();
        }

        let mut state = DfsState::new(self.config.max_results);
        self.descend(origin, destination, criterion, &mut state);

        debug!(
            origin = %origin,
            destination = %destination,
            criterion = %criterion,
            found = state.found.len(),
            explored = state.explored,
            "Route search complete"
        );

        SearchOutcome {
            found: state.found,
            explored: state.explored,
        }
    }

    /// Search, then keep the best distinct routes up to `max_results`.
    pub fn top_routes(
        &self,
        origin: LocationCode,
        destination: LocationCode,
        criterion: Criterion,
    ) -> Vec<Route> {
        rank_routes(
            self.search(origin, destination, criterion),
            self.config.max_results,
        )
    }

    fn descend(
        &self,
        current: LocationCode,
        destination: LocationCode,
        criterion: Criterion,
        state: &mut DfsState,
    ) {
        if current == destination && !state.route.is_empty() {
            state.capture(criterion, self.config.prune == PruneBound::KthBest);
            return;
        }
        if state.route.len() >= self.config.max_depth {
            return;
        }

        state.visited.insert(current);

        // Cheapest-first, so good routes are found early and prune harder.
        let mut candidates: Vec<&Arc<Leg>> = self.graph.outbound_legs(&current).iter().collect();
        candidates.sort_by_key(|leg| criterion.leg_cost(leg));

        for leg in candidates {
            if state.visited.contains(&leg.destination()) {
                continue;
            }

            let transfer = state
                .route
                .transfer_before(leg, self.config.transfer_penalty_mins);
            if self.pruned(criterion, state, leg, transfer) {
                continue;
            }

            state.route.push(Arc::clone(leg), transfer);
            state.explored += 1;
            self.descend(leg.destination(), destination, criterion, state);
            state.route.pop();
        }

        state.visited.remove(&current);
    }

    /// Whether taking `leg` already loses to the routes found so far.
    fn pruned(&self, criterion: Criterion, state: &DfsState, leg: &Leg, transfer: u32) -> bool {
        let bound = match self.config.prune {
            PruneBound::None => None,
            PruneBound::BestSoFar => state.found.peek().map(|best| best.metric),
            PruneBound::KthBest => state.kth_bound,
        };
        bound.is_some_and(|bound| criterion.projected(&state.route, leg, transfer) > bound)
    }
}
