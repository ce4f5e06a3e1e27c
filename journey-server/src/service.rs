//! Journey queries by place name.
//!
//! Resolves names to codes, runs the route search against the shared
//! schedule, and formats the ranked routes for the wire.

use tracing::{debug, info};

use crate::locations::LocationNames;
use crate::planner::{Criterion, RouteSearch, SearchConfig};
use crate::schedule::{LoadError, SharedSchedule};
use crate::web::RoutesResponse;

/// Answers fastest/cheapest route queries.
#[derive(Debug)]
pub struct JourneyService {
    schedule: SharedSchedule,
    names: LocationNames,
    config: SearchConfig,
}

impl JourneyService {
    pub fn new(schedule: SharedSchedule, names: LocationNames, config: SearchConfig) -> Self {
        Self {
            schedule,
            names,
            config,
        }
    }

    /// Up to `max_results` routes ordered by total time, penalties included.
    ///
    /// Unknown place names give an empty response. Only a failure to load
    /// the schedule is an error.
    pub async fn fastest(&self, from: &str, to: &str) -> Result<RoutesResponse, LoadError> {
        self.find(from, to, Criterion::Time).await
    }

    /// Up to `max_results` routes ordered by total price.
    pub async fn cheapest(&self, from: &str, to: &str) -> Result<RoutesResponse, LoadError> {
        self.find(from, to, Criterion::Price).await
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    async fn find(
        &self,
        from: &str,
        to: &str,
        criterion: Criterion,
    ) -> Result<RoutesResponse, LoadError> {
        let (origin, destination) = match (self.names.resolve(from), self.names.resolve(to)) {
            (Ok(origin), Ok(destination)) => (origin, destination),
            (Err(e), _) | (_, Err(e)) => {
                debug!(from, to, error = %e, "Unresolved location");
                return Ok(RoutesResponse::empty());
            }
        };

        let graph = self.schedule.get().await?;
        let routes = RouteSearch::new(&graph, &self.config).top_routes(origin, destination, criterion);

        info!(
            origin = %origin,
            destination = %destination,
            criterion = %criterion,
            routes = routes.len(),
            "Answered route query"
        );

        Ok(RoutesResponse::from_routes(&routes))
    }
}
