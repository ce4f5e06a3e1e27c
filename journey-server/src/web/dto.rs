//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Route;

/// Request to find routes between two named places.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRequest {
    /// Origin city name (or location code)
    #[serde(rename = "fromCity", alias = "from_city")]
    pub from_city: String,

    /// Destination city name (or location code)
    #[serde(rename = "toCity", alias = "to_city")]
    pub to_city: String,
}

/// Ranked routes for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteResult>,
}

impl RoutesResponse {
    /// A response with no routes.
    pub fn empty() -> Self {
        Self { routes: Vec::new() }
    }

    /// Format ranked routes, preserving their order.
    pub fn from_routes<'a>(routes: impl IntoIterator<Item = &'a Route>) -> Self {
        Self {
            routes: routes.into_iter().map(RouteResult::from_route).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// A single route in a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Stop codes joined by `_`, e.g. `"BOM_DEL"`
    pub route: String,

    /// One `MODE_PRICE` entry per leg
    pub transport: Vec<String>,

    /// Minutes, including transfer penalties
    pub total_time: u64,

    pub total_price: u64,
}

impl RouteResult {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            route: route.route_key(),
            transport: route.transport(),
            total_time: route.total_time(),
            total_price: route.total_price(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
