//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, warn};

use crate::schedule::LoadError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cities/findFastestRoute", post(find_fastest_route))
        .route("/api/cities/findCheapestRoute", post(find_cheapest_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Routes ordered by total time.
async fn find_fastest_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RoutesResponse>, AppError> {
    let req = parse_request(&body)?;
    let routes = state.journeys.fastest(&req.from_city, &req.to_city).await?;
    Ok(Json(routes))
}

/// Routes ordered by total price.
async fn find_cheapest_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RoutesResponse>, AppError> {
    let req = parse_request(&body)?;
    let routes = state.journeys.cheapest(&req.from_city, &req.to_city).await?;
    Ok(Json(routes))
}

// Parsed by hand so the body can be logged on failure.
fn parse_request(body: &[u8]) -> Result<RouteRequest, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "Rejected route request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => {
                error!(%message, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
