//! Application state for the web layer.

use std::sync::Arc;

use crate::service::JourneyService;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Route queries over the loaded schedule
    pub journeys: Arc<JourneyService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(journeys: JourneyService) -> Self {
        Self {
            journeys: Arc::new(journeys),
        }
    }
}
