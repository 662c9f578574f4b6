//! Application state shared across handlers

use std::sync::Arc;

use application::TripService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Trip lookup service
    pub trip_service: Arc<TripService>,
}
