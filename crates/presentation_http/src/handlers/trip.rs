//! Trip lookup handler

use axum::{Json, extract::Query, extract::State};
use domain::TripInfo;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query parameters for a trip lookup
#[derive(Debug, Clone, Deserialize)]
pub struct TripQuery {
    /// Free-form origin location
    pub origin: String,
    /// Free-form destination location
    pub destination: String,
}

/// Trip lookup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripResponse {
    /// Provider that produced the result
    pub provider: Option<String>,
    /// Total travel duration in whole minutes
    pub duration_minutes: u32,
    /// Total travel distance in whole kilometers
    pub distance_km: u32,
}

impl From<TripInfo> for TripResponse {
    fn from(info: TripInfo) -> Self {
        Self {
            provider: info.provider.map(|p| p.to_string()),
            duration_minutes: info.duration_minutes,
            distance_km: info.distance_km,
        }
    }
}

/// GET /v1/trips - look up duration and distance between two locations
#[instrument(skip(state))]
pub async fn get_trip(
    State(state): State<AppState>,
    Query(query): Query<TripQuery>,
) -> Result<Json<TripResponse>, ApiError> {
    let info = state
        .trip_service
        .lookup(&query.origin, &query.destination)
        .await?;
    Ok(Json(TripResponse::from(info)))
}
