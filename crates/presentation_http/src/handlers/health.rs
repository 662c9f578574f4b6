//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub providers: Vec<ProviderStatus>,
    pub cache: CacheStatus,
}

/// Availability of a single routing provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub provider: String,
    pub available: bool,
}

/// Cache counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStatus {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
}

/// Readiness check - can at least one provider serve lookups?
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let availability = state.trip_service.provider_availability().await;
    let providers: Vec<ProviderStatus> = availability
        .into_iter()
        .map(|(id, available)| ProviderStatus {
            provider: id.to_string(),
            available,
        })
        .collect();

    let stats = state.trip_service.cache_stats();
    let ready = providers.iter().any(|p| p.available);
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            providers,
            cache: CacheStatus {
                hits: stats.hits,
                misses: stats.misses,
                entries: stats.entries,
            },
        }),
    )
}
