//! Directions API response models

use serde::Deserialize;

/// Trip duration and distance computed from a directions response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripSummary {
    /// Total travel duration in whole minutes (rounded down)
    pub duration_minutes: u32,
    /// Total travel distance in whole kilometers (rounded down)
    pub distance_km: u32,
}

/// Raw Directions API response
#[derive(Debug, Deserialize)]
pub(crate) struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Route {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Leg {
    pub duration: ValueField,
    pub distance: ValueField,
}

/// Numeric field of a leg; duration is in seconds, distance in meters
#[derive(Debug, Deserialize)]
pub(crate) struct ValueField {
    pub value: u64,
}
