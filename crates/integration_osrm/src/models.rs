//! OSRM and Nominatim response models

use serde::Deserialize;

/// Geographic point as returned by Nominatim
///
/// Nominatim serializes coordinates as strings; they are passed through to
/// the router verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Point {
    /// Latitude in degrees
    pub lat: String,
    /// Longitude in degrees
    pub lon: String,
}

/// Trip duration and distance computed from a router response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripSummary {
    /// Total travel duration in whole minutes (rounded up)
    pub duration_minutes: u32,
    /// Total travel distance in whole kilometers (rounded up)
    pub distance_km: u32,
}

/// Raw OSRM route response
#[derive(Debug, Deserialize)]
pub(crate) struct RouterAnswer {
    #[serde(default)]
    pub routes: Vec<RouteInfo>,
}

/// A single route; duration is in seconds, distance in meters
#[derive(Debug, Deserialize)]
pub(crate) struct RouteInfo {
    pub duration: f64,
    pub distance: f64,
}
