//! OSRM routing integration for GeoTrip
//!
//! Provides driving-route lookups via the community
//! [OSRM](http://project-osrm.org) routing engine and address geocoding via
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration
//! crates. [`RoutingClient`] defines the interface for coordinate-to-coordinate
//! routing, implemented by [`OsrmRouteClient`]. [`GeocodingClient`] handles
//! address-to-coordinate conversion via [`NominatimGeocodingClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_osrm::{
//!     GeocodingClient, NominatimGeocodingClient, OsrmConfig, OsrmRouteClient, RoutingClient,
//! };
//!
//! let config = OsrmConfig::default();
//! let geocoder = NominatimGeocodingClient::new(&config)?;
//! let router = OsrmRouteClient::new(&config)?;
//!
//! let from = geocoder.geocode("Berlin").await?;
//! let to = geocoder.geocode("Hamburg").await?;
//! let trip = router.route(&from, &to).await?;
//! ```

mod client;
mod config;
mod error;
mod geocoding;
mod models;

pub use client::{OsrmRouteClient, RoutingClient};
pub use config::OsrmConfig;
pub use error::OsrmError;
pub use geocoding::{GeocodingClient, NominatimGeocodingClient};
pub use models::{Point, TripSummary};
