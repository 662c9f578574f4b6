//! Google Directions integration for GeoTrip
//!
//! Provides driving-route lookups via the
//! [Google Directions API](https://developers.google.com/maps/documentation/directions).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration
//! crates. [`DirectionsClient`] defines the interface for route lookups,
//! implemented by [`GoogleDirectionsClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_google::{DirectionsClient, GoogleConfig, GoogleDirectionsClient};
//!
//! let config = GoogleConfig {
//!     api_key: "…".to_string(),
//!     ..Default::default()
//! };
//! let client = GoogleDirectionsClient::new(&config)?;
//! let trip = client.trip("Berlin", "Hamburg").await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DirectionsClient, GoogleDirectionsClient};
pub use config::GoogleConfig;
pub use error::GoogleError;
pub use models::TripSummary;
