//! Application services

mod trip_service;

pub use trip_service::TripService;
