//! Domain entities

mod trip_info;

pub use trip_info::TripInfo;
