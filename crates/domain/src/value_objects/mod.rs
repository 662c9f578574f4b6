//! Domain value objects

mod provider_id;
mod route_key;

pub use provider_id::ProviderId;
pub use route_key::RouteKey;
