//! Adapters implementing application ports over integration clients

mod google_routing_adapter;
mod osrm_routing_adapter;

pub use google_routing_adapter::GoogleRoutingAdapter;
pub use osrm_routing_adapter::OsrmRoutingAdapter;
