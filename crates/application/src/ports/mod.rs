//! Port definitions implemented by infrastructure adapters

mod cache_port;
mod routing_port;

pub use cache_port::{CachePort, CachePortExt, CacheStats};
pub use routing_port::{ProviderError, RoutingPort};

#[cfg(test)]
pub use routing_port::MockRoutingPort;
