//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: cache backends
//! (Moka in-memory, Redis) and routing provider adapters wrapping the
//! integration clients.

pub mod adapters;
pub mod cache;
pub mod config;

pub use adapters::{GoogleRoutingAdapter, OsrmRoutingAdapter};
pub use cache::{MokaCache, MokaCacheConfig, RedisCache};
pub use config::{AppConfig, CacheBackend, CacheConfig, LookupConfig, ServerConfig};
