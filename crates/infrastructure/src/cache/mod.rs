//! Cache backends implementing the application `CachePort`
//!
//! Two backends are available, selected through [`crate::config::CacheConfig`]:
//! - [`MokaCache`]: in-process, suitable for single-instance deployments
//! - [`RedisCache`]: distributed, shares entries across instances

mod moka_cache;
mod redis_cache;

pub use moka_cache::{MokaCache, MokaCacheConfig};
pub use redis_cache::RedisCache;
