//! Cache
//!
//! Este módulo contiene el cache redis del catálogo público.

pub mod cache_config;
pub mod catalogo_cache;
pub mod redis_client;

pub use cache_config::CacheConfig;
pub use catalogo_cache::CatalogoCache;
pub use redis_client::RedisClient;
