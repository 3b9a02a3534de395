//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use reqwest::Client;
use sqlx::PgPool;
use std::sync::Arc;

use crate::cache::{CatalogoCache, RedisClient};
use crate::config::environment::EnvironmentConfig;
use crate::services::notificacion_service::NotificationSender;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub redis: RedisClient,
    pub http_client: Client,
    pub notificador: Arc<dyn NotificationSender>,
}

impl AppState {
    pub fn new(
        pool: PgPool,
        config: EnvironmentConfig,
        redis: RedisClient,
        notificador: Arc<dyn NotificationSender>,
    ) -> Self {
        Self {
            pool,
            config,
            redis,
            http_client: Client::new(),
            notificador,
        }
    }

    pub fn catalogo_cache(&self) -> CatalogoCache {
        CatalogoCache::new(self.redis.clone(), self.config.catalogo_cache_ttl)
    }
}
