//! Cache del catálogo público
//!
//! Snapshot del response de `GET /api/catalogo` por contexto de hotel, con
//! TTL corto. Las escrituras del panel incrementan la versión del snapshot
//! en lugar de enumerar claves: las entradas viejas expiran solas por TTL.

use tracing::warn;
use uuid::Uuid;

use super::redis_client::RedisClient;
use crate::dto::catalogo_dto::CatalogoResponse;

#[derive(Clone)]
pub struct CatalogoCache {
    redis: RedisClient,
    ttl: u64,
}

impl CatalogoCache {
    pub fn new(redis: RedisClient, ttl: u64) -> Self {
        Self { redis, ttl }
    }

    fn version_key(&self) -> String {
        self.redis.make_key("catalogo", "version")
    }

    async fn version(&self) -> u64 {
        self.redis.get::<u64>(&self.version_key()).await.unwrap_or(0)
    }

    fn snapshot_key(&self, version: u64, hotel_id: Option<Uuid>) -> String {
        let contexto = match hotel_id {
            Some(id) => id.to_string(),
            None => "publico".to_string(),
        };
        self.redis
            .make_key("catalogo", &format!("v{}:{}", version, contexto))
    }

    pub async fn get(&self, hotel_id: Option<Uuid>) -> Option<CatalogoResponse> {
        let version = self.version().await;
        self.redis.get(&self.snapshot_key(version, hotel_id)).await
    }

    pub async fn set(&self, hotel_id: Option<Uuid>, catalogo: &CatalogoResponse) {
        let version = self.version().await;
        let key = self.snapshot_key(version, hotel_id);
        if let Err(e) = self.redis.set(&key, catalogo, self.ttl).await {
            warn!("⚠️ No se pudo cachear el catálogo: {}", e);
        }
    }

    /// Invalidar todos los snapshots tras una escritura del panel
    pub async fn invalidar(&self) {
        if let Err(e) = self.redis.incr(&self.version_key()).await {
            warn!("⚠️ No se pudo invalidar el cache del catálogo: {}", e);
        }
    }
}
