use uuid::Uuid;

use crate::cache::CatalogoCache;
use crate::dto::catalogo_dto::CatalogoResponse;
use crate::services::catalogo_service::CatalogoService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct CatalogoController {
    service: CatalogoService,
    cache: CatalogoCache,
}

impl CatalogoController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: CatalogoService::new(state.pool.clone()),
            cache: state.catalogo_cache(),
        }
    }

    /// Catálogo público, cacheado por contexto de hotel
    pub async fn get_catalogo(
        &self,
        hotel_id: Option<Uuid>,
    ) -> Result<CatalogoResponse, AppError> {
        if let Some(catalogo) = self.cache.get(hotel_id).await {
            return Ok(catalogo);
        }

        let catalogo = self.service.armar_catalogo(hotel_id).await?;
        self.cache.set(hotel_id, &catalogo).await;
        Ok(catalogo)
    }
}
