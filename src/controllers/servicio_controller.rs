use uuid::Uuid;
use validator::Validate;

use crate::cache::CatalogoCache;
use crate::dto::servicio_dto::{CreateServicioRequest, ServicioResponse, UpdateServicioRequest};
use crate::dto::ApiResponse;
use crate::repositories::servicio_repository::ServicioRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct ServicioController {
    repository: ServicioRepository,
    cache: CatalogoCache,
}

impl ServicioController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: ServicioRepository::new(state.pool.clone()),
            cache: state.catalogo_cache(),
        }
    }

    pub async fn create(
        &self,
        request: CreateServicioRequest,
    ) -> Result<ApiResponse<ServicioResponse>, AppError> {
        request.validate()?;

        if self.repository.codigo_exists(&request.codigo).await? {
            return Err(AppError::Conflict(format!(
                "Ya existe un servicio con código '{}'",
                request.codigo
            )));
        }

        let servicio = self
            .repository
            .create(
                request.codigo,
                request.nombre_es,
                request.nombre_en,
                request.descripcion_es,
                request.descripcion_en,
                request.tipo_actividad,
                request.configuracion,
            )
            .await?;

        self.cache.invalidar().await;

        Ok(ApiResponse::success_with_message(
            ServicioResponse::from(servicio),
            "Servicio creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<ServicioResponse>, AppError> {
        let servicios = self.repository.list_all().await?;
        Ok(servicios.into_iter().map(ServicioResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ServicioResponse, AppError> {
        let servicio = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Servicio no encontrado".to_string()))?;
        Ok(ServicioResponse::from(servicio))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateServicioRequest,
    ) -> Result<ApiResponse<ServicioResponse>, AppError> {
        request.validate()?;

        let servicio = self
            .repository
            .update(
                id,
                request.nombre_es,
                request.nombre_en,
                request.descripcion_es,
                request.descripcion_en,
                request.activo,
                request.configuracion,
            )
            .await?;

        self.cache.invalidar().await;

        Ok(ApiResponse::success_with_message(
            ServicioResponse::from(servicio),
            "Servicio actualizado exitosamente".to_string(),
        ))
    }

    /// Soft delete: el servicio sale del catálogo pero conserva su histórico
    pub async fn deactivate(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.deactivate(id).await?;
        self.cache.invalidar().await;
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        self.cache.invalidar().await;
        Ok(())
    }
}
