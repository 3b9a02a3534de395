use uuid::Uuid;
use validator::Validate;

use crate::cache::CatalogoCache;
use crate::dto::vehiculo_dto::{CreateVehiculoRequest, UpdateVehiculoRequest, VehiculoResponse};
use crate::dto::ApiResponse;
use crate::repositories::vehiculo_repository::VehiculoRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_rango_pasajeros;

pub struct VehiculoController {
    repository: VehiculoRepository,
    cache: CatalogoCache,
}

impl VehiculoController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: VehiculoRepository::new(state.pool.clone()),
            cache: state.catalogo_cache(),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehiculoRequest,
    ) -> Result<ApiResponse<VehiculoResponse>, AppError> {
        request.validate()?;

        validate_rango_pasajeros(request.capacidad_min, request.capacidad_max).map_err(|_| {
            AppError::BadRequest("capacidad_min no puede superar capacidad_max".to_string())
        })?;

        let vehiculo = self
            .repository
            .create(request.nombre, request.capacidad_min, request.capacidad_max)
            .await?;

        self.cache.invalidar().await;

        Ok(ApiResponse::success_with_message(
            VehiculoResponse::from(vehiculo),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<VehiculoResponse>, AppError> {
        let vehiculos = self.repository.list_all().await?;
        Ok(vehiculos.into_iter().map(VehiculoResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehiculoResponse, AppError> {
        let vehiculo = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;
        Ok(VehiculoResponse::from(vehiculo))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehiculoRequest,
    ) -> Result<ApiResponse<VehiculoResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;
        let min = request.capacidad_min.unwrap_or(current.capacidad_min);
        let max = request.capacidad_max.unwrap_or(current.capacidad_max);
        validate_rango_pasajeros(min, max).map_err(|_| {
            AppError::BadRequest("capacidad_min no puede superar capacidad_max".to_string())
        })?;

        let vehiculo = self
            .repository
            .update(
                id,
                request.nombre,
                request.capacidad_min,
                request.capacidad_max,
                request.activo,
            )
            .await?;

        self.cache.invalidar().await;

        Ok(ApiResponse::success_with_message(
            VehiculoResponse::from(vehiculo),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        self.cache.invalidar().await;
        Ok(())
    }
}
