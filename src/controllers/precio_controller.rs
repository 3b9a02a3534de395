use chrono::Utc;
use validator::Validate;

use crate::cache::CatalogoCache;
use crate::dto::precio_dto::{
    DeletePrecioVehiculoRequest, PrecioAdicionalResponse, PrecioVehiculoResponse,
    UpsertPrecioAdicionalRequest, UpsertPrecioVehiculoRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::precio_repository::PrecioRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_rango_pasajeros;

pub struct PrecioController {
    repository: PrecioRepository,
    cache: CatalogoCache,
}

impl PrecioController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: PrecioRepository::new(state.pool.clone()),
            cache: state.catalogo_cache(),
        }
    }

    pub async fn upsert_precio_vehiculo(
        &self,
        request: UpsertPrecioVehiculoRequest,
    ) -> Result<ApiResponse<PrecioVehiculoResponse>, AppError> {
        request.validate()?;

        validate_rango_pasajeros(request.pasajeros_min, request.pasajeros_max).map_err(|_| {
            AppError::BadRequest("pasajeros_min no puede superar pasajeros_max".to_string())
        })?;

        let precio = self
            .repository
            .upsert_precio_vehiculo(
                request.servicio_codigo,
                request.categoria,
                request.vehiculo_id,
                request.pasajeros_min,
                request.pasajeros_max,
                request.precio,
                request.vigente_desde,
                request.vigente_hasta,
                request.activo,
            )
            .await?;

        self.cache.invalidar().await;

        Ok(ApiResponse::success_with_message(
            PrecioVehiculoResponse::from(precio),
            "Precio guardado exitosamente".to_string(),
        ))
    }

    pub async fn delete_precio_vehiculo(
        &self,
        request: DeletePrecioVehiculoRequest,
    ) -> Result<(), AppError> {
        match (request.precio_id, request.servicio_codigo, request.vehiculo_id) {
            (Some(id), _, _) => self.repository.delete_precio_vehiculo_by_id(id).await?,
            (None, Some(codigo), Some(vehiculo_id)) => {
                self.repository
                    .delete_precio_vehiculo_by_combo(&codigo, vehiculo_id)
                    .await?
            }
            _ => {
                return Err(AppError::BadRequest(
                    "Se requiere precio_id o la combinación servicio_codigo + vehiculo_id"
                        .to_string(),
                ))
            }
        }

        self.cache.invalidar().await;
        Ok(())
    }

    pub async fn list_por_servicio(
        &self,
        servicio_codigo: &str,
    ) -> Result<Vec<PrecioVehiculoResponse>, AppError> {
        let precios = self
            .repository
            .list_vigentes_por_servicio(servicio_codigo, Utc::now().date_naive())
            .await?;
        Ok(precios.into_iter().map(PrecioVehiculoResponse::from).collect())
    }

    pub async fn upsert_precio_adicional(
        &self,
        request: UpsertPrecioAdicionalRequest,
    ) -> Result<ApiResponse<PrecioAdicionalResponse>, AppError> {
        request.validate()?;

        let adicional = self
            .repository
            .upsert_precio_adicional(
                request.servicio_codigo,
                request.tipo,
                request.sub_rango,
                request.precio,
                request.activo,
            )
            .await?;

        self.cache.invalidar().await;

        Ok(ApiResponse::success_with_message(
            PrecioAdicionalResponse::from(adicional),
            "Precio adicional guardado exitosamente".to_string(),
        ))
    }

    pub async fn list_adicionales_por_servicio(
        &self,
        servicio_codigo: &str,
    ) -> Result<Vec<PrecioAdicionalResponse>, AppError> {
        let adicionales = self
            .repository
            .list_adicionales_por_servicio(servicio_codigo)
            .await?;
        Ok(adicionales
            .into_iter()
            .map(PrecioAdicionalResponse::from)
            .collect())
    }
}
