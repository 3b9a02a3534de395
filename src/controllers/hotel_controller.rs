use uuid::Uuid;
use validator::Validate;

use crate::cache::CatalogoCache;
use crate::dto::hotel_dto::{
    CreateHotelRequest, HotelResponse, ServiciosActivosResponse, UpdateHotelRequest,
    UpdateServiciosActivosRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::hotel_repository::HotelRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct HotelController {
    repository: HotelRepository,
    cache: CatalogoCache,
}

impl HotelController {
    pub fn new(state: &AppState) -> Self {
        Self {
            repository: HotelRepository::new(state.pool.clone()),
            cache: state.catalogo_cache(),
        }
    }

    pub async fn create(
        &self,
        request: CreateHotelRequest,
    ) -> Result<ApiResponse<HotelResponse>, AppError> {
        request.validate()?;

        let hotel = self
            .repository
            .create(
                request.nombre,
                request.email,
                request.comision_porcentaje,
                request.tarifa_cancelacion,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            HotelResponse::from(hotel),
            "Hotel creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<HotelResponse>, AppError> {
        let hoteles = self.repository.list_all().await?;
        Ok(hoteles.into_iter().map(HotelResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<HotelResponse, AppError> {
        let hotel = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hotel no encontrado".to_string()))?;
        Ok(HotelResponse::from(hotel))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateHotelRequest,
    ) -> Result<ApiResponse<HotelResponse>, AppError> {
        request.validate()?;

        let hotel = self
            .repository
            .update(
                id,
                request.nombre,
                request.email,
                request.comision_porcentaje,
                request.tarifa_cancelacion,
                request.activo,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            HotelResponse::from(hotel),
            "Hotel actualizado exitosamente".to_string(),
        ))
    }

    pub async fn get_servicios_activos(
        &self,
        hotel_id: Uuid,
    ) -> Result<ServiciosActivosResponse, AppError> {
        // Verificar que el hotel exista antes de listar
        self.repository
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hotel no encontrado".to_string()))?;

        let servicios = self.repository.list_servicios_activos(hotel_id).await?;
        Ok(ServiciosActivosResponse { hotel_id, servicios })
    }

    pub async fn update_servicios_activos(
        &self,
        hotel_id: Uuid,
        request: UpdateServiciosActivosRequest,
    ) -> Result<ServiciosActivosResponse, AppError> {
        self.repository
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hotel no encontrado".to_string()))?;

        self.repository
            .replace_servicios_activos(hotel_id, &request.servicios)
            .await?;

        // El catálogo por hotel depende de esta visibilidad
        self.cache.invalidar().await;

        let servicios = self.repository.list_servicios_activos(hotel_id).await?;
        Ok(ServiciosActivosResponse { hotel_id, servicios })
    }
}
