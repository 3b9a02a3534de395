use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::hotel_controller::HotelController;
use crate::dto::hotel_dto::{
    CreateHotelRequest, HotelResponse, ServiciosActivosResponse, UpdateHotelRequest,
    UpdateServiciosActivosRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_hotel_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_hotel))
        .route("/", get(list_hoteles))
        .route("/:id", get(get_hotel))
        .route("/:id", put(update_hotel))
        .route("/:id/servicios-activos", get(get_servicios_activos))
        .route("/:id/servicios-activos", put(update_servicios_activos))
}

async fn create_hotel(
    State(state): State<AppState>,
    Json(request): Json<CreateHotelRequest>,
) -> Result<Json<ApiResponse<HotelResponse>>, AppError> {
    let controller = HotelController::new(&state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_hoteles(
    State(state): State<AppState>,
) -> Result<Json<Vec<HotelResponse>>, AppError> {
    let controller = HotelController::new(&state);
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HotelResponse>, AppError> {
    let controller = HotelController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateHotelRequest>,
) -> Result<Json<ApiResponse<HotelResponse>>, AppError> {
    let controller = HotelController::new(&state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn get_servicios_activos(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServiciosActivosResponse>, AppError> {
    let controller = HotelController::new(&state);
    let response = controller.get_servicios_activos(id).await?;
    Ok(Json(response))
}

async fn update_servicios_activos(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateServiciosActivosRequest>,
) -> Result<Json<ServiciosActivosResponse>, AppError> {
    let controller = HotelController::new(&state);
    let response = controller.update_servicios_activos(id, request).await?;
    Ok(Json(response))
}
