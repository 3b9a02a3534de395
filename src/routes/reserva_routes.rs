use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::reserva_controller::ReservaController;
use crate::dto::reserva_dto::{
    CreateReservaRequest, ReservaResponse, TrackingResponse, UpdateEstadoRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas públicas del flujo de reserva
pub fn create_reserva_public_router() -> Router<AppState> {
    Router::new().route("/:tipo_servicio", post(create_reserva))
}

/// Rutas del panel (requieren auth, aplicada al anidar)
pub fn create_reserva_admin_router() -> Router<AppState> {
    Router::new()
        .route("/update-status", patch(update_estado))
        .route("/:tipo_servicio", get(list_reservas))
        .route("/:tipo_servicio/:id", get(get_reserva))
}

/// Router público de tracking
pub fn create_tracking_router() -> Router<AppState> {
    Router::new().route("/:codigo", get(tracking))
}

async fn create_reserva(
    State(state): State<AppState>,
    Path(tipo_servicio): Path<String>,
    Json(request): Json<CreateReservaRequest>,
) -> Result<Json<ApiResponse<ReservaResponse>>, AppError> {
    let controller = ReservaController::new(&state);
    let response = controller.create(tipo_servicio, request).await?;
    Ok(Json(response))
}

async fn list_reservas(
    State(state): State<AppState>,
    Path(tipo_servicio): Path<String>,
) -> Result<Json<Vec<ReservaResponse>>, AppError> {
    let controller = ReservaController::new(&state);
    let response = controller.list_por_tipo(&tipo_servicio).await?;
    Ok(Json(response))
}

async fn get_reserva(
    State(state): State<AppState>,
    Path((tipo_servicio, id)): Path<(String, Uuid)>,
) -> Result<Json<ReservaResponse>, AppError> {
    let controller = ReservaController::new(&state);
    let response = controller.get_by_id(&tipo_servicio, id).await?;
    Ok(Json(response))
}

async fn update_estado(
    State(state): State<AppState>,
    Json(request): Json<UpdateEstadoRequest>,
) -> Result<Json<ApiResponse<ReservaResponse>>, AppError> {
    let controller = ReservaController::new(&state);
    let response = controller.update_estado(request).await?;
    Ok(Json(response))
}

async fn tracking(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
) -> Result<Json<TrackingResponse>, AppError> {
    let controller = ReservaController::new(&state);
    let response = controller.tracking(&codigo).await?;
    Ok(Json(response))
}
