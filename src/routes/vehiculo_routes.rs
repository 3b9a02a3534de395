use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehiculo_controller::VehiculoController;
use crate::dto::vehiculo_dto::{CreateVehiculoRequest, UpdateVehiculoRequest, VehiculoResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehiculo_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehiculo))
        .route("/", get(list_vehiculos))
        .route("/:id", get(get_vehiculo))
        .route("/:id", put(update_vehiculo))
        .route("/:id", delete(delete_vehiculo))
}

async fn create_vehiculo(
    State(state): State<AppState>,
    Json(request): Json<CreateVehiculoRequest>,
) -> Result<Json<ApiResponse<VehiculoResponse>>, AppError> {
    let controller = VehiculoController::new(&state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_vehiculos(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehiculoResponse>>, AppError> {
    let controller = VehiculoController::new(&state);
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehiculoResponse>, AppError> {
    let controller = VehiculoController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehiculoRequest>,
) -> Result<Json<ApiResponse<VehiculoResponse>>, AppError> {
    let controller = VehiculoController::new(&state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehiculoController::new(&state);
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}
