use axum::{
    extract::{Path, State},
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::servicio_controller::ServicioController;
use crate::dto::servicio_dto::{CreateServicioRequest, ServicioResponse, UpdateServicioRequest};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_servicio_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_servicio))
        .route("/", get(list_servicios))
        .route("/:id", get(get_servicio))
        .route("/:id", put(update_servicio))
        .route("/:id", delete(delete_servicio))
        .route("/:id/desactivar", patch(deactivate_servicio))
}

async fn create_servicio(
    State(state): State<AppState>,
    Json(request): Json<CreateServicioRequest>,
) -> Result<Json<ApiResponse<ServicioResponse>>, AppError> {
    let controller = ServicioController::new(&state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_servicios(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServicioResponse>>, AppError> {
    let controller = ServicioController::new(&state);
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_servicio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServicioResponse>, AppError> {
    let controller = ServicioController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_servicio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateServicioRequest>,
) -> Result<Json<ApiResponse<ServicioResponse>>, AppError> {
    let controller = ServicioController::new(&state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn deactivate_servicio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ServicioController::new(&state);
    controller.deactivate(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Servicio desactivado exitosamente"
    })))
}

async fn delete_servicio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ServicioController::new(&state);
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Servicio eliminado exitosamente"
    })))
}
