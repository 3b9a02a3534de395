use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::precio_controller::PrecioController;
use crate::dto::precio_dto::{
    DeletePrecioVehiculoRequest, PrecioAdicionalResponse, PrecioVehiculoResponse,
    UpsertPrecioAdicionalRequest, UpsertPrecioVehiculoRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_precio_router() -> Router<AppState> {
    Router::new()
        // POST y PUT son el mismo upsert: a lo sumo una tarifa activa por
        // combinación (servicio, vehículo)
        .route(
            "/vehiculos",
            post(upsert_precio_vehiculo)
                .put(upsert_precio_vehiculo)
                .delete(delete_precio_vehiculo),
        )
        .route("/vehiculos/:servicio_codigo", get(list_precios_vehiculo))
        .route("/adicionales", put(upsert_precio_adicional))
        .route("/adicionales/:servicio_codigo", get(list_precios_adicionales))
}

async fn upsert_precio_vehiculo(
    State(state): State<AppState>,
    Json(request): Json<UpsertPrecioVehiculoRequest>,
) -> Result<Json<ApiResponse<PrecioVehiculoResponse>>, AppError> {
    let controller = PrecioController::new(&state);
    let response = controller.upsert_precio_vehiculo(request).await?;
    Ok(Json(response))
}

async fn delete_precio_vehiculo(
    State(state): State<AppState>,
    Json(request): Json<DeletePrecioVehiculoRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = PrecioController::new(&state);
    controller.delete_precio_vehiculo(request).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Precio eliminado exitosamente"
    })))
}

async fn list_precios_vehiculo(
    State(state): State<AppState>,
    Path(servicio_codigo): Path<String>,
) -> Result<Json<Vec<PrecioVehiculoResponse>>, AppError> {
    let controller = PrecioController::new(&state);
    let response = controller.list_por_servicio(&servicio_codigo).await?;
    Ok(Json(response))
}

async fn upsert_precio_adicional(
    State(state): State<AppState>,
    Json(request): Json<UpsertPrecioAdicionalRequest>,
) -> Result<Json<ApiResponse<PrecioAdicionalResponse>>, AppError> {
    let controller = PrecioController::new(&state);
    let response = controller.upsert_precio_adicional(request).await?;
    Ok(Json(response))
}

async fn list_precios_adicionales(
    State(state): State<AppState>,
    Path(servicio_codigo): Path<String>,
) -> Result<Json<Vec<PrecioAdicionalResponse>>, AppError> {
    let controller = PrecioController::new(&state);
    let response = controller.list_adicionales_por_servicio(&servicio_codigo).await?;
    Ok(Json(response))
}
