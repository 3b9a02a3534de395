use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::reserva_controller::ReservaController;
use crate::dto::reserva_dto::{CotizacionResponse, PreviewCotizacionRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cotizacion_router() -> Router<AppState> {
    Router::new().route("/preview", post(preview_cotizacion))
}

async fn preview_cotizacion(
    State(state): State<AppState>,
    Json(request): Json<PreviewCotizacionRequest>,
) -> Result<Json<CotizacionResponse>, AppError> {
    let controller = ReservaController::new(&state);
    let response = controller.preview(request).await?;
    Ok(Json(response))
}
