use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::pago_controller::PagoController;
use crate::dto::pago_dto::{GenerateHashRequest, GenerateHashResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_pago_router() -> Router<AppState> {
    Router::new().route("/generate-hash", post(generate_hash))
}

async fn generate_hash(
    State(state): State<AppState>,
    Json(request): Json<GenerateHashRequest>,
) -> Result<Json<GenerateHashResponse>, AppError> {
    let controller = PagoController::new(&state);
    let response = controller.generate_hash(request).await?;
    Ok(Json(response))
}
