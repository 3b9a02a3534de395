use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::catalogo_controller::CatalogoController;
use crate::dto::catalogo_dto::{CatalogoQuery, CatalogoResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_catalogo_router() -> Router<AppState> {
    Router::new().route("/", get(get_catalogo))
}

async fn get_catalogo(
    State(state): State<AppState>,
    Query(query): Query<CatalogoQuery>,
) -> Result<Json<CatalogoResponse>, AppError> {
    let controller = CatalogoController::new(&state);
    let catalogo = controller.get_catalogo(query.hotel_id).await?;
    Ok(Json(catalogo))
}
