//! Middleware de autenticación JWT
//!
//! Este módulo protege las rutas del panel de administración: extrae el
//! token del header Authorization, lo verifica y deja al admin autenticado
//! disponible como Extension.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

/// Admin autenticado que se inyecta en las requests del panel
#[derive(Debug, Clone)]
pub struct AdminAutenticado {
    pub admin_id: Uuid,
    pub email: String,
}

/// Middleware de autenticación del panel
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &jwt_config)?;

    let admin_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    request.extensions_mut().insert(AdminAutenticado {
        admin_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}
