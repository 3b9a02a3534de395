//! DTOs de autenticación del panel

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_email;

/// Request de login de administrador
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom = "validate_email")]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Response de login con el token del panel
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: u64,
}
