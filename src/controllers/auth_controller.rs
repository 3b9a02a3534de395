use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::ApiResponse;
use crate::repositories::hotel_repository::HotelRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: HotelRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: HotelRepository::new(pool),
            jwt_config: JwtConfig::from(config),
        }
    }

    pub async fn login(
        &self,
        request: LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, AppError> {
        request.validate()?;

        // Mismo mensaje para email inexistente y contraseña incorrecta
        let admin = self
            .repository
            .find_admin_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valida = bcrypt::verify(&request.password, &admin.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verificando contraseña: {}", e)))?;
        if !valida {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(admin.id, &admin.email, &self.jwt_config)?;
        info!("✅ Login de admin: {}", admin.email);

        Ok(ApiResponse::success(LoginResponse {
            token,
            expires_in: self.jwt_config.expiration,
        }))
    }
}
