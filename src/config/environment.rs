//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    pub catalogo_cache_ttl: u64,
    // Bold (pasarela de pagos)
    pub bold_secret_key: String,
    pub bold_min_amount: i64,
    // API HTTP de correo transaccional
    pub mail_api_url: String,
    pub mail_api_key: String,
    pub mail_from: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "86400".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string())
                .collect(),
            catalogo_cache_ttl: env::var("CATALOGO_CACHE_TTL")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .expect("CATALOGO_CACHE_TTL must be a valid number"),
            bold_secret_key: env::var("BOLD_SECRET_KEY").expect("BOLD_SECRET_KEY must be set"),
            // Bold exige mínimo 1000 COP por transacción
            bold_min_amount: env::var("BOLD_MIN_AMOUNT")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .expect("BOLD_MIN_AMOUNT must be a valid number"),
            mail_api_url: env::var("MAIL_API_URL").expect("MAIL_API_URL must be set"),
            mail_api_key: env::var("MAIL_API_KEY").expect("MAIL_API_KEY must be set"),
            mail_from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "reservas@example.com".to_string()),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
