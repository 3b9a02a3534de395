//! DTOs de la API
//!
//! Requests y responses serializables, separados de los modelos de
//! persistencia.

pub mod auth_dto;
pub mod catalogo_dto;
pub mod hotel_dto;
pub mod pago_dto;
pub mod precio_dto;
pub mod reserva_dto;
pub mod servicio_dto;
pub mod vehiculo_dto;

use serde::Serialize;

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}
