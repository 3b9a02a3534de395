//! DTOs de administración de hoteles (consumidores)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::hotel::Hotel;
use crate::utils::validation::validate_email;

/// Request para crear un hotel
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHotelRequest {
    #[validate(length(min = 2, max = 200))]
    pub nombre: String,

    #[validate(custom = "validate_email")]
    pub email: String,

    /// Porcentaje de comisión por defecto (0-100)
    pub comision_porcentaje: Decimal,

    pub tarifa_cancelacion: Option<i64>,
}

/// Request para actualizar un hotel
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHotelRequest {
    #[validate(length(min = 2, max = 200))]
    pub nombre: Option<String>,

    #[validate(custom = "validate_email")]
    pub email: Option<String>,

    pub comision_porcentaje: Option<Decimal>,
    pub tarifa_cancelacion: Option<i64>,
    pub activo: Option<bool>,
}

/// Request para reemplazar los servicios habilitados de un hotel
#[derive(Debug, Deserialize)]
pub struct UpdateServiciosActivosRequest {
    pub servicios: Vec<String>,
}

/// Response de hotel
#[derive(Debug, Serialize)]
pub struct HotelResponse {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub comision_porcentaje: Decimal,
    pub tarifa_cancelacion: Option<i64>,
    pub activo: bool,
    pub created_at: String,
}

impl From<Hotel> for HotelResponse {
    fn from(h: Hotel) -> Self {
        Self {
            id: h.id,
            nombre: h.nombre,
            email: h.email,
            comision_porcentaje: h.comision_porcentaje,
            tarifa_cancelacion: h.tarifa_cancelacion,
            activo: h.activo,
            created_at: h.created_at.to_rfc3339(),
        }
    }
}

/// Response de servicios habilitados por hotel
#[derive(Debug, Serialize)]
pub struct ServiciosActivosResponse {
    pub hotel_id: Uuid,
    pub servicios: Vec<String>,
}
