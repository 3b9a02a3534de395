//! DTOs de administración de vehículos

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehiculo::Vehiculo;

/// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehiculoRequest {
    #[validate(length(min = 2, max = 100))]
    pub nombre: String,

    #[validate(range(min = 1, max = 60))]
    pub capacidad_min: i32,

    #[validate(range(min = 1, max = 60))]
    pub capacidad_max: i32,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehiculoRequest {
    #[validate(length(min = 2, max = 100))]
    pub nombre: Option<String>,

    #[validate(range(min = 1, max = 60))]
    pub capacidad_min: Option<i32>,

    #[validate(range(min = 1, max = 60))]
    pub capacidad_max: Option<i32>,

    pub activo: Option<bool>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehiculoResponse {
    pub id: Uuid,
    pub nombre: String,
    pub capacidad_min: i32,
    pub capacidad_max: i32,
    pub activo: bool,
    pub created_at: String,
}

impl From<Vehiculo> for VehiculoResponse {
    fn from(v: Vehiculo) -> Self {
        Self {
            id: v.id,
            nombre: v.nombre,
            capacidad_min: v.capacidad_min,
            capacidad_max: v.capacidad_max,
            activo: v.activo,
            created_at: v.created_at.to_rfc3339(),
        }
    }
}
