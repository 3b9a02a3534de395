//! Modelo de Vehiculo
//!
//! Vehículos del catálogo maestro, referenciados por las entradas de precio.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vehículo principal - mapea a la tabla vehiculos
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehiculo {
    pub id: Uuid,
    pub nombre: String,
    pub capacidad_min: i32,
    pub capacidad_max: i32,
    pub activo: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
