//! Modelo de Hotel (consumidor)
//!
//! Contexto de tenant opcional: cambia la comisión y la visibilidad de
//! servicios sin alterar el catálogo subyacente.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Hotel principal - mapea a la tabla hoteles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hotel {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    /// Porcentaje de comisión por defecto (p. ej. 10.0 = 10%)
    pub comision_porcentaje: Decimal,
    /// Tarifa fija por cancelar con menos de 24 horas de antelación
    pub tarifa_cancelacion: Option<i64>,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}

/// Override de comisión fija para (hotel, servicio, vehículo) -
/// mapea a la tabla comisiones_flat
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ComisionFlat {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub servicio_codigo: String,
    pub vehiculo_id: Uuid,
    pub monto: i64,
}

/// Administrador del panel - mapea a la tabla admins
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
