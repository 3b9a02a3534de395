//! DTOs de administración de precios

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::precio::{PrecioAdicional, PrecioVehiculo, TipoAdicional};
use crate::utils::validation::validate_codigo_servicio;

/// Request para crear/actualizar un precio de vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertPrecioVehiculoRequest {
    #[validate(custom = "validate_codigo_servicio")]
    pub servicio_codigo: String,

    #[validate(length(min = 2, max = 50))]
    pub categoria: String,

    pub vehiculo_id: Uuid,

    #[validate(range(min = 1, max = 60))]
    pub pasajeros_min: i32,

    #[validate(range(min = 1, max = 60))]
    pub pasajeros_max: i32,

    #[validate(range(min = 1))]
    pub precio: i64,

    pub vigente_desde: Option<NaiveDate>,
    pub vigente_hasta: Option<NaiveDate>,

    #[serde(default = "default_activo")]
    pub activo: bool,
}

fn default_activo() -> bool {
    true
}

/// Request para eliminar un precio de vehículo, por id de precio o por la
/// combinación (servicio, vehículo)
#[derive(Debug, Deserialize)]
pub struct DeletePrecioVehiculoRequest {
    pub precio_id: Option<Uuid>,
    pub servicio_codigo: Option<String>,
    pub vehiculo_id: Option<Uuid>,
}

/// Request para crear/actualizar un precio adicional
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertPrecioAdicionalRequest {
    #[validate(custom = "validate_codigo_servicio")]
    pub servicio_codigo: String,

    pub tipo: TipoAdicional,

    #[validate(length(min = 1, max = 50))]
    pub sub_rango: Option<String>,

    #[validate(range(min = 1))]
    pub precio: i64,

    #[serde(default = "default_activo")]
    pub activo: bool,
}

/// Response de precio de vehículo
#[derive(Debug, Serialize)]
pub struct PrecioVehiculoResponse {
    pub id: Uuid,
    pub servicio_codigo: String,
    pub categoria: String,
    pub vehiculo_id: Uuid,
    pub pasajeros_min: i32,
    pub pasajeros_max: i32,
    pub precio: i64,
    pub activo: bool,
    pub vigente_desde: Option<NaiveDate>,
    pub vigente_hasta: Option<NaiveDate>,
}

impl From<PrecioVehiculo> for PrecioVehiculoResponse {
    fn from(p: PrecioVehiculo) -> Self {
        Self {
            id: p.id,
            servicio_codigo: p.servicio_codigo,
            categoria: p.categoria,
            vehiculo_id: p.vehiculo_id,
            pasajeros_min: p.pasajeros_min,
            pasajeros_max: p.pasajeros_max,
            precio: p.precio,
            activo: p.activo,
            vigente_desde: p.vigente_desde,
            vigente_hasta: p.vigente_hasta,
        }
    }
}

/// Response de precio adicional
#[derive(Debug, Serialize)]
pub struct PrecioAdicionalResponse {
    pub id: Uuid,
    pub servicio_codigo: String,
    pub tipo: TipoAdicional,
    pub sub_rango: Option<String>,
    pub precio: i64,
    pub activo: bool,
}

impl From<PrecioAdicional> for PrecioAdicionalResponse {
    fn from(p: PrecioAdicional) -> Self {
        Self {
            id: p.id,
            servicio_codigo: p.servicio_codigo,
            tipo: p.tipo,
            sub_rango: p.sub_rango,
            precio: p.precio,
            activo: p.activo,
        }
    }
}
