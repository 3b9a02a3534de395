//! DTOs del flujo de reservas

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::reserva::{Asistente, Reserva, ReservaEstado};
use crate::pricing::{LineaAdicional, SeleccionAdicionales};
use crate::utils::validation::{validate_codigo_servicio, validate_email, validate_phone};

/// Request para crear una reserva.
///
/// `idempotency_key` la emite el servidor al iniciar el flujo de reserva y
/// es obligatoria: reenviar el mismo request devuelve la reserva original
/// en lugar de crear un duplicado.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservaRequest {
    #[validate(length(min = 16, max = 64))]
    pub idempotency_key: String,

    pub hotel_id: Option<Uuid>,

    #[validate(custom = "validate_codigo_servicio")]
    pub servicio_codigo: String,

    pub fecha_servicio: NaiveDate,
    pub hora_servicio: Option<NaiveTime>,

    #[validate(range(min = 1, max = 60))]
    pub pasajeros: i32,

    /// Mejora de vehículo elegida explícitamente
    pub vehiculo_id: Option<Uuid>,

    #[serde(default)]
    pub adicionales: SeleccionAdicionales,

    #[validate(length(min = 2, max = 200))]
    pub nombre_contacto: String,

    #[validate(custom = "validate_email")]
    pub email_contacto: String,

    #[validate(custom = "validate_phone")]
    pub telefono_contacto: String,

    #[serde(default)]
    pub asistentes: Vec<Asistente>,
}

/// Request del panel para transicionar el estado de una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEstadoRequest {
    pub reserva_id: Uuid,
    pub nuevo_estado: ReservaEstado,

    /// Total cotizado manualmente por el admin (solo para
    /// pendiente_cotizacion → cotizada_esperando_pago)
    #[validate(range(min = 1))]
    pub total_cotizado: Option<i64>,

    /// Asignación de conductor/vehículo (solo para pagada → asignada)
    pub conductor: Option<String>,
    pub vehiculo_id: Option<Uuid>,
}

/// Request de vista previa de cotización (booking público y panel)
#[derive(Debug, Deserialize, Validate)]
pub struct PreviewCotizacionRequest {
    pub hotel_id: Option<Uuid>,

    #[validate(custom = "validate_codigo_servicio")]
    pub servicio_codigo: String,

    pub fecha_servicio: Option<NaiveDate>,

    #[validate(range(min = 1, max = 60))]
    pub pasajeros: i32,

    pub vehiculo_id: Option<Uuid>,

    #[serde(default)]
    pub adicionales: SeleccionAdicionales,
}

/// Desglose de precios de una cotización o reserva
#[derive(Debug, Serialize)]
pub struct DesglosePrecios {
    pub precio_vehiculo: i64,
    pub lineas: Vec<LineaAdicional>,
    pub total: i64,
    pub comision: i64,
    pub precio_final: i64,
    pub pendiente_cotizacion: bool,
}

/// Response de vista previa de cotización
#[derive(Debug, Serialize)]
pub struct CotizacionResponse {
    pub servicio_codigo: String,
    pub pasajeros: i32,
    pub vehiculo_id: Uuid,
    pub desglose: DesglosePrecios,
    /// Franjas superiores ofrecidas como mejora
    pub opciones_mejora: Vec<crate::pricing::EntradaVehiculo>,
}

/// Response de reserva completa (panel y confirmación)
#[derive(Debug, Serialize)]
pub struct ReservaResponse {
    pub id: Uuid,
    pub tipo_servicio: String,
    pub servicio_codigo: String,
    pub hotel_id: Option<Uuid>,
    pub codigo_tracking: String,
    pub fecha_servicio: NaiveDate,
    pub hora_servicio: Option<NaiveTime>,
    pub pasajeros: i32,
    pub municipio: Option<String>,
    pub municipio_otro: Option<String>,
    pub nombre_contacto: String,
    pub email_contacto: String,
    pub telefono_contacto: String,
    pub asistentes: Vec<Asistente>,
    pub vehiculo_id: Option<Uuid>,
    pub conductor: Option<String>,
    pub precio_vehiculo: i64,
    pub total: i64,
    pub comision: i64,
    pub precio_final: i64,
    pub pendiente_cotizacion: bool,
    pub estado: ReservaEstado,
    pub created_at: String,
}

impl From<Reserva> for ReservaResponse {
    fn from(r: Reserva) -> Self {
        Self {
            id: r.id,
            tipo_servicio: r.tipo_servicio,
            servicio_codigo: r.servicio_codigo,
            hotel_id: r.hotel_id,
            codigo_tracking: r.codigo_tracking,
            fecha_servicio: r.fecha_servicio,
            hora_servicio: r.hora_servicio,
            pasajeros: r.pasajeros,
            municipio: r.municipio,
            municipio_otro: r.municipio_otro,
            nombre_contacto: r.nombre_contacto,
            email_contacto: r.email_contacto,
            telefono_contacto: r.telefono_contacto,
            asistentes: r.asistentes.0,
            vehiculo_id: r.vehiculo_id,
            conductor: r.conductor,
            precio_vehiculo: r.precio_vehiculo,
            total: r.total,
            comision: r.comision,
            precio_final: r.precio_final,
            pendiente_cotizacion: r.pendiente_cotizacion,
            estado: r.estado,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

/// Response pública de tracking: solo el estado, sin datos de contacto ni
/// desglose de precios
#[derive(Debug, Serialize)]
pub struct TrackingResponse {
    pub codigo_tracking: String,
    pub servicio_codigo: String,
    pub fecha_servicio: NaiveDate,
    pub estado: ReservaEstado,
    pub pendiente_cotizacion: bool,
}

impl From<Reserva> for TrackingResponse {
    fn from(r: Reserva) -> Self {
        Self {
            codigo_tracking: r.codigo_tracking,
            servicio_codigo: r.servicio_codigo,
            fecha_servicio: r.fecha_servicio,
            estado: r.estado,
            pendiente_cotizacion: r.pendiente_cotizacion,
        }
    }
}
