//! Modelo de Reserva
//!
//! Registro transaccional de una reserva con su desglose de precios y la
//! máquina de estados del ciclo de vida.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de la reserva - mapea al ENUM reserva_estado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reserva_estado", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReservaEstado {
    PendienteCotizacion,
    CotizadaEsperandoPago,
    Pagada,
    Asignada,
    Completada,
    Cancelada,
}

impl ReservaEstado {
    /// Los estados terminales no admiten más transiciones
    pub fn es_terminal(&self) -> bool {
        matches!(self, ReservaEstado::Completada | ReservaEstado::Cancelada)
    }

    /// Verificar si la transición al estado destino es válida.
    ///
    /// Ciclo: pendiente_cotizacion → cotizada_esperando_pago → pagada →
    /// asignada → completada. `cancelada` es alcanzable desde cualquier
    /// estado no terminal.
    pub fn puede_transicionar(&self, destino: ReservaEstado) -> bool {
        use ReservaEstado::*;
        if destino == Cancelada {
            return !self.es_terminal();
        }
        matches!(
            (self, destino),
            (PendienteCotizacion, CotizadaEsperandoPago)
                | (CotizadaEsperandoPago, Pagada)
                | (Pagada, Asignada)
                | (Asignada, Completada)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReservaEstado::PendienteCotizacion => "pendiente_cotizacion",
            ReservaEstado::CotizadaEsperandoPago => "cotizada_esperando_pago",
            ReservaEstado::Pagada => "pagada",
            ReservaEstado::Asignada => "asignada",
            ReservaEstado::Completada => "completada",
            ReservaEstado::Cancelada => "cancelada",
        }
    }
}

/// Asistente de una reserva (se persiste como JSONB)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asistente {
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documento: Option<String>,
}

/// Reserva principal - mapea a la tabla reservas.
///
/// Una sola tabla para todas las clases de servicio; `tipo_servicio`
/// discrimina lo que antes eran tablas paralelas.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reserva {
    pub id: Uuid,
    pub tipo_servicio: String,
    pub servicio_codigo: String,
    pub hotel_id: Option<Uuid>,
    pub codigo_tracking: String,
    pub idempotency_key: String,
    pub fecha_servicio: NaiveDate,
    pub hora_servicio: Option<NaiveTime>,
    pub pasajeros: i32,
    pub municipio: Option<String>,
    pub municipio_otro: Option<String>,
    pub nombre_contacto: String,
    pub email_contacto: String,
    pub telefono_contacto: String,
    pub asistentes: sqlx::types::Json<Vec<Asistente>>,
    pub vehiculo_id: Option<Uuid>,
    pub conductor: Option<String>,
    // Desglose de precios (COP enteros)
    pub precio_vehiculo: i64,
    pub total: i64,
    pub comision: i64,
    pub precio_final: i64,
    pub pendiente_cotizacion: bool,
    pub tarifa_cancelacion: Option<i64>,
    pub estado: ReservaEstado,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ReservaEstado::*;

    #[test]
    fn test_ciclo_feliz() {
        assert!(PendienteCotizacion.puede_transicionar(CotizadaEsperandoPago));
        assert!(CotizadaEsperandoPago.puede_transicionar(Pagada));
        assert!(Pagada.puede_transicionar(Asignada));
        assert!(Asignada.puede_transicionar(Completada));
    }

    #[test]
    fn test_no_se_salta_estados() {
        assert!(!PendienteCotizacion.puede_transicionar(Pagada));
        assert!(!CotizadaEsperandoPago.puede_transicionar(Asignada));
        assert!(!Pagada.puede_transicionar(Completada));
        assert!(!Completada.puede_transicionar(Asignada));
    }

    #[test]
    fn test_cancelacion_desde_no_terminales() {
        assert!(PendienteCotizacion.puede_transicionar(Cancelada));
        assert!(CotizadaEsperandoPago.puede_transicionar(Cancelada));
        assert!(Pagada.puede_transicionar(Cancelada));
        assert!(Asignada.puede_transicionar(Cancelada));
    }

    #[test]
    fn test_terminales_no_transicionan() {
        assert!(!Completada.puede_transicionar(Cancelada));
        assert!(!Cancelada.puede_transicionar(Cancelada));
        assert!(!Cancelada.puede_transicionar(Pagada));
    }
}
