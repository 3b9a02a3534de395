//! Modelos de precios
//!
//! Entradas de precio por vehículo y adicionales opcionales, ambas con flag
//! activo y (para vehículos) ventana de vigencia.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Precio de vehículo para un servicio - mapea a la tabla precios_vehiculos.
///
/// La tabla es única para todas las categorías de servicio; `categoria`
/// discrimina lo que antes eran tablas paralelas.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PrecioVehiculo {
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
    pub created_at: DateTime<Utc>,
}

impl PrecioVehiculo {
    /// Verificar si la entrada está vigente en la fecha dada
    pub fn vigente_en(&self, fecha: NaiveDate) -> bool {
        let desde_ok = self.vigente_desde.map_or(true, |d| d <= fecha);
        let hasta_ok = self.vigente_hasta.map_or(true, |h| fecha <= h);
        desde_ok && hasta_ok
    }
}

/// Tipo de adicional - mapea al ENUM tipo_adicional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tipo_adicional", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TipoAdicional {
    PaseoBote,
    Almuerzo,
    Guia,
    Cuatrimoto,
    Parapente,
    CampoPersonalizado,
}

/// Precio de un adicional opcional - mapea a la tabla precios_adicionales.
///
/// `sub_rango` distingue variantes del mismo tipo: el rango de capacidad del
/// bote ("1-15"), el idioma del guía ("en"), o el nombre del campo
/// personalizado.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PrecioAdicional {
    pub id: Uuid,
    pub servicio_codigo: String,
    pub tipo: TipoAdicional,
    pub sub_rango: Option<String>,
    pub precio: i64,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entrada(desde: Option<&str>, hasta: Option<&str>) -> PrecioVehiculo {
        PrecioVehiculo {
            id: Uuid::new_v4(),
            servicio_codigo: "guatape-tour".to_string(),
            categoria: "tour".to_string(),
            vehiculo_id: Uuid::new_v4(),
            pasajeros_min: 1,
            pasajeros_max: 3,
            precio: 120000,
            activo: true,
            vigente_desde: desde.map(|d| d.parse().unwrap()),
            vigente_hasta: hasta.map(|h| h.parse().unwrap()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_vigente_en_sin_ventana() {
        let e = entrada(None, None);
        assert!(e.vigente_en("2026-01-01".parse().unwrap()));
    }

    #[test]
    fn test_vigente_en_dentro_y_fuera() {
        let e = entrada(Some("2026-01-01"), Some("2026-06-30"));
        assert!(e.vigente_en("2026-03-15".parse().unwrap()));
        assert!(e.vigente_en("2026-01-01".parse().unwrap()));
        assert!(e.vigente_en("2026-06-30".parse().unwrap()));
        assert!(!e.vigente_en("2025-12-31".parse().unwrap()));
        assert!(!e.vigente_en("2026-07-01".parse().unwrap()));
    }
}
