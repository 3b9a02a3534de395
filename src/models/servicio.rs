//! Modelo de Servicio
//!
//! Este módulo contiene el struct Servicio (catálogo maestro de tours y
//! transportes) y su configuración tipada por clase de servicio.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;
use uuid::Uuid;

/// Clase de servicio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tipo_actividad", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TipoActividad {
    Transporte,
    Tour,
}

impl TipoActividad {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoActividad::Transporte => "transporte",
            TipoActividad::Tour => "tour",
        }
    }
}

/// Definición de un campo personalizado de un tour (p. ej. "cuatrimotos",
/// "entradas parapente"). Si `precio_unitario` es None el campo es solo
/// informativo y no aporta al total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampoPersonalizado {
    pub nombre: String,
    pub etiqueta_es: String,
    pub etiqueta_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precio_unitario: Option<i64>,
}

/// Entrada de precio de vehículo embebida en la configuración, para
/// servicios que todavía no migraron a la tabla relacional de precios.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrecioVehiculoFallback {
    pub vehiculo_id: Uuid,
    pub pasajeros_min: i32,
    pub pasajeros_max: i32,
    pub precio: i64,
}

/// Configuración tipada por clase de servicio.
///
/// Cada variante declara exactamente los campos que su clase de servicio
/// usa y serde la valida al cargar. Se persiste como JSONB con tag `tipo`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "tipo", rename_all = "snake_case")]
pub enum ConfiguracionServicio {
    Transporte {
        #[serde(default)]
        incluye: Vec<String>,
        #[serde(default)]
        no_incluye: Vec<String>,
        /// municipio → (bucket de capacidad → precio COP)
        #[serde(default)]
        precios_municipios: HashMap<String, HashMap<String, i64>>,
        #[serde(default)]
        precios_vehiculos_fallback: Vec<PrecioVehiculoFallback>,
    },
    Tour {
        #[serde(default)]
        incluye: Vec<String>,
        #[serde(default)]
        no_incluye: Vec<String>,
        #[serde(default)]
        campos_personalizados: Vec<CampoPersonalizado>,
        #[serde(default)]
        precios_vehiculos_fallback: Vec<PrecioVehiculoFallback>,
    },
}

impl ConfiguracionServicio {
    pub fn precios_municipios(&self) -> Option<&HashMap<String, HashMap<String, i64>>> {
        match self {
            ConfiguracionServicio::Transporte { precios_municipios, .. } => {
                Some(precios_municipios)
            }
            ConfiguracionServicio::Tour { .. } => None,
        }
    }

    pub fn campos_personalizados(&self) -> &[CampoPersonalizado] {
        match self {
            ConfiguracionServicio::Tour { campos_personalizados, .. } => campos_personalizados,
            ConfiguracionServicio::Transporte { .. } => &[],
        }
    }

    pub fn precios_vehiculos_fallback(&self) -> &[PrecioVehiculoFallback] {
        match self {
            ConfiguracionServicio::Transporte { precios_vehiculos_fallback, .. }
            | ConfiguracionServicio::Tour { precios_vehiculos_fallback, .. } => {
                precios_vehiculos_fallback
            }
        }
    }
}

/// Servicio principal - mapea a la tabla servicios
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Servicio {
    pub id: Uuid,
    pub codigo: String,
    pub nombre_es: String,
    pub nombre_en: String,
    pub descripcion_es: Option<String>,
    pub descripcion_en: Option<String>,
    pub tipo_actividad: TipoActividad,
    pub activo: bool,
    pub configuracion: sqlx::types::Json<ConfiguracionServicio>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_configuracion_transporte_deserializa() {
        let raw = json!({
            "tipo": "transporte",
            "incluye": ["Peajes", "Gasolina"],
            "precios_municipios": {
                "envigado": { "1-3": 80000, "4": 95000 }
            }
        });

        let config: ConfiguracionServicio = serde_json::from_value(raw).unwrap();
        let precios = config.precios_municipios().unwrap();
        assert_eq!(precios["envigado"]["1-3"], 80000);
        assert!(config.campos_personalizados().is_empty());
    }

    #[test]
    fn test_configuracion_tour_con_campos() {
        let raw = json!({
            "tipo": "tour",
            "campos_personalizados": [
                { "nombre": "cuatrimotos", "etiqueta_es": "Cuatrimotos", "etiqueta_en": "ATVs", "precio_unitario": 300000 }
            ]
        });

        let config: ConfiguracionServicio = serde_json::from_value(raw).unwrap();
        assert_eq!(config.campos_personalizados().len(), 1);
        assert_eq!(config.campos_personalizados()[0].precio_unitario, Some(300000));
        assert!(config.precios_municipios().is_none());
    }

    #[test]
    fn test_configuracion_sin_tag_falla() {
        // Un blob sin tag debe rechazarse, no aceptarse como diccionario
        // arbitrario.
        let raw = json!({ "incluye": ["Peajes"] });
        assert!(serde_json::from_value::<ConfiguracionServicio>(raw).is_err());
    }
}
