//! DTOs del catálogo público
//!
//! Shape de `GET /api/catalogo`: servicios, vehículos y precios agrupados
//! por categoría, más los precios dinámicos por código de servicio. Todo el
//! response es serializable en ambas direcciones porque se cachea en redis
//! como snapshot JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::servicio::{ConfiguracionServicio, Servicio, TipoActividad};
use crate::models::vehiculo::Vehiculo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicioCatalogo {
    pub id: Uuid,
    pub codigo: String,
    pub nombre_es: String,
    pub nombre_en: String,
    pub descripcion_es: Option<String>,
    pub descripcion_en: Option<String>,
    pub tipo_actividad: TipoActividad,
    pub configuracion: ConfiguracionServicio,
}

impl From<Servicio> for ServicioCatalogo {
    fn from(s: Servicio) -> Self {
        Self {
            id: s.id,
            codigo: s.codigo,
            nombre_es: s.nombre_es,
            nombre_en: s.nombre_en,
            descripcion_es: s.descripcion_es,
            descripcion_en: s.descripcion_en,
            tipo_actividad: s.tipo_actividad,
            configuracion: s.configuracion.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehiculoCatalogo {
    pub id: Uuid,
    pub nombre: String,
    pub capacidad_min: i32,
    pub capacidad_max: i32,
}

impl From<Vehiculo> for VehiculoCatalogo {
    fn from(v: Vehiculo) -> Self {
        Self {
            id: v.id,
            nombre: v.nombre,
            capacidad_min: v.capacidad_min,
            capacidad_max: v.capacidad_max,
        }
    }
}

/// Entrada de precio tal como la consume el flujo de reserva
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrecioCatalogo {
    pub servicio_codigo: String,
    pub vehiculo_id: Uuid,
    pub pasajeros_min: i32,
    pub pasajeros_max: i32,
    pub precio: i64,
}

/// Precios agrupados: una lista por categoría de servicio, más `dinamicos`
/// indexados por código de servicio.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PreciosCatalogo {
    #[serde(flatten)]
    pub por_categoria: HashMap<String, Vec<PrecioCatalogo>>,
    pub dinamicos: HashMap<String, Vec<PrecioCatalogo>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogoResponse {
    pub servicios: Vec<ServicioCatalogo>,
    pub vehiculos: Vec<VehiculoCatalogo>,
    pub precios: PreciosCatalogo,
}

#[derive(Debug, Deserialize)]
pub struct CatalogoQuery {
    pub hotel_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_precios_catalogo_shape() {
        let mut por_categoria = HashMap::new();
        por_categoria.insert(
            "transporte".to_string(),
            vec![PrecioCatalogo {
                servicio_codigo: "transporte-aeropuerto".to_string(),
                vehiculo_id: Uuid::nil(),
                pasajeros_min: 1,
                pasajeros_max: 3,
                precio: 120000,
            }],
        );
        let precios = PreciosCatalogo {
            por_categoria,
            dinamicos: HashMap::new(),
        };

        let v = serde_json::to_value(&precios).unwrap();
        // Las categorías van aplanadas al nivel raíz, junto a `dinamicos`
        assert!(v.get("transporte").is_some());
        assert_eq!(v["dinamicos"], json!({}));

        let roundtrip: PreciosCatalogo = serde_json::from_value(v).unwrap();
        assert_eq!(roundtrip.por_categoria["transporte"][0].precio, 120000);
    }
}
