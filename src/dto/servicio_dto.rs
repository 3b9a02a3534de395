//! DTOs de administración de servicios

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::servicio::{ConfiguracionServicio, Servicio, TipoActividad};
use crate::utils::validation::validate_codigo_servicio;

/// Request para crear un servicio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServicioRequest {
    #[validate(custom = "validate_codigo_servicio")]
    pub codigo: String,

    #[validate(length(min = 2, max = 200))]
    pub nombre_es: String,

    #[validate(length(min = 2, max = 200))]
    pub nombre_en: String,

    pub descripcion_es: Option<String>,
    pub descripcion_en: Option<String>,

    pub tipo_actividad: TipoActividad,

    pub configuracion: ConfiguracionServicio,
}

/// Request para actualizar un servicio existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServicioRequest {
    #[validate(length(min = 2, max = 200))]
    pub nombre_es: Option<String>,

    #[validate(length(min = 2, max = 200))]
    pub nombre_en: Option<String>,

    pub descripcion_es: Option<String>,
    pub descripcion_en: Option<String>,

    pub activo: Option<bool>,

    pub configuracion: Option<ConfiguracionServicio>,
}

/// Response de servicio para el panel
#[derive(Debug, Serialize)]
pub struct ServicioResponse {
    pub id: Uuid,
    pub codigo: String,
    pub nombre_es: String,
    pub nombre_en: String,
    pub descripcion_es: Option<String>,
    pub descripcion_en: Option<String>,
    pub tipo_actividad: TipoActividad,
    pub activo: bool,
    pub configuracion: ConfiguracionServicio,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Servicio> for ServicioResponse {
    fn from(s: Servicio) -> Self {
        Self {
            id: s.id,
            codigo: s.codigo,
            nombre_es: s.nombre_es,
            nombre_en: s.nombre_en,
            descripcion_es: s.descripcion_es,
            descripcion_en: s.descripcion_en,
            tipo_actividad: s.tipo_actividad,
            activo: s.activo,
            configuracion: s.configuracion.0,
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.to_rfc3339(),
        }
    }
}
