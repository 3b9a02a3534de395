//! Resolución de adicionales opcionales
//!
//! Lookup puro `(tipo, sub_rango?) → precio unitario` sobre la tabla de
//! adicionales del servicio. Un precio unitario de 0 significa "no
//! cotizado", nunca "gratis": el agregador lo marca como pendiente de
//! cotización.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::precio::{PrecioAdicional, TipoAdicional};
use crate::models::servicio::CampoPersonalizado;

/// Buckets fijos de capacidad para las tablas de precio por municipio.
/// Los límites no son configurables.
const BUCKETS_MUNICIPIO: &[(i32, i32, &str)] = &[
    (1, 3, "1-3"),
    (4, 4, "4"),
    (5, 8, "5-8"),
    (9, 15, "9-15"),
    (16, 18, "16-18"),
    (19, 25, "19-25"),
];

/// Bucket de capacidad para una cantidad de pasajeros, o None si está fuera
/// de todos los buckets.
pub fn bucket_municipio(pasajeros: i32) -> Option<&'static str> {
    BUCKETS_MUNICIPIO
        .iter()
        .find(|(min, max, _)| *min <= pasajeros && pasajeros <= *max)
        .map(|(_, _, etiqueta)| *etiqueta)
}

/// Entrada de la tabla de adicionales de un servicio, despojada de
/// metadatos de persistencia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntradaAdicional {
    pub tipo: TipoAdicional,
    pub sub_rango: Option<String>,
    pub precio: i64,
    pub activo: bool,
}

impl From<&PrecioAdicional> for EntradaAdicional {
    fn from(p: &PrecioAdicional) -> Self {
        Self {
            tipo: p.tipo,
            sub_rango: p.sub_rango.clone(),
            precio: p.precio,
            activo: p.activo,
        }
    }
}

/// Precio unitario configurado para `(tipo, sub_rango?)`.
///
/// Devuelve 0 cuando no hay entrada activa que coincida; el caller debe
/// tratarlo como "pendiente de cotización", no como gratis.
pub fn precio_unitario(
    tabla: &[EntradaAdicional],
    tipo: TipoAdicional,
    sub_rango: Option<&str>,
) -> i64 {
    tabla
        .iter()
        .find(|e| e.activo && e.tipo == tipo && e.sub_rango.as_deref() == sub_rango)
        .map(|e| e.precio)
        .unwrap_or(0)
}

/// Municipio seleccionado en el formulario de reserva
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tipo", content = "valor", rename_all = "snake_case")]
pub enum SeleccionMunicipio {
    /// Municipio del listado, con tabla de precios configurada
    Conocido(String),
    /// Texto libre: no existe tabla de precios, la cotización queda pendiente
    Otro(String),
}

/// Cantidad de un campo personalizado seleccionado
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CantidadCampo {
    pub nombre: String,
    #[serde(default)]
    pub cantidad: i32,
}

/// Adicionales seleccionados en el flujo de reserva.
///
/// Las cantidades negativas se tratan como 0; los valores no numéricos ya
/// fueron rechazados en la deserialización del request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeleccionAdicionales {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paseo_bote: Option<String>,
    #[serde(default)]
    pub almuerzos: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idioma_guia: Option<String>,
    #[serde(default)]
    pub cuatrimotos: i32,
    #[serde(default)]
    pub entradas_parapente: i32,
    #[serde(default)]
    pub campos_personalizados: Vec<CantidadCampo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipio: Option<SeleccionMunicipio>,
}

impl SeleccionAdicionales {
    pub fn municipio_es_otro(&self) -> bool {
        matches!(self.municipio, Some(SeleccionMunicipio::Otro(_)))
    }
}

/// Línea resuelta de un adicional
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineaAdicional {
    pub concepto: String,
    pub precio_unitario: i64,
    pub cantidad: i32,
    pub subtotal: i64,
}

impl LineaAdicional {
    fn nueva(concepto: impl Into<String>, precio_unitario: i64, cantidad: i32) -> Self {
        let cantidad = cantidad.max(0);
        Self {
            concepto: concepto.into(),
            precio_unitario,
            cantidad,
            subtotal: precio_unitario * cantidad as i64,
        }
    }

    /// false significa que el ítem fue seleccionado pero no tiene precio
    /// configurado: la cotización queda pendiente.
    pub fn cotizado(&self) -> bool {
        self.precio_unitario > 0
    }
}

/// Resolver todas las líneas de adicionales de una selección.
///
/// `tabla` son los adicionales configurados del servicio, `campos` las
/// definiciones de campos personalizados de su configuración y
/// `precios_municipios` la tabla municipio → bucket → precio (solo
/// servicios de transporte). El municipio "otro" no produce línea: lo
/// corta el agregador.
pub fn resolver_adicionales(
    seleccion: &SeleccionAdicionales,
    pasajeros: i32,
    tabla: &[EntradaAdicional],
    campos: &[CampoPersonalizado],
    precios_municipios: Option<&HashMap<String, HashMap<String, i64>>>,
) -> Vec<LineaAdicional> {
    let mut lineas = Vec::new();

    if let Some(rango) = &seleccion.paseo_bote {
        let unitario = precio_unitario(tabla, TipoAdicional::PaseoBote, Some(rango));
        lineas.push(LineaAdicional::nueva(format!("paseo_bote:{}", rango), unitario, 1));
    }

    if seleccion.almuerzos > 0 {
        let unitario = precio_unitario(tabla, TipoAdicional::Almuerzo, None);
        lineas.push(LineaAdicional::nueva("almuerzo", unitario, seleccion.almuerzos));
    }

    if let Some(idioma) = &seleccion.idioma_guia {
        let unitario = precio_unitario(tabla, TipoAdicional::Guia, Some(idioma));
        lineas.push(LineaAdicional::nueva(format!("guia:{}", idioma), unitario, 1));
    }

    if seleccion.cuatrimotos > 0 {
        let unitario = precio_unitario(tabla, TipoAdicional::Cuatrimoto, None);
        lineas.push(LineaAdicional::nueva("cuatrimoto", unitario, seleccion.cuatrimotos));
    }

    if seleccion.entradas_parapente > 0 {
        let unitario = precio_unitario(tabla, TipoAdicional::Parapente, None);
        lineas.push(LineaAdicional::nueva(
            "parapente",
            unitario,
            seleccion.entradas_parapente,
        ));
    }

    for campo in &seleccion.campos_personalizados {
        if campo.cantidad <= 0 {
            continue;
        }
        // El precio puede venir de la definición del campo o de la tabla de
        // adicionales; la definición tiene prioridad.
        let definido = campos
            .iter()
            .find(|c| c.nombre == campo.nombre)
            .and_then(|c| c.precio_unitario);
        let unitario = definido.unwrap_or_else(|| {
            precio_unitario(tabla, TipoAdicional::CampoPersonalizado, Some(&campo.nombre))
        });
        lineas.push(LineaAdicional::nueva(
            format!("campo:{}", campo.nombre),
            unitario,
            campo.cantidad,
        ));
    }

    if let Some(SeleccionMunicipio::Conocido(nombre)) = &seleccion.municipio {
        let unitario = bucket_municipio(pasajeros)
            .and_then(|bucket| {
                precios_municipios
                    .and_then(|m| m.get(nombre))
                    .and_then(|buckets| buckets.get(bucket))
            })
            .copied()
            .unwrap_or(0);
        lineas.push(LineaAdicional::nueva(format!("municipio:{}", nombre), unitario, 1));
    }

    lineas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabla() -> Vec<EntradaAdicional> {
        vec![
            EntradaAdicional {
                tipo: TipoAdicional::PaseoBote,
                sub_rango: Some("1-15".to_string()),
                precio: 250000,
                activo: true,
            },
            EntradaAdicional {
                tipo: TipoAdicional::Almuerzo,
                sub_rango: None,
                precio: 45000,
                activo: true,
            },
            EntradaAdicional {
                tipo: TipoAdicional::Guia,
                sub_rango: Some("en".to_string()),
                precio: 200000,
                activo: true,
            },
            EntradaAdicional {
                tipo: TipoAdicional::Guia,
                sub_rango: Some("fr".to_string()),
                precio: 250000,
                activo: false,
            },
        ]
    }

    #[test]
    fn test_bucket_municipio_limites() {
        assert_eq!(bucket_municipio(1), Some("1-3"));
        assert_eq!(bucket_municipio(3), Some("1-3"));
        assert_eq!(bucket_municipio(4), Some("4"));
        assert_eq!(bucket_municipio(5), Some("5-8"));
        assert_eq!(bucket_municipio(8), Some("5-8"));
        assert_eq!(bucket_municipio(9), Some("9-15"));
        assert_eq!(bucket_municipio(15), Some("9-15"));
        assert_eq!(bucket_municipio(16), Some("16-18"));
        assert_eq!(bucket_municipio(18), Some("16-18"));
        assert_eq!(bucket_municipio(19), Some("19-25"));
        assert_eq!(bucket_municipio(25), Some("19-25"));
        assert_eq!(bucket_municipio(26), None);
        assert_eq!(bucket_municipio(0), None);
    }

    #[test]
    fn test_precio_unitario_lookup() {
        let t = tabla();
        assert_eq!(precio_unitario(&t, TipoAdicional::PaseoBote, Some("1-15")), 250000);
        assert_eq!(precio_unitario(&t, TipoAdicional::Almuerzo, None), 45000);
        assert_eq!(precio_unitario(&t, TipoAdicional::Guia, Some("en")), 200000);
    }

    #[test]
    fn test_precio_unitario_sin_entrada_es_cero() {
        let t = tabla();
        // Sub-rango inexistente y entrada inactiva: ambos 0 = no cotizado
        assert_eq!(precio_unitario(&t, TipoAdicional::PaseoBote, Some("16-30")), 0);
        assert_eq!(precio_unitario(&t, TipoAdicional::Guia, Some("fr")), 0);
        assert_eq!(precio_unitario(&t, TipoAdicional::Cuatrimoto, None), 0);
    }

    #[test]
    fn test_cantidades_multiplican() {
        let seleccion = SeleccionAdicionales {
            almuerzos: 3,
            ..Default::default()
        };
        let lineas = resolver_adicionales(&seleccion, 4, &tabla(), &[], None);
        assert_eq!(lineas.len(), 1);
        assert_eq!(lineas[0].subtotal, 135000);
    }

    #[test]
    fn test_cantidad_negativa_se_trata_como_cero() {
        let linea = LineaAdicional::nueva("almuerzo", 45000, -3);
        assert_eq!(linea.cantidad, 0);
        assert_eq!(linea.subtotal, 0);
    }

    #[test]
    fn test_linea_sin_precio_no_esta_cotizada() {
        let seleccion = SeleccionAdicionales {
            cuatrimotos: 2,
            ..Default::default()
        };
        let lineas = resolver_adicionales(&seleccion, 2, &tabla(), &[], None);
        assert_eq!(lineas[0].subtotal, 0);
        assert!(!lineas[0].cotizado());
    }

    #[test]
    fn test_campo_personalizado_con_precio_propio() {
        let campos = vec![CampoPersonalizado {
            nombre: "cuatrimotos".to_string(),
            etiqueta_es: "Cuatrimotos".to_string(),
            etiqueta_en: "ATVs".to_string(),
            precio_unitario: Some(300000),
        }];
        let seleccion = SeleccionAdicionales {
            campos_personalizados: vec![CantidadCampo {
                nombre: "cuatrimotos".to_string(),
                cantidad: 3,
            }],
            ..Default::default()
        };
        let lineas = resolver_adicionales(&seleccion, 3, &[], &campos, None);
        assert_eq!(lineas[0].subtotal, 900000);
    }

    #[test]
    fn test_municipio_conocido_usa_bucket() {
        let mut buckets = HashMap::new();
        buckets.insert("5-8".to_string(), 110000i64);
        let mut precios = HashMap::new();
        precios.insert("guatape".to_string(), buckets);

        let seleccion = SeleccionAdicionales {
            municipio: Some(SeleccionMunicipio::Conocido("guatape".to_string())),
            ..Default::default()
        };
        let lineas = resolver_adicionales(&seleccion, 6, &[], &[], Some(&precios));
        assert_eq!(lineas[0].subtotal, 110000);

        // Bucket sin precio configurado → 0 (pendiente)
        let lineas = resolver_adicionales(&seleccion, 20, &[], &[], Some(&precios));
        assert_eq!(lineas[0].subtotal, 0);
        assert!(!lineas[0].cotizado());
    }
}
