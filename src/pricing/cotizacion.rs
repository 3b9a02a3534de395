//! Agregación del total de una cotización
//!
//! `total = precio del vehículo + Σ subtotales de adicionales`, con el
//! sentinela de "pendiente de cotización" cuando el municipio es texto
//! libre o algún ítem seleccionado no tiene precio configurado.

use serde::Serialize;

use super::adicionales::LineaAdicional;

/// Cotización agregada de una reserva
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cotizacion {
    pub precio_vehiculo: i64,
    pub lineas: Vec<LineaAdicional>,
    pub total: i64,
    /// true: no hay precio confiable; el total es 0 y la reserva requiere
    /// cotización manual. Nunca debe mostrarse como una reserva de $0.
    pub pendiente_cotizacion: bool,
}

/// Calcular el total de la cotización.
///
/// `municipio_otro` corta el cálculo: para municipios fuera del listado no
/// existe tabla de precios, así que el total es el sentinela 0 con el flag
/// de pendiente encendido, sin importar qué más se haya seleccionado.
pub fn calcular_total(
    precio_vehiculo: i64,
    lineas: Vec<LineaAdicional>,
    municipio_otro: bool,
) -> Cotizacion {
    if municipio_otro {
        return Cotizacion {
            precio_vehiculo,
            lineas,
            total: 0,
            pendiente_cotizacion: true,
        };
    }

    let pendiente = lineas.iter().any(|l| !l.cotizado());
    let total = precio_vehiculo + lineas.iter().map(|l| l.subtotal).sum::<i64>();

    Cotizacion {
        precio_vehiculo,
        lineas,
        total,
        pendiente_cotizacion: pendiente,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linea(concepto: &str, unitario: i64, cantidad: i32) -> LineaAdicional {
        LineaAdicional {
            concepto: concepto.to_string(),
            precio_unitario: unitario,
            cantidad,
            subtotal: unitario * cantidad as i64,
        }
    }

    #[test]
    fn test_total_es_suma_exacta() {
        let lineas = vec![
            linea("paseo_bote:1-15", 250000, 1),
            linea("almuerzo", 45000, 2),
        ];
        let c = calcular_total(300000, lineas, false);
        assert_eq!(c.total, 640000);
        assert!(!c.pendiente_cotizacion);
    }

    #[test]
    fn test_omitir_un_adicional_cambia_el_total() {
        // Regresión: cada línea seleccionada debe aportar al total
        let todas = calcular_total(
            300000,
            vec![linea("paseo_bote:1-15", 250000, 1), linea("almuerzo", 45000, 2)],
            false,
        );
        let sin_almuerzo =
            calcular_total(300000, vec![linea("paseo_bote:1-15", 250000, 1)], false);
        assert_ne!(todas.total, sin_almuerzo.total);
    }

    #[test]
    fn test_municipio_otro_devuelve_sentinela() {
        let lineas = vec![linea("almuerzo", 45000, 4)];
        let c = calcular_total(120000, lineas, true);
        assert_eq!(c.total, 0);
        assert!(c.pendiente_cotizacion);
    }

    #[test]
    fn test_linea_sin_precio_marca_pendiente() {
        let lineas = vec![linea("cuatrimoto", 0, 2)];
        let c = calcular_total(150000, lineas, false);
        assert_eq!(c.total, 150000);
        assert!(c.pendiente_cotizacion);
    }

    #[test]
    fn test_sin_adicionales() {
        let c = calcular_total(120000, vec![], false);
        assert_eq!(c.total, 120000);
        assert!(!c.pendiente_cotizacion);
    }
}
