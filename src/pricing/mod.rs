//! Librería de resolución de precios
//!
//! Funciones puras de cálculo de precios - sin acceso a base de datos.
//! Es el único lugar donde se calcula el precio de una reserva: el flujo de
//! reserva público y la vista previa del panel de administración consumen
//! estas mismas funciones, de modo que no pueden divergir.
//!
//! Flujo: catálogo cargado → resolver vehículo + resolver adicionales →
//! agregar total → resolver comisión → precio final.

pub mod adicionales;
pub mod comision;
pub mod cotizacion;
pub mod vehiculos;

pub use adicionales::{
    bucket_municipio, resolver_adicionales, EntradaAdicional, LineaAdicional,
    SeleccionAdicionales, SeleccionMunicipio,
};
pub use comision::{precio_final, resolver_comision};
pub use cotizacion::{calcular_total, Cotizacion};
pub use vehiculos::{
    corregir_pasajeros, opciones_mejora, resolver_vehiculo, EntradaVehiculo,
};

use thiserror::Error;
use uuid::Uuid;

/// Errores de resolución de precios
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("cantidad de pasajeros inválida: {0}")]
    PasajerosInvalidos(i32),

    /// No hay tarifa configurada para esa cantidad de pasajeros. El caller
    /// debe bloquear el avance de la reserva, nunca asumir precio 0.
    #[error("ningún vehículo disponible para {pasajeros} pasajeros")]
    SinVehiculoDisponible { pasajeros: i32 },

    #[error("el vehículo {0} no es elegible para esta selección")]
    VehiculoNoElegible(Uuid),
}

#[cfg(test)]
mod tests {
    //! Casos de extremo a extremo: catálogo completo → precio final.

    use super::*;
    use crate::models::precio::TipoAdicional;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn entrada(min: i32, max: i32, precio: i64) -> EntradaVehiculo {
        EntradaVehiculo {
            vehiculo_id: Uuid::new_v4(),
            pasajeros_min: min,
            pasajeros_max: max,
            precio,
            activo: true,
        }
    }

    fn adicional(tipo: TipoAdicional, sub: Option<&str>, precio: i64) -> EntradaAdicional {
        EntradaAdicional {
            tipo,
            sub_rango: sub.map(|s| s.to_string()),
            precio,
            activo: true,
        }
    }

    #[test]
    fn test_transporte_aeropuerto_cliente_directo() {
        // 3 pasajeros, municipio envigado a 80000, tarifa [1-3] a 120000
        // → total 200000, sin comisión → final 200000
        let tarifas = vec![entrada(1, 3, 120000), entrada(4, 6, 180000)];
        let vehiculo = resolver_vehiculo(3, &tarifas, None).unwrap();
        assert_eq!(vehiculo.precio, 120000);

        let mut precios_municipios = HashMap::new();
        let mut envigado = HashMap::new();
        envigado.insert("1-3".to_string(), 80000i64);
        precios_municipios.insert("envigado".to_string(), envigado);

        let seleccion = SeleccionAdicionales {
            municipio: Some(SeleccionMunicipio::Conocido("envigado".to_string())),
            ..Default::default()
        };
        let lineas = resolver_adicionales(&seleccion, 3, &[], &[], Some(&precios_municipios));
        let cotizacion = calcular_total(vehiculo.precio, lineas, false);
        assert_eq!(cotizacion.total, 200000);
        assert!(!cotizacion.pendiente_cotizacion);

        let comision = resolver_comision(None, Decimal::ZERO, cotizacion.total);
        assert_eq!(comision, 0);
        assert_eq!(precio_final(cotizacion.total, comision), 200000);
    }

    #[test]
    fn test_guatape_tour_con_comision_de_hotel() {
        // Bote "1-15" a 250000, 2 almuerzos a 45000, vehículo a 300000,
        // comisión 10% → total 640000, comisión 64000, final 576000
        let tarifas = vec![entrada(1, 15, 300000)];
        let vehiculo = resolver_vehiculo(8, &tarifas, None).unwrap();

        let tabla = vec![
            adicional(TipoAdicional::PaseoBote, Some("1-15"), 250000),
            adicional(TipoAdicional::Almuerzo, None, 45000),
        ];
        let seleccion = SeleccionAdicionales {
            paseo_bote: Some("1-15".to_string()),
            almuerzos: 2,
            ..Default::default()
        };
        let lineas = resolver_adicionales(&seleccion, 8, &tabla, &[], None);
        let cotizacion = calcular_total(vehiculo.precio, lineas, false);
        assert_eq!(cotizacion.total, 640000);

        let comision = resolver_comision(None, Decimal::from(10), cotizacion.total);
        assert_eq!(comision, 64000);
        assert_eq!(precio_final(cotizacion.total, comision), 576000);
    }

    #[test]
    fn test_tour_cuatrimotos() {
        // 3 cuatrimotos a 300000 c/u, vehículo a 150000 → total 1050000
        let tarifas = vec![entrada(1, 6, 150000)];
        let vehiculo = resolver_vehiculo(3, &tarifas, None).unwrap();

        let tabla = vec![adicional(TipoAdicional::Cuatrimoto, None, 300000)];
        let seleccion = SeleccionAdicionales {
            cuatrimotos: 3,
            ..Default::default()
        };
        let lineas = resolver_adicionales(&seleccion, 3, &tabla, &[], None);
        let cotizacion = calcular_total(vehiculo.precio, lineas, false);
        assert_eq!(cotizacion.total, 1050000);
    }

    #[test]
    fn test_municipio_otro_nunca_produce_total_cero_cobrable() {
        // Texto libre de municipio: sentinela pendiente, aunque haya
        // adicionales seleccionados con precio.
        let tabla = vec![adicional(TipoAdicional::Almuerzo, None, 45000)];
        let seleccion = SeleccionAdicionales {
            almuerzos: 4,
            municipio: Some(SeleccionMunicipio::Otro("San Rafael".to_string())),
            ..Default::default()
        };
        let municipio_otro = seleccion.municipio_es_otro();
        let lineas = resolver_adicionales(&seleccion, 4, &tabla, &[], None);
        let cotizacion = calcular_total(120000, lineas, municipio_otro);

        assert!(cotizacion.pendiente_cotizacion);
        assert_eq!(cotizacion.total, 0);
    }
}
