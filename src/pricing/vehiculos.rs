//! Resolución de vehículo por cantidad de pasajeros
//!
//! Dada la lista de tarifas de vehículo de un servicio, selecciona la franja
//! que cubre la cantidad de pasajeros, o la franja superior elegida
//! explícitamente por el cliente como mejora.

use serde::Serialize;
use uuid::Uuid;

use super::PricingError;
use crate::models::precio::PrecioVehiculo;
use crate::models::servicio::PrecioVehiculoFallback;

/// Entrada de tarifa de vehículo ya despojada de metadatos de persistencia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntradaVehiculo {
    pub vehiculo_id: Uuid,
    pub pasajeros_min: i32,
    pub pasajeros_max: i32,
    pub precio: i64,
    pub activo: bool,
}

impl From<&PrecioVehiculo> for EntradaVehiculo {
    fn from(p: &PrecioVehiculo) -> Self {
        Self {
            vehiculo_id: p.vehiculo_id,
            pasajeros_min: p.pasajeros_min,
            pasajeros_max: p.pasajeros_max,
            precio: p.precio,
            activo: p.activo,
        }
    }
}

impl From<&PrecioVehiculoFallback> for EntradaVehiculo {
    fn from(p: &PrecioVehiculoFallback) -> Self {
        Self {
            vehiculo_id: p.vehiculo_id,
            pasajeros_min: p.pasajeros_min,
            pasajeros_max: p.pasajeros_max,
            precio: p.precio,
            activo: true,
        }
    }
}

/// Solo las entradas activas con precio configurado son elegibles,
/// ordenadas por franja ascendente.
fn elegibles(entradas: &[EntradaVehiculo]) -> Vec<&EntradaVehiculo> {
    let mut lista: Vec<&EntradaVehiculo> = entradas
        .iter()
        .filter(|e| e.activo && e.precio > 0)
        .collect();
    lista.sort_by_key(|e| (e.pasajeros_min, e.pasajeros_max));
    lista
}

/// Resolver la franja de vehículo para una cantidad de pasajeros.
///
/// Si `seleccion` trae un vehículo elegido explícitamente (mejora), se
/// devuelve esa entrada siempre que sea la franja base o una superior a
/// ella. Si ninguna franja cubre a los pasajeros la resolución falla: el
/// caller debe bloquear el avance, nunca asumir precio 0.
pub fn resolver_vehiculo<'a>(
    pasajeros: i32,
    entradas: &'a [EntradaVehiculo],
    seleccion: Option<Uuid>,
) -> Result<&'a EntradaVehiculo, PricingError> {
    if pasajeros <= 0 {
        return Err(PricingError::PasajerosInvalidos(pasajeros));
    }

    let lista = elegibles(entradas);
    let base = lista
        .iter()
        .find(|e| e.pasajeros_min <= pasajeros && pasajeros <= e.pasajeros_max)
        .copied()
        .ok_or(PricingError::SinVehiculoDisponible { pasajeros })?;

    match seleccion {
        None => Ok(base),
        Some(vehiculo_id) if vehiculo_id == base.vehiculo_id => Ok(base),
        Some(vehiculo_id) => opciones_mejora(base, entradas)
            .into_iter()
            .find(|e| e.vehiculo_id == vehiculo_id)
            .ok_or(PricingError::VehiculoNoElegible(vehiculo_id)),
    }
}

/// Opciones de mejora: toda franja elegible estrictamente superior a la
/// base, en orden ascendente. La franja más baja que cubre a los pasajeros
/// no expone opciones inferiores.
pub fn opciones_mejora<'a>(
    base: &EntradaVehiculo,
    entradas: &'a [EntradaVehiculo],
) -> Vec<&'a EntradaVehiculo> {
    elegibles(entradas)
        .into_iter()
        .filter(|e| e.pasajeros_min > base.pasajeros_min)
        .collect()
}

/// Corregir la cantidad de pasajeros al tope de la franja más alta.
///
/// Es una corrección de entrada para el formulario, no un bypass del
/// lookup: si los pasajeros corregidos siguen sin caer en ninguna franja,
/// `resolver_vehiculo` fallará igual.
pub fn corregir_pasajeros(pasajeros: i32, entradas: &[EntradaVehiculo]) -> i32 {
    let tope = elegibles(entradas)
        .iter()
        .map(|e| e.pasajeros_max)
        .max()
        .unwrap_or(pasajeros);
    pasajeros.min(tope)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entrada(min: i32, max: i32, precio: i64) -> EntradaVehiculo {
        EntradaVehiculo {
            vehiculo_id: Uuid::new_v4(),
            pasajeros_min: min,
            pasajeros_max: max,
            precio,
            activo: true,
        }
    }

    fn tarifas() -> Vec<EntradaVehiculo> {
        vec![
            entrada(1, 3, 120000),
            entrada(4, 6, 180000),
            entrada(7, 12, 250000),
        ]
    }

    #[test]
    fn test_resuelve_dentro_de_cada_franja() {
        let t = tarifas();
        for p in 1..=3 {
            assert_eq!(resolver_vehiculo(p, &t, None).unwrap().precio, 120000);
        }
        for p in 4..=6 {
            assert_eq!(resolver_vehiculo(p, &t, None).unwrap().precio, 180000);
        }
        for p in 7..=12 {
            assert_eq!(resolver_vehiculo(p, &t, None).unwrap().precio, 250000);
        }
    }

    #[test]
    fn test_fuera_de_rango_falla_explicitamente() {
        let t = tarifas();
        assert_eq!(
            resolver_vehiculo(13, &t, None),
            Err(PricingError::SinVehiculoDisponible { pasajeros: 13 })
        );
    }

    #[test]
    fn test_pasajeros_invalidos() {
        let t = tarifas();
        assert_eq!(resolver_vehiculo(0, &t, None), Err(PricingError::PasajerosInvalidos(0)));
        assert_eq!(resolver_vehiculo(-2, &t, None), Err(PricingError::PasajerosInvalidos(-2)));
    }

    #[test]
    fn test_entradas_inactivas_o_sin_precio_no_son_elegibles() {
        let mut t = tarifas();
        t[0].activo = false;
        t[1].precio = 0;
        assert!(resolver_vehiculo(2, &t, None).is_err());
        assert!(resolver_vehiculo(5, &t, None).is_err());
        assert!(resolver_vehiculo(8, &t, None).is_ok());
    }

    #[test]
    fn test_mejora_valida() {
        let t = tarifas();
        let mejora_id = t[2].vehiculo_id;
        let resuelto = resolver_vehiculo(2, &t, Some(mejora_id)).unwrap();
        assert_eq!(resuelto.precio, 250000);
    }

    #[test]
    fn test_mejora_a_franja_inferior_rechazada() {
        let t = tarifas();
        let inferior_id = t[0].vehiculo_id;
        assert_eq!(
            resolver_vehiculo(5, &t, Some(inferior_id)),
            Err(PricingError::VehiculoNoElegible(inferior_id))
        );
    }

    #[test]
    fn test_opciones_mejora_solo_superiores_en_orden() {
        let t = tarifas();
        let base = resolver_vehiculo(2, &t, None).unwrap();
        let opciones = opciones_mejora(base, &t);
        assert_eq!(opciones.len(), 2);
        assert_eq!(opciones[0].pasajeros_min, 4);
        assert_eq!(opciones[1].pasajeros_min, 7);

        let base_alta = resolver_vehiculo(10, &t, None).unwrap();
        assert!(opciones_mejora(base_alta, &t).is_empty());
    }

    #[test]
    fn test_corregir_pasajeros_al_tope() {
        let t = tarifas();
        assert_eq!(corregir_pasajeros(30, &t), 12);
        assert_eq!(corregir_pasajeros(5, &t), 5);
    }
}
