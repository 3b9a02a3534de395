//! Resolución de comisión de consumidor
//!
//! Orden de búsqueda: (1) override fijo por (hotel, servicio, vehículo) si
//! existe y es > 0, usado tal cual; (2) porcentaje por defecto del hotel
//! aplicado al total.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Comisión en COP para un total dado.
///
/// `flat` es el override fijo ya buscado por el caller para la combinación
/// (hotel, servicio, vehículo); un valor ≤ 0 no cuenta como override.
pub fn resolver_comision(flat: Option<i64>, porcentaje: Decimal, total: i64) -> i64 {
    match flat {
        Some(monto) if monto > 0 => monto,
        _ => (Decimal::from(total) * porcentaje / Decimal::from(100))
            .round()
            .to_i64()
            .unwrap_or(0),
    }
}

/// Precio final tras descontar la comisión, acotado a 0 cuando la comisión
/// fija supera el total.
pub fn precio_final(total: i64, comision: i64) -> i64 {
    (total - comision).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_fijo_se_usa_tal_cual() {
        assert_eq!(resolver_comision(Some(50000), Decimal::from(10), 640000), 50000);
    }

    #[test]
    fn test_override_cero_o_negativo_cae_al_porcentaje() {
        assert_eq!(resolver_comision(Some(0), Decimal::from(10), 640000), 64000);
        assert_eq!(resolver_comision(Some(-100), Decimal::from(10), 640000), 64000);
    }

    #[test]
    fn test_porcentaje_por_defecto() {
        assert_eq!(resolver_comision(None, Decimal::from(10), 640000), 64000);
        assert_eq!(resolver_comision(None, Decimal::ZERO, 640000), 0);
    }

    #[test]
    fn test_porcentaje_fraccionario_redondea() {
        // 12.5% de 99999 = 12499.875 → 12500
        let pct = Decimal::new(125, 1);
        assert_eq!(resolver_comision(None, pct, 99999), 12500);
    }

    #[test]
    fn test_precio_final_nunca_negativo() {
        assert_eq!(precio_final(640000, 64000), 576000);
        // Override fijo mayor al total: acotado a 0, no negativo
        assert_eq!(precio_final(100000, 150000), 0);
        assert_eq!(precio_final(0, 0), 0);
    }
}
