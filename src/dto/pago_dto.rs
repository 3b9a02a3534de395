//! DTOs de la integración de pagos (Bold)

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request para generar la firma de integridad del widget de pago.
///
/// Si `order_id` corresponde a un código de tracking de reserva existente,
/// el monto se toma del precio final almacenado; `amount` solo se acepta
/// para órdenes sin reserva asociada. Así la firma y el monto del widget
/// derivan de un único valor almacenado.
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateHashRequest {
    #[validate(length(min = 4, max = 64))]
    pub order_id: String,

    pub amount: Option<i64>,

    #[validate(length(equal = 3))]
    pub currency: String,
}

/// Response con la firma de integridad
#[derive(Debug, Serialize)]
pub struct GenerateHashResponse {
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    pub integrity_hash: String,
}
