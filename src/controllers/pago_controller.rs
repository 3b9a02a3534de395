use validator::Validate;

use crate::dto::pago_dto::{GenerateHashRequest, GenerateHashResponse};
use crate::repositories::reserva_repository::ReservaRepository;
use crate::services::bold_service::BoldService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct PagoController {
    reservas: ReservaRepository,
    bold: BoldService,
}

impl PagoController {
    pub fn new(state: &AppState) -> Self {
        Self {
            reservas: ReservaRepository::new(state.pool.clone()),
            bold: BoldService::new(&state.config),
        }
    }

    /// Firma de integridad para el widget de Bold.
    ///
    /// Cuando `order_id` corresponde a un código de tracking, el monto sale
    /// del precio final almacenado de esa reserva: el monto firmado y el
    /// monto cobrado no pueden divergir. Un `amount` del cliente solo se
    /// acepta para órdenes sin reserva asociada.
    pub async fn generate_hash(
        &self,
        request: GenerateHashRequest,
    ) -> Result<GenerateHashResponse, AppError> {
        request.validate()?;

        let amount = match self.reservas.find_by_codigo_tracking(&request.order_id).await? {
            Some(reserva) => {
                if reserva.pendiente_cotizacion || reserva.precio_final <= 0 {
                    return Err(AppError::PendienteCotizacion(
                        "La reserva aún no tiene un precio cotizado".to_string(),
                    ));
                }
                if let Some(enviado) = request.amount {
                    if enviado != reserva.precio_final {
                        return Err(AppError::BadRequest(format!(
                            "El monto {} no coincide con el precio de la reserva",
                            enviado
                        )));
                    }
                }
                reserva.precio_final
            }
            None => request.amount.ok_or_else(|| {
                AppError::BadRequest(
                    "amount es requerido para órdenes sin reserva asociada".to_string(),
                )
            })?,
        };

        let integrity_hash =
            self.bold
                .generate_integrity_hash(&request.order_id, amount, &request.currency)?;

        Ok(GenerateHashResponse {
            order_id: request.order_id,
            amount,
            currency: request.currency,
            integrity_hash,
        })
    }
}
