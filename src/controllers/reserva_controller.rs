use chrono::{Duration, NaiveTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::reserva_dto::{
    CotizacionResponse, CreateReservaRequest, DesglosePrecios, PreviewCotizacionRequest,
    ReservaResponse, TrackingResponse, UpdateEstadoRequest,
};
use crate::dto::ApiResponse;
use crate::models::reserva::{Reserva, ReservaEstado};
use crate::pricing::{resolver_comision, SeleccionMunicipio};
use crate::repositories::hotel_repository::HotelRepository;
use crate::repositories::reserva_repository::{NuevaReserva, ReservaRepository};
use crate::services::cotizacion_service::CotizacionService;
use crate::services::notificacion_service::NotificacionService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct ReservaController {
    reservas: ReservaRepository,
    hoteles: HotelRepository,
    cotizaciones: CotizacionService,
    notificaciones: NotificacionService,
}

impl ReservaController {
    pub fn new(state: &AppState) -> Self {
        Self {
            reservas: ReservaRepository::new(state.pool.clone()),
            hoteles: HotelRepository::new(state.pool.clone()),
            cotizaciones: CotizacionService::new(state.pool.clone()),
            notificaciones: NotificacionService::new(state.notificador.clone()),
        }
    }

    /// Vista previa de cotización: mismo cálculo que la reserva real, sin
    /// persistir nada
    pub async fn preview(
        &self,
        request: PreviewCotizacionRequest,
    ) -> Result<CotizacionResponse, AppError> {
        request.validate()?;

        let fecha = request
            .fecha_servicio
            .unwrap_or_else(|| Utc::now().date_naive());
        let calculada = self
            .cotizaciones
            .cotizar(
                request.hotel_id,
                &request.servicio_codigo,
                fecha,
                request.pasajeros,
                request.vehiculo_id,
                &request.adicionales,
            )
            .await?;

        Ok(CotizacionResponse {
            servicio_codigo: request.servicio_codigo,
            pasajeros: request.pasajeros,
            vehiculo_id: calculada.vehiculo.vehiculo_id,
            desglose: DesglosePrecios {
                precio_vehiculo: calculada.cotizacion.precio_vehiculo,
                lineas: calculada.cotizacion.lineas,
                total: calculada.cotizacion.total,
                comision: calculada.comision,
                precio_final: calculada.precio_final,
                pendiente_cotizacion: calculada.cotizacion.pendiente_cotizacion,
            },
            opciones_mejora: calculada.opciones_mejora,
        })
    }

    pub async fn create(
        &self,
        tipo_servicio: String,
        request: CreateReservaRequest,
    ) -> Result<ApiResponse<ReservaResponse>, AppError> {
        request.validate()?;

        let calculada = self
            .cotizaciones
            .cotizar(
                request.hotel_id,
                &request.servicio_codigo,
                request.fecha_servicio,
                request.pasajeros,
                request.vehiculo_id,
                &request.adicionales,
            )
            .await?;

        if calculada.servicio.tipo_actividad.as_str() != tipo_servicio {
            return Err(AppError::BadRequest(format!(
                "El servicio '{}' no es de tipo '{}'",
                request.servicio_codigo, tipo_servicio
            )));
        }

        let (municipio, municipio_otro) = match &request.adicionales.municipio {
            Some(SeleccionMunicipio::Conocido(nombre)) => (Some(nombre.clone()), None),
            Some(SeleccionMunicipio::Otro(texto)) => (None, Some(texto.clone())),
            None => (None, None),
        };

        let estado = if calculada.cotizacion.pendiente_cotizacion {
            ReservaEstado::PendienteCotizacion
        } else {
            ReservaEstado::CotizadaEsperandoPago
        };

        let nueva = NuevaReserva {
            tipo_servicio,
            servicio_codigo: request.servicio_codigo,
            hotel_id: request.hotel_id,
            codigo_tracking: generar_codigo_tracking(),
            idempotency_key: request.idempotency_key,
            fecha_servicio: request.fecha_servicio,
            hora_servicio: request.hora_servicio,
            pasajeros: request.pasajeros,
            municipio,
            municipio_otro,
            nombre_contacto: request.nombre_contacto,
            email_contacto: request.email_contacto,
            telefono_contacto: request.telefono_contacto,
            asistentes: request.asistentes,
            vehiculo_id: Some(calculada.vehiculo.vehiculo_id),
            precio_vehiculo: calculada.cotizacion.precio_vehiculo,
            total: calculada.cotizacion.total,
            comision: calculada.comision,
            precio_final: calculada.precio_final,
            pendiente_cotizacion: calculada.cotizacion.pendiente_cotizacion,
            estado,
        };

        let (reserva, creada) = self.reservas.create_idempotente(nueva).await?;

        if creada {
            info!(
                "💾 Reserva creada: {} ({}, estado {})",
                reserva.codigo_tracking,
                reserva.servicio_codigo,
                reserva.estado.as_str()
            );
            if reserva.estado == ReservaEstado::CotizadaEsperandoPago {
                if let Err(e) = self.notificaciones.correo_cotizacion(&reserva).await {
                    warn!("⚠️ No se pudo enviar el correo de cotización: {}", e);
                }
            }
        } else {
            info!(
                "🔁 Reenvío de reserva existente: {} (idempotency_key)",
                reserva.codigo_tracking
            );
        }

        let mensaje = if creada {
            "Reserva creada exitosamente"
        } else {
            "La reserva ya estaba registrada"
        };
        Ok(ApiResponse::success_with_message(
            ReservaResponse::from(reserva),
            mensaje.to_string(),
        ))
    }

    pub async fn get_by_id(
        &self,
        tipo_servicio: &str,
        id: Uuid,
    ) -> Result<ReservaResponse, AppError> {
        let reserva = self
            .reservas
            .find_by_id(id)
            .await?
            .filter(|r| r.tipo_servicio == tipo_servicio)
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;
        Ok(ReservaResponse::from(reserva))
    }

    pub async fn list_por_tipo(
        &self,
        tipo_servicio: &str,
    ) -> Result<Vec<ReservaResponse>, AppError> {
        let reservas = self.reservas.list_por_tipo(tipo_servicio).await?;
        Ok(reservas.into_iter().map(ReservaResponse::from).collect())
    }

    /// Estado público por código de tracking, sin datos sensibles
    pub async fn tracking(&self, codigo: &str) -> Result<TrackingResponse, AppError> {
        let reserva = self
            .reservas
            .find_by_codigo_tracking(codigo)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;
        Ok(TrackingResponse::from(reserva))
    }

    /// Transicionar el estado de una reserva desde el panel.
    ///
    /// La máquina de estados valida la transición; las inválidas responden
    /// 409. Cotizar exige un total manual, pagar dispara el correo de
    /// confirmación, cancelar dentro de las 24 horas previas aplica la
    /// tarifa de cancelación del hotel.
    pub async fn update_estado(
        &self,
        request: UpdateEstadoRequest,
    ) -> Result<ApiResponse<ReservaResponse>, AppError> {
        request.validate()?;

        let reserva = self
            .reservas
            .find_by_id(request.reserva_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        if !reserva.estado.puede_transicionar(request.nuevo_estado) {
            return Err(AppError::Conflict(format!(
                "Transición inválida: {} → {}",
                reserva.estado.as_str(),
                request.nuevo_estado.as_str()
            )));
        }

        let actualizada = match request.nuevo_estado {
            ReservaEstado::CotizadaEsperandoPago => {
                let total = request.total_cotizado.ok_or_else(|| {
                    AppError::BadRequest(
                        "total_cotizado es requerido para cotizar la reserva".to_string(),
                    )
                })?;
                let comision = self.comision_para(&reserva, total).await?;
                let precio_final = crate::pricing::precio_final(total, comision);

                let actualizada = self
                    .reservas
                    .update_estado(
                        reserva.id,
                        request.nuevo_estado,
                        Some(total),
                        Some(comision),
                        Some(precio_final),
                        None,
                        None,
                        None,
                    )
                    .await?;

                if let Err(e) = self.notificaciones.correo_cotizacion(&actualizada).await {
                    warn!("⚠️ No se pudo enviar el correo de cotización: {}", e);
                }
                actualizada
            }

            ReservaEstado::Pagada => {
                let actualizada = self
                    .reservas
                    .update_estado(
                        reserva.id,
                        request.nuevo_estado,
                        None,
                        None,
                        None,
                        None,
                        None,
                        None,
                    )
                    .await?;

                if let Err(e) = self
                    .notificaciones
                    .correo_confirmacion_pago(&actualizada)
                    .await
                {
                    warn!("⚠️ No se pudo enviar el correo de confirmación: {}", e);
                }
                actualizada
            }

            ReservaEstado::Asignada => {
                self.reservas
                    .update_estado(
                        reserva.id,
                        request.nuevo_estado,
                        None,
                        None,
                        None,
                        None,
                        request.conductor.clone(),
                        request.vehiculo_id,
                    )
                    .await?
            }

            ReservaEstado::Cancelada => {
                let tarifa = self.tarifa_cancelacion_aplicable(&reserva).await?;
                self.reservas
                    .update_estado(
                        reserva.id,
                        request.nuevo_estado,
                        None,
                        None,
                        None,
                        tarifa,
                        None,
                        None,
                    )
                    .await?
            }

            ReservaEstado::Completada | ReservaEstado::PendienteCotizacion => {
                self.reservas
                    .update_estado(
                        reserva.id,
                        request.nuevo_estado,
                        None,
                        None,
                        None,
                        None,
                        None,
                        None,
                    )
                    .await?
            }
        };

        info!(
            "✅ Reserva {} transicionó a {}",
            actualizada.codigo_tracking,
            actualizada.estado.as_str()
        );

        Ok(ApiResponse::success_with_message(
            ReservaResponse::from(actualizada),
            "Estado actualizado exitosamente".to_string(),
        ))
    }

    /// Comisión para un total cotizado manualmente: mismo orden de búsqueda
    /// que el flujo automático (override fijo, luego porcentaje del hotel)
    async fn comision_para(&self, reserva: &Reserva, total: i64) -> Result<i64, AppError> {
        let Some(hotel_id) = reserva.hotel_id else {
            return Ok(0);
        };
        let Some(hotel) = self.hoteles.find_by_id(hotel_id).await? else {
            return Ok(0);
        };
        let flat = match reserva.vehiculo_id {
            Some(vehiculo_id) => self
                .hoteles
                .find_comision_flat(hotel_id, &reserva.servicio_codigo, vehiculo_id)
                .await?
                .map(|c| c.monto),
            None => None,
        };
        Ok(resolver_comision(flat, hotel.comision_porcentaje, total))
    }

    /// Tarifa de cancelación del hotel, solo si faltan menos de 24 horas
    /// para el servicio
    async fn tarifa_cancelacion_aplicable(
        &self,
        reserva: &Reserva,
    ) -> Result<Option<i64>, AppError> {
        let Some(hotel_id) = reserva.hotel_id else {
            return Ok(None);
        };

        let inicio = reserva
            .fecha_servicio
            .and_time(reserva.hora_servicio.unwrap_or(NaiveTime::MIN));
        if inicio - Utc::now().naive_utc() >= Duration::hours(24) {
            return Ok(None);
        }

        let hotel = self.hoteles.find_by_id(hotel_id).await?;
        Ok(hotel.and_then(|h| h.tarifa_cancelacion))
    }
}

/// Código público de seguimiento: corto, alfanumérico en mayúsculas
fn generar_codigo_tracking() -> String {
    let sufijo: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(|c| (c as char).to_ascii_uppercase())
        .collect();
    format!("MT-{}", sufijo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codigo_tracking_formato() {
        let codigo = generar_codigo_tracking();
        assert!(codigo.starts_with("MT-"));
        assert_eq!(codigo.len(), 11);
        assert!(codigo[3..].chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(!codigo[3..].chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_codigos_tracking_no_se_repiten_trivialmente() {
        let a = generar_codigo_tracking();
        let b = generar_codigo_tracking();
        assert_ne!(a, b);
    }
}
