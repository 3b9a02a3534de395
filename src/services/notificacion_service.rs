//! Correos transaccionales
//!
//! Correos de cotización y de confirmación de pago, enviados a través de una
//! API HTTP de correo. El envío queda detrás del trait `NotificationSender`
//! para que los tests usen un sender que no sale a la red. Un correo que
//! falla se registra pero nunca tumba la reserva.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::config::environment::EnvironmentConfig;
use crate::models::reserva::Reserva;
use crate::utils::errors::AppError;

#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), AppError>;
}

/// Sender real contra la API HTTP de correo
pub struct HttpMailSender {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl HttpMailSender {
    pub fn new(client: reqwest::Client, config: &EnvironmentConfig) -> Self {
        Self {
            client,
            api_url: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            from: config.mail_from.clone(),
        }
    }
}

#[async_trait]
impl NotificationSender for HttpMailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), AppError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.from,
                "to": to,
                "subject": subject,
                "html": html,
            }))
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error enviando correo: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "API de correo respondió {}",
                response.status()
            )));
        }

        info!("📧 Correo enviado a {}: {}", to, subject);
        Ok(())
    }
}

/// Sender que descarta los correos, para tests y entornos sin API de correo
pub struct NoopSender;

#[async_trait]
impl NotificationSender for NoopSender {
    async fn send(&self, to: &str, subject: &str, _html: &str) -> Result<(), AppError> {
        info!("📧 (noop) Correo descartado para {}: {}", to, subject);
        Ok(())
    }
}

pub struct NotificacionService {
    sender: Arc<dyn NotificationSender>,
}

impl NotificacionService {
    pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
        Self { sender }
    }

    /// Correo con la cotización, al entrar a `cotizada_esperando_pago`
    pub async fn correo_cotizacion(&self, reserva: &Reserva) -> Result<(), AppError> {
        let subject = format!(
            "Tu cotización está lista / Your quote is ready — {}",
            reserva.codigo_tracking
        );
        let html = format!(
            "<h2>Hola {},</h2>\
             <p>Tu cotización para <strong>{}</strong> el {} está lista.</p>\
             <p>Total: <strong>${} COP</strong></p>\
             <p>Código de seguimiento: <strong>{}</strong></p>\
             <hr>\
             <p>Hi {}, your quote for <strong>{}</strong> on {} is ready. \
             Total: <strong>${} COP</strong>. Tracking code: <strong>{}</strong>.</p>",
            reserva.nombre_contacto,
            reserva.servicio_codigo,
            reserva.fecha_servicio,
            reserva.total,
            reserva.codigo_tracking,
            reserva.nombre_contacto,
            reserva.servicio_codigo,
            reserva.fecha_servicio,
            reserva.total,
            reserva.codigo_tracking,
        );
        self.sender.send(&reserva.email_contacto, &subject, &html).await
    }

    /// Correo de confirmación, al entrar a `pagada`
    pub async fn correo_confirmacion_pago(&self, reserva: &Reserva) -> Result<(), AppError> {
        let subject = format!(
            "Pago confirmado / Payment confirmed — {}",
            reserva.codigo_tracking
        );
        let html = format!(
            "<h2>Hola {},</h2>\
             <p>Recibimos tu pago de <strong>${} COP</strong> para \
             <strong>{}</strong> el {}.</p>\
             <p>Te avisaremos cuando asignemos tu conductor.</p>\
             <hr>\
             <p>Hi {}, we received your payment of <strong>${} COP</strong> for \
             <strong>{}</strong> on {}. We will let you know once your driver \
             is assigned.</p>",
            reserva.nombre_contacto,
            reserva.precio_final,
            reserva.servicio_codigo,
            reserva.fecha_servicio,
            reserva.nombre_contacto,
            reserva.precio_final,
            reserva.servicio_codigo,
            reserva.fecha_servicio,
        );
        self.sender.send(&reserva.email_contacto, &subject, &html).await
    }
}
