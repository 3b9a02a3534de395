//! Servicios
//!
//! Lógica de negocio que cruza repositorios o integra APIs externas.

pub mod bold_service;
pub mod catalogo_service;
pub mod cotizacion_service;
pub mod notificacion_service;

pub use bold_service::BoldService;
pub use catalogo_service::CatalogoService;
pub use cotizacion_service::{CotizacionCalculada, CotizacionService};
pub use notificacion_service::{HttpMailSender, NotificacionService, NotificationSender};
