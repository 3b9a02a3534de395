//! Controllers
//!
//! Orquestación de negocio por agregado; los handlers de `routes/` delegan
//! acá.

pub mod auth_controller;
pub mod catalogo_controller;
pub mod hotel_controller;
pub mod pago_controller;
pub mod precio_controller;
pub mod reserva_controller;
pub mod servicio_controller;
pub mod vehiculo_controller;
