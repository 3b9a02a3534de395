//! Routes
//!
//! Routers axum por agregado, anidados en `main.rs`. Los routers de
//! administración reciben el middleware de auth al anidarse.

pub mod auth_routes;
pub mod catalogo_routes;
pub mod cotizacion_routes;
pub mod hotel_routes;
pub mod pago_routes;
pub mod precio_routes;
pub mod reserva_routes;
pub mod servicio_routes;
pub mod vehiculo_routes;
