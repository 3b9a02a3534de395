//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS y de autenticación del panel.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
