//! Configuración
//!
//! Este módulo contiene la configuración de la aplicación.

pub mod environment;
