//! Modelos de dominio
//!
//! Structs que mapean al schema PostgreSQL.

pub mod hotel;
pub mod precio;
pub mod reserva;
pub mod servicio;
pub mod vehiculo;
