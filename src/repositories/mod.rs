//! Repositorios
//!
//! Acceso a datos con sqlx, un repositorio por agregado.

pub mod hotel_repository;
pub mod precio_repository;
pub mod reserva_repository;
pub mod servicio_repository;
pub mod vehiculo_repository;
