//! Módulo de base de datos
//!
//! Maneja la conexión con PostgreSQL y la clasificación de sus errores.

pub mod connection;
pub mod errors;

pub use connection::DatabaseConnection;
pub use errors::{StoreError, StoreResult};
