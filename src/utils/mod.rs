//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores, la validación de entradas
//! y los extractores de Axum que las aplican.

pub mod errors;
pub mod extract;
pub mod validation;
