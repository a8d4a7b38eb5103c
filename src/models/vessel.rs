//! Modelo de Vessel
//!
//! Mapea la tabla `vessels`. El código es la clave natural del buque.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vessel {
    pub id: i64,
    pub code: String,
}
