//! Modelo de Equipment
//!
//! Mapea la tabla `equipments`. Un equipo pertenece a un buque y nunca se
//! borra: se desactiva con `active = false`.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Equipment {
    pub id: i64,
    pub vessel_id: i64,
    pub code: String,
    pub name: String,
    pub location: String,
    pub active: bool,
}
