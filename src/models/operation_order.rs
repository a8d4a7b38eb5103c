//! Modelo de OperationOrder
//!
//! Orden de mantenimiento registrada sobre un equipo. Inmutable una vez creada.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OperationOrder {
    pub id: i64,
    pub equipment_id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub order_type: String,
    pub cost: Decimal,
}

/// Costo promedio de las órdenes de un buque
#[derive(Debug, Clone, FromRow)]
pub struct VesselAverageCost {
    pub vessel_code: String,
    pub average_cost: Decimal,
}
