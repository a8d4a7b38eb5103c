use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_cost;

/// Decimales que se conservan del costo
pub const COST_SCALE: u32 = 2;

// Request para registrar una orden de operación
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOperationOrderRequest {
    #[validate(required, length(min = 1, max = 8))]
    pub code: Option<String>,

    #[serde(rename = "type")]
    #[validate(required, length(min = 1, max = 64))]
    pub order_type: Option<String>,

    #[validate(required, custom = "validate_cost")]
    pub cost: Option<Decimal>,
}

// Parámetros de búsqueda para el costo total: por código o por nombre
#[derive(Debug, Deserialize, Validate)]
pub struct TotalCostQuery {
    #[validate(length(min = 1, max = 8))]
    pub code: Option<String>,

    #[validate(length(min = 1, max = 256))]
    pub name: Option<String>,
}

// Response del costo total
#[derive(Debug, Serialize)]
pub struct TotalCostResponse {
    pub total_cost: f64,
}

/// Redondear el costo a centavos (redondeo bancario)
pub fn quantize_cost(cost: Decimal) -> Decimal {
    cost.round_dp(COST_SCALE)
}
