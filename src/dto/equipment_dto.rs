use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::equipment::Equipment;
use crate::utils::validation::validate_code_items;

// Request para registrar un equipo en un buque
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEquipmentRequest {
    #[validate(required, length(min = 1, max = 8))]
    pub vessel_code: Option<String>,

    #[validate(required, length(min = 1, max = 8))]
    pub code: Option<String>,

    #[validate(required, length(min = 1, max = 256))]
    pub name: Option<String>,

    #[validate(required, length(min = 1, max = 256))]
    pub location: Option<String>,
}

// Request para desactivar equipos por código
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEquipmentStatusRequest {
    #[validate(required, length(min = 1, max = 10000), custom = "validate_code_items")]
    pub codes: Option<Vec<String>>,
}

// Parámetros para listar los equipos activos de un buque
#[derive(Debug, Deserialize, Validate)]
pub struct ActiveEquipmentQuery {
    #[validate(required, length(min = 1, max = 8))]
    pub vessel_code: Option<String>,
}

// Response de equipo
#[derive(Debug, Serialize, PartialEq)]
pub struct EquipmentResponse {
    pub id: i64,
    pub vessel_id: i64,
    pub name: String,
    pub code: String,
    pub location: String,
}

impl From<Equipment> for EquipmentResponse {
    fn from(equipment: Equipment) -> Self {
        Self {
            id: equipment.id,
            vessel_id: equipment.vessel_id,
            name: equipment.name,
            code: equipment.code,
            location: equipment.location,
        }
    }
}
