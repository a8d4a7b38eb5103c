pub mod common_dto;
pub mod equipment_dto;
pub mod operation_order_dto;
pub mod vessel_dto;
