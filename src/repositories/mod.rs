pub mod equipment_repository;
pub mod operation_order_repository;
pub mod vessel_repository;
