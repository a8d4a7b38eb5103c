pub mod equipment_controller;
pub mod operation_order_controller;
pub mod vessel_controller;
