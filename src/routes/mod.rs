//! Rutas HTTP
//!
//! Cada grupo de rutas se monta bajo su prefijo en `create_router`.

pub mod equipment_routes;
pub mod health_routes;
pub mod operation_order_routes;
pub mod vessel_routes;

use axum::Router;
use crate::state::AppState;

/// Crear el router principal con todos los grupos de rutas
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes::create_health_router())
        .nest("/vessel", vessel_routes::create_vessel_router())
        .nest("/equipment", equipment_routes::create_equipment_router())
        .nest("/operation_order", operation_order_routes::create_operation_order_router())
}
