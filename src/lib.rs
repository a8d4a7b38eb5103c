//! Servicio de mantenimiento de buques
//!
//! API HTTP para registrar buques, sus equipos y las órdenes de operación
//! sobre esos equipos, con estadísticas de costos.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use middleware::cors_middleware;
use state::AppState;

/// Construir la aplicación completa con sus capas de middleware
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);
    let timeout = TimeoutLayer::new(state.config.request_timeout());

    routes::create_router()
        .layer(timeout)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
