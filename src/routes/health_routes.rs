use axum::{http::StatusCode, routing::get, Router};
use tracing::info;

use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/", get(healthcheck))
}

/// Verificar que el sistema está vivo
async fn healthcheck() -> (StatusCode, &'static str) {
    info!("💓 Health check");
    (StatusCode::OK, "OK")
}
