//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la aplicación y su conversión a
//! respuestas HTTP. Todas las respuestas de error tienen la forma
//! `{"message": ...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{error, warn};

use crate::database::StoreError;
use crate::utils::validation::render_validation_errors;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Store(StoreError::UniqueViolation { .. }) => StatusCode::CONFLICT,
            AppError::Store(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Cuerpo del campo `message` de la respuesta
    fn message(&self) -> Value {
        match self {
            AppError::Validation(errors) => render_validation_errors(errors),
            AppError::BadRequest(msg) | AppError::Conflict(msg) => Value::String(msg.clone()),
            // El texto del driver se expone tal cual: es una API interna
            AppError::Store(e) => Value::String(e.detail()),
            AppError::Internal(_) => Value::String("An unexpected error occurred".to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(e) => error!("❌ Error de base de datos: {}", e),
            AppError::Internal(msg) => error!("❌ Error interno: {}", msg),
            other => warn!("⚠️ Solicitud rechazada: {}", other),
        }

        let status = self.status_code();
        let body = json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(message: &str) -> AppError {
    AppError::Conflict(message.to_string())
}
