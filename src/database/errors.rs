//! Errores de la capa de persistencia
//!
//! Los repositorios devuelven `StoreError` para que los controladores
//! decidan el código HTTP sin inspeccionar los errores del driver.

use thiserror::Error;

/// SQLSTATE de PostgreSQL para violación de restricción única
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE de PostgreSQL para violación de clave foránea
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String, message: String },

    #[error("foreign key constraint violated: {constraint}")]
    ForeignKeyViolation { constraint: String, message: String },

    #[error("{0}")]
    Other(sqlx::Error),
}

impl StoreError {
    /// Texto del error tal como lo reporta la base de datos
    pub fn detail(&self) -> String {
        match self {
            StoreError::UniqueViolation { message, .. }
            | StoreError::ForeignKeyViolation { message, .. } => message.clone(),
            StoreError::Other(e) => e.to_string(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            let message = db_err.message().to_string();
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => {
                    return StoreError::UniqueViolation { constraint, message };
                }
                Some(FOREIGN_KEY_VIOLATION) => {
                    return StoreError::ForeignKeyViolation { constraint, message };
                }
                _ => {}
            }
        }
        StoreError::Other(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
