//! Extractores con validación
//!
//! `ValidatedJson` lee el cuerpo JSON; `ValidatedParams` lee la query
//! string y, si está vacía, acepta también un cuerpo JSON (los clientes
//! existentes envían los parámetros de los GET en el cuerpo).

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Query, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::utils::errors::AppError;

/// Cuerpo JSON deserializado y validado
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Parámetros de consulta deserializados y validados
#[derive(Debug, Clone)]
pub struct ValidatedParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedParams<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let uri = req.uri().clone();
        let has_query = uri.query().is_some_and(|q| !q.is_empty());

        let value: T = if has_query {
            query_params(&uri)?
        } else {
            let body = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            if body.iter().all(u8::is_ascii_whitespace) {
                query_params(&uri)?
            } else {
                serde_json::from_slice(&body)
                    .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?
            }
        };

        value.validate()?;
        Ok(Self(value))
    }
}

fn query_params<T: DeserializeOwned>(uri: &axum::http::Uri) -> Result<T, AppError> {
    let Query(value) = Query::<T>::try_from_uri(uri)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(value)
}
