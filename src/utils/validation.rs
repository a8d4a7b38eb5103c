//! Utilidades de validación
//!
//! Reglas auxiliares para los DTOs y el formato de los errores de
//! validación que se devuelve al cliente: un objeto campo → lista de
//! mensajes.

use std::collections::BTreeMap;

use num_traits::Zero;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{json, Map, Value};
use validator::{ValidationError, ValidationErrors};

pub const MISSING_FIELD_MESSAGE: &str = "Missing data for required field.";
pub const NON_NEGATIVE_MESSAGE: &str = "Must be greater than or equal to 0.";

/// Código del error que agrupa los elementos inválidos de una lista
const ITEMS_CODE: &str = "items";

/// Longitud admitida de un código de buque o equipo
pub const CODE_MIN_LEN: usize = 1;
pub const CODE_MAX_LEN: usize = 8;

pub fn length_message(min: u64, max: u64) -> String {
    format!("Length must be between {} and {}.", min, max)
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar cada código de una lista; los índices inválidos se reportan juntos
pub fn validate_code_items(codes: &[String]) -> Result<(), ValidationError> {
    let invalid: Vec<usize> = codes
        .iter()
        .enumerate()
        .filter(|(_, code)| validate_length(code, CODE_MIN_LEN, CODE_MAX_LEN).is_err())
        .map(|(index, _)| index)
        .collect();

    if invalid.is_empty() {
        return Ok(());
    }

    let mut error = ValidationError::new(ITEMS_CODE);
    error.add_param("indices".into(), &invalid);
    error.add_param("min".into(), &CODE_MIN_LEN);
    error.add_param("max".into(), &CODE_MAX_LEN);
    Err(error)
}

pub fn validate_cost(cost: &Decimal) -> Result<(), ValidationError> {
    validate_non_negative(*cost)
}

/// Convertir los errores de `validator` en el objeto que ve el cliente.
///
/// `{"code": ["Length must be between 1 and 8."]}` para campos simples y
/// `{"codes": {"0": ["Length must be between 1 and 8."]}}` para listas.
pub fn render_validation_errors(errors: &ValidationErrors) -> Value {
    let mut rendered: BTreeMap<&str, Value> = BTreeMap::new();

    for (field, field_errors) in errors.field_errors() {
        let mut messages = Vec::new();
        let mut items = Map::new();

        for error in field_errors.iter() {
            if error.code == ITEMS_CODE {
                let text = length_message(param_u64(error, "min"), param_u64(error, "max"));
                let indices = error
                    .params
                    .get("indices")
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default();
                for index in indices {
                    items.insert(index.to_string(), json!([text]));
                }
            } else {
                messages.push(Value::String(error_message(error)));
            }
        }

        let value = if items.is_empty() {
            Value::Array(messages)
        } else {
            Value::Object(items)
        };
        rendered.insert(field, value);
    }

    json!(rendered)
}

fn error_message(error: &ValidationError) -> String {
    match error.code.as_ref() {
        "required" => MISSING_FIELD_MESSAGE.to_string(),
        "length" => length_message(param_u64(error, "min"), param_u64(error, "max")),
        "non_negative" => NON_NEGATIVE_MESSAGE.to_string(),
        _ => error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "Invalid value.".to_string()),
    }
}

fn param_u64(error: &ValidationError, name: &str) -> u64 {
    error.params.get(name).and_then(Value::as_u64).unwrap_or_default()
}
