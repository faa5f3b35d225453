//! The product record and its validation boundary.
//!
//! Inbound payloads arrive as untyped JSON. `Product::from_json` is the only way an
//! inbound payload becomes a typed record: every field must be present and coercible
//! to its declared type, otherwise a `ValidationError` lists each offending field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;
use utoipa::ToSchema;

pub const FIELD_ID: &str = "id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_QUANTITY: &str = "quantity";

/// A single product as exchanged over the API and stored in the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

/// One field that failed to validate.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub expected: String,
    pub got: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid product payload: {}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl Product {
    /// Validates an untyped payload and produces a typed record.
    ///
    /// Integer fields accept JSON integers, integral floats (`5.0`) and numeric strings
    /// (`"5"`); values outside the `i32` range are rejected. `price` accepts any JSON
    /// number or a string holding a finite float. Text fields accept strings only.
    /// Unknown extra fields are ignored.
    pub fn from_json(payload: &JsonValue) -> Result<Self, ValidationError> {
        let obj = match payload.as_object() {
            Some(o) => o,
            None => {
                return Err(ValidationError {
                    errors: vec![FieldError {
                        field: "<record>".to_string(),
                        expected: "object".to_string(),
                        got: json_kind(payload).to_string(),
                        message: "payload must be a JSON object".to_string(),
                    }],
                })
            }
        };

        let mut errors = Vec::new();
        let id = take(obj, FIELD_ID, "int", coerce_int, &mut errors);
        let name = take(obj, FIELD_NAME, "string", coerce_text, &mut errors);
        let description = take(obj, FIELD_DESCRIPTION, "string", coerce_text, &mut errors);
        let price = take(obj, FIELD_PRICE, "float", coerce_float, &mut errors);
        let quantity = take(obj, FIELD_QUANTITY, "int", coerce_int, &mut errors);

        match (id, name, description, price, quantity) {
            (Some(id), Some(name), Some(description), Some(price), Some(quantity))
                if errors.is_empty() =>
            {
                Ok(Product {
                    id,
                    name,
                    description,
                    price,
                    quantity,
                })
            }
            _ => Err(ValidationError { errors }),
        }
    }
}

fn take<T>(
    obj: &Map<String, JsonValue>,
    field: &str,
    expected: &str,
    coerce: fn(&JsonValue) -> Result<T, String>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let Some(value) = obj.get(field) else {
        errors.push(FieldError {
            field: field.to_string(),
            expected: expected.to_string(),
            got: "missing".to_string(),
            message: "field required".to_string(),
        });
        return None;
    };
    match coerce(value) {
        Ok(v) => Some(v),
        Err(message) => {
            errors.push(FieldError {
                field: field.to_string(),
                expected: expected.to_string(),
                got: json_kind(value).to_string(),
                message,
            });
            None
        }
    }
}

fn json_kind(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn int_in_range(n: i64) -> Result<i32, String> {
    i32::try_from(n).map_err(|_| format!("out of range for int: {}", n))
}

fn coerce_int(v: &JsonValue) -> Result<i32, String> {
    if let Some(n) = v.as_i64() {
        return int_in_range(n);
    }
    if v.is_u64() {
        return Err("out of range for int".to_string());
    }
    if let Some(f) = v.as_f64() {
        if f.fract() != 0.0 {
            return Err("expected int, got a fractional number".to_string());
        }
        if f < i32::MIN as f64 || f > i32::MAX as f64 {
            return Err(format!("out of range for int: {}", f));
        }
        return Ok(f as i32);
    }
    if let Some(s) = v.as_str() {
        let parsed = s
            .trim()
            .parse::<i64>()
            .map_err(|_| "expected int".to_string())?;
        return int_in_range(parsed);
    }
    Err("expected int".to_string())
}

fn coerce_float(v: &JsonValue) -> Result<f64, String> {
    if let Some(f) = v.as_f64() {
        return Ok(f);
    }
    if let Some(s) = v.as_str() {
        return match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(f),
            _ => Err("expected float".to_string()),
        };
    }
    Err("expected float".to_string())
}

fn coerce_text(v: &JsonValue) -> Result<String, String> {
    v.as_str()
        .map(str::to_string)
        .ok_or_else(|| "expected string".to_string())
}
