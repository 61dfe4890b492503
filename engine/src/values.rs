//! Form-value decoding at the presentation boundary
//!
//! The presentation shell submits a flat JSON record keyed by parameter
//! id (see [`crate::models::ParamDescriptor`]). These helpers coerce
//! that record into the typed rater inputs. Decoding is total: a
//! missing or malformed entry falls back to the field's declared
//! default, mirroring the never-raises contract of the engine itself.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Numeric field: accepts JSON numbers or numeric strings
pub fn number_field(record: &Map<String, Value>, id: &str, default: f64) -> f64 {
    match record.get(id) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Boolean-like select field: the form submits `"true"`/`"false"` strings
pub fn flag_field(record: &Map<String, Value>, id: &str, default: bool) -> bool {
    match record.get(id) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => match s.as_str() {
            "true" => true,
            "false" => false,
            _ => default,
        },
        _ => default,
    }
}

/// Enum select field, decoded through its serde labels
pub fn select_field<T: DeserializeOwned>(record: &Map<String, Value>, id: &str, default: T) -> T {
    match record.get(id) {
        Some(value) => serde_json::from_value(value.clone()).unwrap_or(default),
        None => default,
    }
}

/// Free-text field
pub fn text_field(record: &Map<String, Value>, id: &str, default: &str) -> String {
    match record.get(id) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}
