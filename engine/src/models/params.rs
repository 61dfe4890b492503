//! Parameter schema for the presentation layer
//!
//! Each rater publishes an ordered list of declarative field descriptors.
//! The presentation shell renders one input widget per descriptor, keys the
//! submitted record by `id`, and falls back to `default` for anything the
//! user left unset. The engine itself never reads these at rating time;
//! they are the external input contract, nothing more.

use serde::{Deserialize, Serialize};

/// Input widget kind for a rater parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// Free numeric entry, coerced to f64 by the shell
    Number,
    /// One choice from a fixed option list
    Select,
    /// Free text (the engine shorthand field)
    Text,
}

/// Default value carried by a descriptor
///
/// Serialized untagged so the schema JSON reads `"default": 10` for
/// numeric fields and `"default": "none"` for select/text fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamDefault {
    Number(f64),
    Text(String),
}

/// Declarative descriptor for one rater input field
///
/// # Example
/// ```
/// use vehicle_rater_core_rs::ParamDescriptor;
///
/// let field = ParamDescriptor::number("length", "Length", 10.0);
/// assert_eq!(field.id, "length");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    /// Record key the shell submits values under
    pub id: String,

    /// Human-readable form label
    pub label: String,

    /// Widget kind
    #[serde(rename = "type")]
    pub kind: ParamKind,

    /// Option labels, for `Select` fields only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    /// Value assumed when the field is unset or malformed
    pub default: ParamDefault,
}

impl ParamDescriptor {
    /// Numeric field descriptor
    pub fn number(id: &str, label: &str, default: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: ParamKind::Number,
            options: None,
            default: ParamDefault::Number(default),
        }
    }

    /// Select field descriptor with a fixed option list
    pub fn select(id: &str, label: &str, options: &[&str], default: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: ParamKind::Select,
            options: Some(options.iter().map(|o| o.to_string()).collect()),
            default: ParamDefault::Text(default.to_string()),
        }
    }

    /// Boolean-like select rendered as a "true"/"false" choice
    pub fn flag(id: &str, label: &str, default: bool) -> Self {
        Self::select(id, label, &["true", "false"], if default { "true" } else { "false" })
    }

    /// Free-text field descriptor
    pub fn text(id: &str, label: &str, default: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: ParamKind::Text,
            options: None,
            default: ParamDefault::Text(default.to_string()),
        }
    }
}
