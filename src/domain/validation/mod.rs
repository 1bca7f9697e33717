//! Request-shape validation for incoming entity payloads.
//!
//! Validation runs over raw `serde_json` values *before* anything is
//! deserialized into a typed entity, so the caller always gets the first
//! failing rule as one precise, human-readable message (field name, index)
//! instead of a serde parse error. Rules are checked in a fixed order:
//! required-field presence first, then per-field type and non-emptiness in
//! declaration order, then content-block structure where the entity has one.
//!
//! All functions here are pure; errors are returned, never panicked.

pub mod blogpost;
pub mod content_blocks;
pub mod experience;
pub mod portfolio;

pub use content_blocks::validate_content_blocks;

use serde_json::{Map, Value};

/// First validation failure, carrying only its message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Checks that every field in `required` is present, in declared order.
pub(crate) fn require_fields(
    data: &Map<String, Value>,
    required: &[&str],
) -> Result<(), ValidationError> {
    for field in required {
        if !data.contains_key(*field) {
            return Err(ValidationError::new(format!(
                "Missing required field: {field}"
            )));
        }
    }
    Ok(())
}

/// Checks that `field` holds a string with at least one non-whitespace character.
pub(crate) fn require_non_empty_string(
    data: &Map<String, Value>,
    field: &str,
) -> Result<(), ValidationError> {
    match data.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new(format!(
            "{field} must be a non-empty string"
        ))),
    }
}

/// Checks that `field`, if present, holds a string (possibly empty).
pub(crate) fn require_string_if_present(
    data: &Map<String, Value>,
    field: &str,
) -> Result<(), ValidationError> {
    match data.get(field) {
        None | Some(Value::String(_)) => Ok(()),
        Some(_) => Err(ValidationError::new(format!("{field} must be a string"))),
    }
}
