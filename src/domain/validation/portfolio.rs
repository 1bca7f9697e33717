//! Portfolio item payload validation.

use serde_json::{Map, Value};

use crate::domain::validation::{
    ValidationError, require_fields, require_non_empty_string, validate_content_blocks,
};

const REQUIRED: [&str; 5] = ["id", "slug", "title", "summary", "content"];

/// Validates a raw portfolio body, reporting the first failing rule.
pub fn validate(data: &Map<String, Value>) -> Result<(), ValidationError> {
    require_fields(data, &REQUIRED)?;

    require_non_empty_string(data, "id")?;
    require_non_empty_string(data, "slug")?;
    require_non_empty_string(data, "title")?;
    require_non_empty_string(data, "summary")?;

    let content = data
        .get("content")
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::new("content must be a list"))?;
    validate_content_blocks(content)?;

    Ok(())
}
