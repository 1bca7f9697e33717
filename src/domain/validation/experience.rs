//! Experience entry payload validation.

use serde_json::{Map, Value};

use crate::domain::validation::{ValidationError, require_fields, require_non_empty_string};

const REQUIRED: [&str; 7] = [
    "id",
    "title",
    "company_name",
    "image_url",
    "start_month",
    "end_month",
    "description",
];

/// Validates a raw experience body, reporting the first failing rule.
///
/// `end_month` must be present and a string, but may be empty: an empty end
/// month marks a current position.
pub fn validate(data: &Map<String, Value>) -> Result<(), ValidationError> {
    require_fields(data, &REQUIRED)?;

    require_non_empty_string(data, "id")?;
    require_non_empty_string(data, "title")?;
    require_non_empty_string(data, "company_name")?;
    require_non_empty_string(data, "image_url")?;
    require_non_empty_string(data, "start_month")?;

    if !data.get("end_month").is_some_and(Value::is_string) {
        return Err(ValidationError::new("end_month must be a string"));
    }

    require_non_empty_string(data, "description")?;

    Ok(())
}
