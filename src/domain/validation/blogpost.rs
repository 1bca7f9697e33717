//! Blog post payload validation.

use serde_json::{Map, Value};

use crate::domain::validation::{
    ValidationError, require_fields, require_non_empty_string, require_string_if_present,
    validate_content_blocks,
};

const REQUIRED: [&str; 7] = ["slug", "id", "title", "content", "date", "author", "tags"];

/// Validates a raw blog post body, reporting the first failing rule.
pub fn validate(data: &Map<String, Value>) -> Result<(), ValidationError> {
    require_fields(data, &REQUIRED)?;

    require_non_empty_string(data, "slug")?;
    require_non_empty_string(data, "id")?;
    require_non_empty_string(data, "title")?;
    require_string_if_present(data, "title_image_url")?;
    require_string_if_present(data, "summary")?;

    let content = data
        .get("content")
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::new("content must be a list"))?;
    validate_content_blocks(content)?;

    require_non_empty_string(data, "date")?;
    require_non_empty_string(data, "author")?;

    let tags = data
        .get("tags")
        .and_then(Value::as_array)
        .ok_or_else(|| ValidationError::new("tags must be a list"))?;
    for (idx, tag) in tags.iter().enumerate() {
        if !tag.is_string() {
            return Err(ValidationError::new(format!(
                "tag at index {idx} must be a string"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Map<String, Value> {
        match json!({
            "slug": "hello-world",
            "id": "1",
            "title": "Hello",
            "content": [{"title": "Intro"}, {"paragraph": "Hi there"}],
            "date": "2024-01-01",
            "author": "Jane",
            "tags": ["tech"]
        }) {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_valid_body_passes() {
        assert!(validate(&valid_body()).is_ok());
    }

    #[test]
    fn test_missing_fields_reported_in_declared_order() {
        let mut body = valid_body();
        body.remove("slug");
        body.remove("author");
        assert_eq!(
            validate(&body).unwrap_err().to_string(),
            "Missing required field: slug"
        );

        let mut body = valid_body();
        body.remove("tags");
        assert_eq!(
            validate(&body).unwrap_err().to_string(),
            "Missing required field: tags"
        );
    }

    #[test]
    fn test_optional_fields_must_be_strings_when_present() {
        let mut body = valid_body();
        body.insert("title_image_url".to_string(), json!(5));
        assert_eq!(
            validate(&body).unwrap_err().to_string(),
            "title_image_url must be a string"
        );

        let mut body = valid_body();
        body.insert("summary".to_string(), json!(["not", "a", "string"]));
        assert_eq!(
            validate(&body).unwrap_err().to_string(),
            "summary must be a string"
        );

        // Empty strings are fine for optionals.
        let mut body = valid_body();
        body.insert("title_image_url".to_string(), json!(""));
        body.insert("summary".to_string(), json!(""));
        assert!(validate(&body).is_ok());
    }

    #[test]
    fn test_content_must_be_a_list() {
        let mut body = valid_body();
        body.insert("content".to_string(), json!("not a list"));
        assert_eq!(
            validate(&body).unwrap_err().to_string(),
            "content must be a list"
        );
    }

    #[test]
    fn test_content_block_errors_pass_through() {
        let mut body = valid_body();
        body.insert("content".to_string(), json!([{"paragraph": "a", "title": "b"}]));
        assert_eq!(
            validate(&body).unwrap_err().to_string(),
            "content item at index 0 must have exactly one field"
        );
    }

    #[test]
    fn test_tags_checked_per_element() {
        let mut body = valid_body();
        body.insert("tags".to_string(), json!("tech"));
        assert_eq!(
            validate(&body).unwrap_err().to_string(),
            "tags must be a list"
        );

        let mut body = valid_body();
        body.insert("tags".to_string(), json!(["tech", 3]));
        assert_eq!(
            validate(&body).unwrap_err().to_string(),
            "tag at index 1 must be a string"
        );
    }

    #[test]
    fn test_blank_scalars_rejected() {
        for field in ["slug", "id", "title", "date", "author"] {
            let mut body = valid_body();
            body.insert(field.to_string(), json!("   "));
            assert_eq!(
                validate(&body).unwrap_err().to_string(),
                format!("{field} must be a non-empty string")
            );
        }
    }
}
