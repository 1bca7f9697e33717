//! Structural validation of the polymorphic content-block list.

use serde_json::Value;

use crate::domain::entities::ContentBlock;
use crate::domain::validation::ValidationError;

/// Field names a content block may carry.
const ALLOWED_FIELDS: [&str; 3] = ["paragraph", "image_url", "title"];

/// Validates a raw content list and reconstructs it as typed blocks.
///
/// Every element must be an object with exactly one field, the field name must
/// be one of `paragraph`, `image_url` or `title`, and its value must be a
/// string. Blocks may appear in any order, any number of times, or not at all;
/// an empty list is valid. Order is preserved, nothing is deduplicated.
///
/// The first violation wins and names the offending index (and field, where
/// one exists).
pub fn validate_content_blocks(items: &[Value]) -> Result<Vec<ContentBlock>, ValidationError> {
    let mut blocks = Vec::with_capacity(items.len());

    for (idx, item) in items.iter().enumerate() {
        let obj = item.as_object().ok_or_else(|| {
            ValidationError::new(format!("content item at index {idx} must be an object"))
        })?;

        if obj.len() != 1 {
            return Err(ValidationError::new(format!(
                "content item at index {idx} must have exactly one field"
            )));
        }

        // Exactly one entry; unwrap is fine after the length check.
        let (key, value) = obj.iter().next().expect("object has one entry");

        if !ALLOWED_FIELDS.contains(&key.as_str()) {
            return Err(ValidationError::new(format!(
                "content item at index {idx}: field name '{key}' is not allowed. \
                 Must be one of: paragraph, image_url, or title"
            )));
        }

        let text = value.as_str().ok_or_else(|| {
            ValidationError::new(format!("content item at index {idx}: {key} must be a string"))
        })?;

        blocks.push(match key.as_str() {
            "paragraph" => ContentBlock::Paragraph(text.to_string()),
            "image_url" => ContentBlock::ImageRef(text.to_string()),
            "title" => ContentBlock::Title(text.to_string()),
            _ => unreachable!("key checked against ALLOWED_FIELDS"),
        });
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(value: Value) -> Vec<Value> {
        match value {
            Value::Array(v) => v,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert_eq!(validate_content_blocks(&[]).unwrap(), vec![]);
    }

    #[test]
    fn test_valid_blocks_preserve_order_and_length() {
        let raw = items(json!([
            {"title": "Intro"},
            {"paragraph": "Hi there"},
            {"image_url": "https://example.com/a.png"},
            {"paragraph": "Hi there"}
        ]));

        let blocks = validate_content_blocks(&raw).unwrap();

        assert_eq!(
            blocks,
            vec![
                ContentBlock::Title("Intro".to_string()),
                ContentBlock::Paragraph("Hi there".to_string()),
                ContentBlock::ImageRef("https://example.com/a.png".to_string()),
                ContentBlock::Paragraph("Hi there".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_object_element_names_index() {
        let raw = items(json!([{"paragraph": "ok"}, "just a string"]));
        let err = validate_content_blocks(&raw).unwrap_err();
        assert_eq!(err.to_string(), "content item at index 1 must be an object");
    }

    #[test]
    fn test_two_fields_in_one_block_rejected() {
        let raw = items(json!([{"paragraph": "a", "title": "b"}]));
        let err = validate_content_blocks(&raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "content item at index 0 must have exactly one field"
        );
    }

    #[test]
    fn test_zero_fields_rejected() {
        let raw = items(json!([{}]));
        let err = validate_content_blocks(&raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "content item at index 0 must have exactly one field"
        );
    }

    #[test]
    fn test_unknown_field_name_names_key_and_index() {
        let raw = items(json!([{"paragraph": "ok"}, {"video_url": "x"}]));
        let err = validate_content_blocks(&raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "content item at index 1: field name 'video_url' is not allowed. \
             Must be one of: paragraph, image_url, or title"
        );
    }

    #[test]
    fn test_non_string_value_rejected() {
        let raw = items(json!([{"paragraph": 42}]));
        let err = validate_content_blocks(&raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "content item at index 0: paragraph must be a string"
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // Index 1 has two fields, index 2 has a bad name; only index 1 is reported.
        let raw = items(json!([
            {"title": "ok"},
            {"paragraph": "a", "title": "b"},
            {"video_url": "x"}
        ]));
        let err = validate_content_blocks(&raw).unwrap_err();
        assert_eq!(
            err.to_string(),
            "content item at index 1 must have exactly one field"
        );
    }
}
