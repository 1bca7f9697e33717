//! Dynamic partial-update expression construction.
//!
//! DynamoDB update expressions cannot embed attribute names directly (many
//! words are reserved), so every field goes through `#name`/`:name`
//! placeholders. Placeholder identifiers additionally may not contain
//! hyphens, hence [`sanitize_placeholder`].

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::infrastructure::persistence::attrs::to_attr;

/// Maps an attribute name to a form usable inside an expression placeholder.
pub fn sanitize_placeholder(name: &str) -> String {
    name.replace('-', "_")
}

/// A ready-to-send `SET` expression with its name and value maps.
#[derive(Debug)]
pub struct UpdateExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Builds a `SET` expression covering exactly the fields in `changes`, plus
/// an always-appended `updated_at = <now>`.
///
/// The caller is responsible for having removed the key attribute from
/// `changes`; key attributes cannot be SET in DynamoDB.
pub fn build_update(changes: &Map<String, Value>, now: DateTime<Utc>) -> UpdateExpression {
    let mut parts = Vec::with_capacity(changes.len() + 1);
    let mut names = HashMap::with_capacity(changes.len() + 1);
    let mut values = HashMap::with_capacity(changes.len() + 1);

    for (field, value) in changes {
        let placeholder = sanitize_placeholder(field);
        parts.push(format!("#{placeholder} = :{placeholder}"));
        names.insert(format!("#{placeholder}"), field.clone());
        values.insert(format!(":{placeholder}"), to_attr(value));
    }

    parts.push("#updated_at = :updated_at".to_string());
    names.insert("#updated_at".to_string(), "updated_at".to_string());
    values.insert(
        ":updated_at".to_string(),
        AttributeValue::S(now.to_rfc3339()),
    );

    UpdateExpression {
        expression: format!("SET {}", parts.join(", ")),
        names,
        values,
    }
}
