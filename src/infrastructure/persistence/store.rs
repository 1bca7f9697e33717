//! Thin typed wrapper around the DynamoDB client.
//!
//! One partition key per table, items handled as JSON objects. Uniqueness is
//! enforced by the store itself: `put_new` is a conditional write
//! (`attribute_not_exists`), so two concurrent creates of the same key cannot
//! both succeed, and `update` is guarded by `attribute_exists` so a partial
//! update can never upsert a missing item.

use std::collections::HashMap;

use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use chrono::Utc;
use serde_json::{Map, Value};

use crate::infrastructure::persistence::attrs::{from_item, to_item};
use crate::infrastructure::persistence::update::build_update;

/// Store-level failure, classified for the repositories to map onto
/// entity-specific errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("key already exists")]
    KeyExists,
    #[error("item not found")]
    NotFound,
    #[error("dynamodb request failed: {0}")]
    Request(String),
}

/// DynamoDB-backed key-value store.
///
/// Constructed once at startup and shared; the inner client is already
/// cheaply cloneable.
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
}

impl DynamoStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Point lookup. Strongly consistent, so an item written by the same
    /// logical operation sequence is visible to an immediate re-read.
    pub async fn get(
        &self,
        table: &str,
        key_attr: &str,
        key: &str,
    ) -> Result<Option<Map<String, Value>>, StoreError> {
        let response = self
            .client
            .get_item()
            .table_name(table)
            .key(key_attr, AttributeValue::S(key.to_string()))
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        Ok(response.item.as_ref().map(from_item))
    }

    /// Conditional put: writes the item only if the key is not taken.
    pub async fn put_new(
        &self,
        table: &str,
        key_attr: &str,
        item: &Map<String, Value>,
    ) -> Result<(), StoreError> {
        let result = self
            .client
            .put_item()
            .table_name(table)
            .set_item(Some(to_item(item)))
            .condition_expression("attribute_not_exists(#key)")
            .expression_attribute_names("#key", key_attr)
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e)
                if e.as_service_error()
                    .is_some_and(|se| se.is_conditional_check_failed_exception()) =>
            {
                Err(StoreError::KeyExists)
            }
            Err(e) => Err(StoreError::Request(e.to_string())),
        }
    }

    /// Partial update covering exactly `changes` plus a refreshed
    /// `updated_at`. Returns the post-update item.
    pub async fn update(
        &self,
        table: &str,
        key_attr: &str,
        key: &str,
        changes: &Map<String, Value>,
    ) -> Result<Map<String, Value>, StoreError> {
        let update = build_update(changes, Utc::now());

        let mut names = update.names;
        names.insert("#key".to_string(), key_attr.to_string());

        let result = self
            .client
            .update_item()
            .table_name(table)
            .key(key_attr, AttributeValue::S(key.to_string()))
            .update_expression(update.expression)
            .condition_expression("attribute_exists(#key)")
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(update.values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await;

        match result {
            Ok(output) => Ok(output.attributes.as_ref().map(from_item).unwrap_or_default()),
            Err(e)
                if e.as_service_error()
                    .is_some_and(|se| se.is_conditional_check_failed_exception()) =>
            {
                Err(StoreError::NotFound)
            }
            Err(e) => Err(StoreError::Request(e.to_string())),
        }
    }

    /// Deletes by key. Returns whether an item actually existed; "not found"
    /// is a normal outcome, never an error.
    pub async fn delete(&self, table: &str, key_attr: &str, key: &str) -> Result<bool, StoreError> {
        let response = self
            .client
            .delete_item()
            .table_name(table)
            .key(key_attr, AttributeValue::S(key.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        Ok(response.attributes.is_some_and(|attrs| !attrs.is_empty()))
    }

    /// Full-table scan, following the pagination cursor until the store
    /// reports no further pages. All pages are concatenated before return.
    pub async fn scan(&self, table: &str) -> Result<Vec<Map<String, Value>>, StoreError> {
        let mut items = Vec::new();
        let mut last_evaluated_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let response = self
                .client
                .scan()
                .table_name(table)
                .set_exclusive_start_key(last_evaluated_key.take())
                .send()
                .await
                .map_err(|e| StoreError::Request(e.to_string()))?;

            if let Some(page) = response.items {
                items.extend(page.iter().map(from_item));
            }

            last_evaluated_key = response.last_evaluated_key;
            if last_evaluated_key.is_none() {
                break;
            }
        }

        Ok(items)
    }
}
