//! In-memory document store backend.
//!
//! The bundled backend: collections live in a map guarded by a tokio
//! `RwLock`, so single-document operations are atomic within one lock
//! acquisition. All data is lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::backend::{Document, DocumentStore};
use super::error::StoreResult;

pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_field(data: &Value, field: &str, value: &Value) -> bool {
    match data.get(field) {
        Some(Value::Array(items)) => items.contains(value),
        Some(found) => found == value,
        None => false,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn create(&self, collection: &str, data: Value) -> StoreResult<Document> {
        let mut collections = self.collections.write().await;
        let document = Document {
            id: Uuid::new_v4(),
            version: 0,
            data,
        };
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());
        Ok(document)
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: &str,
        data: Value,
    ) -> StoreResult<Option<Document>> {
        // A malformed id resolves to no document, same as an unknown one.
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(None);
        };
        Ok(documents.iter_mut().find(|d| d.id == id).map(|document| {
            document.data = data;
            document.version += 1;
            document.clone()
        }))
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(None);
        };
        let position = documents.iter().position(|d| d.id == id);
        Ok(position.map(|index| documents.remove(index)))
    }

    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|d| matches_field(&d.data, field, value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
