//! Document store trait definition.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use super::error::StoreResult;

/// Envelope the store wraps around a record's public fields.
///
/// `id` and `version` are internal markers assigned by the store and are
/// never serialized into API responses.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: Uuid,
    pub version: u64,
    pub data: Value,
}

/// Trait for document store backends.
///
/// Implementations must be `Send + Sync`; a handle is shared across request
/// tasks behind `Arc<dyn DocumentStore>`. Identifiers arrive as path strings;
/// an id that does not parse resolves to no document rather than an error.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch every document in a collection, in insertion order.
    async fn list(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Persist a new document, assigning a fresh id and version 0.
    async fn create(&self, collection: &str, data: Value) -> StoreResult<Document>;

    /// Replace a document's data and bump its version.
    ///
    /// Returns `None` when the id resolves to no document.
    async fn update_by_id(
        &self,
        collection: &str,
        id: &str,
        data: Value,
    ) -> StoreResult<Option<Document>>;

    /// Remove a document. Returns the removed document, or `None` when the
    /// id resolves to nothing.
    async fn delete_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;

    /// Fetch every document whose `field` equals `value`.
    ///
    /// When the stored field is an array, the document matches if the array
    /// contains `value` (document-database equality-on-array semantics).
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<Document>>;
}
