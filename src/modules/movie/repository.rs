use serde_json::Value;

use super::model::Movie;
use crate::store::{Document, DocumentStore, StoreResult};

const COLLECTION: &str = "movies";

pub struct MovieRepository;

impl MovieRepository {
    pub async fn find_all(store: &dyn DocumentStore) -> StoreResult<Vec<Movie>> {
        let documents = store.list(COLLECTION).await?;
        from_documents(documents)
    }

    pub async fn create(store: &dyn DocumentStore, movie: &Movie) -> StoreResult<Movie> {
        let document = store
            .create(COLLECTION, serde_json::to_value(movie)?)
            .await?;
        Ok(serde_json::from_value(document.data)?)
    }

    pub async fn update_by_id(
        store: &dyn DocumentStore,
        id: &str,
        movie: &Movie,
    ) -> StoreResult<Option<Movie>> {
        let updated = store
            .update_by_id(COLLECTION, id, serde_json::to_value(movie)?)
            .await?;
        updated
            .map(|d| serde_json::from_value(d.data).map_err(Into::into))
            .transpose()
    }

    pub async fn delete_by_id(store: &dyn DocumentStore, id: &str) -> StoreResult<Option<Movie>> {
        let deleted = store.delete_by_id(COLLECTION, id).await?;
        deleted
            .map(|d| serde_json::from_value(d.data).map_err(Into::into))
            .transpose()
    }

    /// Movies whose genre array contains the given name.
    pub async fn find_by_genre(store: &dyn DocumentStore, name: &str) -> StoreResult<Vec<Movie>> {
        let documents = store
            .find_by_field(COLLECTION, "genre", &Value::String(name.to_string()))
            .await?;
        from_documents(documents)
    }
}

fn from_documents(documents: Vec<Document>) -> StoreResult<Vec<Movie>> {
    documents
        .into_iter()
        .map(|d| serde_json::from_value(d.data).map_err(Into::into))
        .collect()
}
