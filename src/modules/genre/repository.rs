use super::model::Genre;
use crate::store::{DocumentStore, StoreResult};

const COLLECTION: &str = "genres";

pub struct GenreRepository;

impl GenreRepository {
    pub async fn find_all(store: &dyn DocumentStore) -> StoreResult<Vec<Genre>> {
        let documents = store.list(COLLECTION).await?;
        documents
            .into_iter()
            .map(|d| serde_json::from_value(d.data).map_err(Into::into))
            .collect()
    }

    pub async fn create(store: &dyn DocumentStore, genre: &Genre) -> StoreResult<Genre> {
        let document = store
            .create(COLLECTION, serde_json::to_value(genre)?)
            .await?;
        Ok(serde_json::from_value(document.data)?)
    }

    pub async fn update_by_id(
        store: &dyn DocumentStore,
        id: &str,
        genre: &Genre,
    ) -> StoreResult<Option<Genre>> {
        let updated = store
            .update_by_id(COLLECTION, id, serde_json::to_value(genre)?)
            .await?;
        updated
            .map(|d| serde_json::from_value(d.data).map_err(Into::into))
            .transpose()
    }

    pub async fn delete_by_id(store: &dyn DocumentStore, id: &str) -> StoreResult<Option<Genre>> {
        let deleted = store.delete_by_id(COLLECTION, id).await?;
        deleted
            .map(|d| serde_json::from_value(d.data).map_err(Into::into))
            .transpose()
    }
}
