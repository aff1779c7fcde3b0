use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public shape of a genre record. Store-internal markers (id, version)
/// never appear here.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct Genre {
    pub name: String,
}
