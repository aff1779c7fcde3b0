use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public shape of a movie record, camelCase on the wire.
///
/// `release_date` stays the string the client submitted; the validator
/// proves it parses as a date, and echoing it back unreformatted keeps
/// responses byte-for-byte equal to the submitted fields. A movie may name
/// genres that do not exist as Genre records.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: String,
    pub description: String,
    pub release_date: String,
    pub genre: Vec<String>,
}
