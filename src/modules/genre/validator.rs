//! Field validation for genre payloads.

use serde_json::Value;

use super::model::Genre;
use crate::common::error::HttpError;

/// Requires a `name` field that is a string and non-empty after trimming.
/// The submitted value passes through unchanged. No side effects.
pub fn validate(payload: &Value) -> Result<Genre, HttpError> {
    match payload.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => Ok(Genre {
            name: name.to_string(),
        }),
        _ => Err(HttpError::bad_request("Name field is required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn accepts_a_non_empty_name() {
        let genre = validate(&json!({ "name": "Comedy" })).unwrap();
        assert_eq!(genre.name, "Comedy");
    }

    #[test]
    fn passes_the_name_through_untrimmed() {
        let genre = validate(&json!({ "name": " Comedy " })).unwrap();
        assert_eq!(genre.name, " Comedy ");
    }

    #[test]
    fn rejects_missing_empty_or_blank_name() {
        for payload in [
            json!({}),
            json!({ "name": "" }),
            json!({ "name": "   " }),
            json!({ "name": 42 }),
            json!({ "name": null }),
        ] {
            let err = validate(&payload).unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
            assert_eq!(err.message, "Name field is required");
        }
    }
}
