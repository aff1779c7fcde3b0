//! Field validation for movie payloads.
//!
//! Checks run in a fixed order; the first failing check decides which error
//! surfaces when several fields are invalid.

use serde_json::Value;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{Date, OffsetDateTime};

use super::model::Movie;
use crate::common::error::HttpError;

const GENRE_REQUIRED: &str = "Genre field is required and should be an array";
const INVALID_RELEASE_DATE: &str = "Invalid release date";

/// Validates a movie payload and passes the submitted values through
/// unchanged. No side effects.
pub fn validate(payload: &Value) -> Result<Movie, HttpError> {
    let title = required_string(payload, "title", "Title")?;
    let description = required_string(payload, "description", "Description")?;
    let release_date = required_string(payload, "releaseDate", "ReleaseDate")?;
    let genre = required_genre_list(payload)?;
    if parse_release_date(&release_date).is_none() {
        return Err(HttpError::unprocessable(INVALID_RELEASE_DATE));
    }
    Ok(Movie {
        title,
        description,
        release_date,
        genre,
    })
}

fn required_string(payload: &Value, key: &str, label: &str) -> Result<String, HttpError> {
    match payload.get(key).and_then(Value::as_str) {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(HttpError::bad_request(format!("{label} field is required"))),
    }
}

fn required_genre_list(payload: &Value) -> Result<Vec<String>, HttpError> {
    let invalid = || HttpError::bad_request(GENRE_REQUIRED);
    let items = payload
        .get("genre")
        .and_then(Value::as_array)
        .ok_or_else(invalid)?;
    if items.is_empty() {
        return Err(invalid());
    }
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}

/// Accepts an ISO calendar date or an RFC 3339 timestamp (date part taken).
fn parse_release_date(raw: &str) -> Option<Date> {
    Date::parse(raw, &Iso8601::DATE)
        .ok()
        .or_else(|| OffsetDateTime::parse(raw, &Rfc3339).ok().map(OffsetDateTime::date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "title": "Inception",
            "description": "A mind-bending heist",
            "releaseDate": "2010-07-16",
            "genre": ["Sci-Fi", "Thriller"]
        })
    }

    #[test]
    fn accepts_a_valid_payload_unchanged() {
        let movie = validate(&valid_payload()).unwrap();
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.description, "A mind-bending heist");
        assert_eq!(movie.release_date, "2010-07-16");
        assert_eq!(movie.genre, vec!["Sci-Fi", "Thriller"]);
    }

    #[test]
    fn accepts_an_rfc3339_release_date() {
        let mut payload = valid_payload();
        payload["releaseDate"] = json!("2010-07-16T00:00:00Z");
        assert!(validate(&payload).is_ok());
    }

    #[test]
    fn rejects_missing_or_blank_required_strings() {
        for (key, label) in [
            ("title", "Title"),
            ("description", "Description"),
            ("releaseDate", "ReleaseDate"),
        ] {
            for bad in [json!(""), json!("   "), json!(7), Value::Null] {
                let mut payload = valid_payload();
                payload[key] = bad;
                let err = validate(&payload).unwrap_err();
                assert_eq!(err.status, StatusCode::BAD_REQUEST);
                assert_eq!(err.message, format!("{label} field is required"));
            }
        }
    }

    #[test]
    fn first_failing_field_decides_the_error() {
        let payload = json!({
            "title": "",
            "description": "",
            "releaseDate": "",
            "genre": []
        });
        let err = validate(&payload).unwrap_err();
        assert_eq!(err.message, "Title field is required");
    }

    #[test]
    fn rejects_genre_that_is_not_a_non_empty_string_array() {
        for bad in [
            json!("Action"),
            json!([]),
            json!([1, 2]),
            json!(["Action", 3]),
            Value::Null,
        ] {
            let mut payload = valid_payload();
            payload["genre"] = bad;
            let err = validate(&payload).unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
            assert_eq!(err.message, GENRE_REQUIRED);
        }
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("genre");
        let err = validate(&payload).unwrap_err();
        assert_eq!(err.message, GENRE_REQUIRED);
    }

    #[test]
    fn rejects_an_unparseable_release_date_with_422() {
        for bad in ["not-a-date", "2023-13-45", "16/07/2010"] {
            let mut payload = valid_payload();
            payload["releaseDate"] = json!(bad);
            let err = validate(&payload).unwrap_err();
            assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(err.message, INVALID_RELEASE_DATE);
        }
    }

    #[test]
    fn genre_check_runs_before_date_parsing() {
        let mut payload = valid_payload();
        payload["releaseDate"] = json!("not-a-date");
        payload["genre"] = json!([]);
        let err = validate(&payload).unwrap_err();
        assert_eq!(err.message, GENRE_REQUIRED);
    }
}
