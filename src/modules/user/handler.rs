//! Demo user endpoint. No persistence behind it; the canned responses
//! exercise the 200, 404, and 500 paths end to end.

use axum::{Json, extract::Path};
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::error::HttpError;
use crate::common::response::ErrorResponse;

#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User ID", example = "1")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "API functions"
)]
pub async fn get_user(Path(id): Path<String>) -> Result<Json<UserResponse>, HttpError> {
    // "error" deliberately trips the unexpected-failure path.
    if id == "error" {
        return Err(anyhow::anyhow!("something went wrong").into());
    }
    if id != "1" {
        return Err(HttpError::not_found());
    }
    Ok(Json(UserResponse {
        id,
        name: "User name".to_string(),
    }))
}
