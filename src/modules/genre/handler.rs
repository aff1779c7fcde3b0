use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;

use super::model::Genre;
use super::repository::GenreRepository;
use super::validator;
use crate::common::error::HttpError;
use crate::common::response::{ErrorResponse, MessageResponse};
use crate::state::AppState;

/// List all genres
#[utoipa::path(
    get,
    path = "/genres",
    responses(
        (status = 200, description = "List of genres", body = Vec<Genre>),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, HttpError> {
    let genres = GenreRepository::find_all(state.store.as_ref()).await?;
    Ok(Json(genres))
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/genres",
    request_body = Genre,
    responses(
        (status = 201, description = "Genre created", body = Genre),
        (status = 400, description = "Name field is required", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let genre = validator::validate(&payload)?;
    let created = GenreRepository::create(state.store.as_ref(), &genre).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a genre by id
#[utoipa::path(
    put,
    path = "/genres/{id}",
    params(
        ("id" = String, Path, description = "Genre ID")
    ),
    request_body = Genre,
    responses(
        (status = 200, description = "Genre updated", body = Genre),
        (status = 400, description = "Name field is required", body = ErrorResponse),
        (status = 404, description = "Genre not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Genre>, HttpError> {
    let genre = validator::validate(&payload)?;
    let updated = GenreRepository::update_by_id(state.store.as_ref(), &id, &genre)
        .await?
        .ok_or_else(HttpError::not_found)?;
    Ok(Json(updated))
}

/// Delete a genre by id
#[utoipa::path(
    delete,
    path = "/genres/{id}",
    params(
        ("id" = String, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre deleted", body = MessageResponse),
        (status = 404, description = "Genre not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, HttpError> {
    GenreRepository::delete_by_id(state.store.as_ref(), &id)
        .await?
        .ok_or_else(HttpError::not_found)?;
    Ok(Json(MessageResponse::new("Genre deleted successfully")))
}
