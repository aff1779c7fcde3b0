use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;

use super::model::Movie;
use super::repository::MovieRepository;
use super::validator;
use crate::common::error::HttpError;
use crate::common::response::{ErrorResponse, MessageResponse};
use crate::state::AppState;

/// List all movies
#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "List of movies", body = Vec<Movie>),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, HttpError> {
    let movies = MovieRepository::find_all(state.store.as_ref()).await?;
    Ok(Json(movies))
}

/// Create a new movie
#[utoipa::path(
    post,
    path = "/movies",
    request_body = Movie,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 400, description = "A required field is missing", body = ErrorResponse),
        (status = 422, description = "Invalid release date", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, HttpError> {
    let movie = validator::validate(&payload)?;
    let created = MovieRepository::create(state.store.as_ref(), &movie).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a movie by id
#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(
        ("id" = String, Path, description = "Movie ID")
    ),
    request_body = Movie,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 400, description = "A required field is missing", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 422, description = "Invalid release date", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Movie>, HttpError> {
    let movie = validator::validate(&payload)?;
    let updated = MovieRepository::update_by_id(state.store.as_ref(), &id, &movie)
        .await?
        .ok_or_else(HttpError::not_found)?;
    Ok(Json(updated))
}

/// Delete a movie by id
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(
        ("id" = String, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = MessageResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, HttpError> {
    MovieRepository::delete_by_id(state.store.as_ref(), &id)
        .await?
        .ok_or_else(HttpError::not_found)?;
    Ok(Json(MessageResponse::new("Movie deleted successfully")))
}

/// List movies matching a genre name
#[utoipa::path(
    get,
    path = "/movies/genre/{genre_name}",
    params(
        ("genre_name" = String, Path, description = "Genre name to match")
    ),
    responses(
        (status = 200, description = "Movies in the genre", body = Vec<Movie>),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    ),
    tag = "Movies"
)]
pub async fn list_movies_by_genre(
    State(state): State<AppState>,
    Path(genre_name): Path<String>,
) -> Result<Json<Vec<Movie>>, HttpError> {
    let movies = MovieRepository::find_by_genre(state.store.as_ref(), &genre_name).await?;
    Ok(Json(movies))
}
