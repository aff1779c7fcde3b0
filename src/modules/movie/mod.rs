use axum::Router;
use axum::routing::{get, put};

use crate::state::AppState;

pub mod handler;
pub mod model;
pub mod repository;
pub mod validator;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_movies).post(handler::create_movie))
        .route("/{id}", put(handler::update_movie).delete(handler::delete_movie))
        .route("/genre/{genre_name}", get(handler::list_movies_by_genre))
}
