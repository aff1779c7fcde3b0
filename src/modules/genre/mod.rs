use axum::Router;
use axum::routing::{get, put};

use crate::state::AppState;

pub mod handler;
pub mod model;
pub mod repository;
pub mod validator;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_genres).post(handler::create_genre))
        .route("/{id}", put(handler::update_genre).delete(handler::delete_genre))
}
