use axum::Router;
use axum::routing::get;

use crate::state::AppState;

pub mod handler;

pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(handler::get_user))
}
