use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::common::error::HttpError;
use crate::docs::ApiDoc;
use crate::state::AppState;

pub fn configure_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(
            "/health-check",
            axum::routing::get(crate::modules::health::handler::health_check),
        )
        .nest("/users", crate::modules::user::router())
        .nest("/genres", crate::modules::genre::router())
        .nest("/movies", crate::modules::movie::router())
        .fallback(unmatched_route)
        .layer(cors)
}

async fn unmatched_route() -> HttpError {
    HttpError::not_found()
}
