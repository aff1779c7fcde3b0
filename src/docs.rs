use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::handler::health_check,
        crate::modules::user::handler::get_user,
        crate::modules::genre::handler::list_genres,
        crate::modules::genre::handler::create_genre,
        crate::modules::genre::handler::update_genre,
        crate::modules::genre::handler::delete_genre,
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::delete_movie,
        crate::modules::movie::handler::list_movies_by_genre,
    ),
    components(
        schemas(
            crate::modules::genre::model::Genre,
            crate::modules::movie::model::Movie,
            crate::modules::user::handler::UserResponse,
            crate::modules::health::handler::HealthResponse,
            crate::common::response::MessageResponse,
            crate::common::response::ErrorResponse,
        )
    ),
    tags(
        (name = "API functions", description = "Health check and demo endpoints"),
        (name = "Genres", description = "Genre management"),
        (name = "Movies", description = "Movie management")
    )
)]
pub struct ApiDoc;
