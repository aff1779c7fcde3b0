use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Check the server's health
#[utoipa::path(
    get,
    path = "/health-check",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    ),
    tag = "API functions"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Server is up and running".to_string(),
    })
}
