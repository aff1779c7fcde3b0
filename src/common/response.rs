use serde::Serialize;
use utoipa::ToSchema;

/// Body for operations that acknowledge with a message, e.g. deletes.
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body shape, documented for the OpenAPI spec. At runtime errors are
/// produced by `HttpError`'s responder.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
