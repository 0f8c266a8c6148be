use serde::Serialize;
use utoipa::ToSchema;


/// Generic `{ "message": ... }` body returned by write operations.
#[derive(Serialize, Debug, PartialEq, Eq, ToSchema)]
#[schema(example = json!({ "message": "Translation has been created" }))]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            message: message.into(),
        }
    }
}


/// Uniform error body produced by every failed request,
/// including unmatched routes.
#[derive(Serialize, Debug, PartialEq, Eq, ToSchema)]
#[schema(example = json!({ "status": 404, "message": "note not found" }))]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new<M>(status: u16, message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            status,
            message: message.into(),
        }
    }
}
