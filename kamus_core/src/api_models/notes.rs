use serde::{Deserialize, Serialize};
use utoipa::ToSchema;


#[derive(Deserialize, Serialize, Clone, PartialEq, Eq, Debug, ToSchema)]
#[schema(
    example = json!({
        "title": "pronunciation",
        "contents": "The initial consonant is unvoiced."
    })
)]
pub struct NoteUpdateRequest {
    pub title: Option<String>,

    pub contents: Option<String>,
}
