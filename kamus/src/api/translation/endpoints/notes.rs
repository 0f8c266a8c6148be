use actix_web::{delete, patch, web};
use kamus_core::api_models::{ErrorResponse, MessageResponse, NoteUpdateRequest};
use kamus_core::id::NoteId;
use kamus_database::entities::{self, NoteFieldsToUpdate};
use tracing::info;

use crate::api::errors::{EndpointError, EndpointResponseBuilder, EndpointResult};
use crate::api::openapi;
use crate::api::translation::parse_uuid;
use crate::state::ApplicationState;




/// Extracts the two required fields of a note update request, rejecting
/// absent and empty values alike.
fn require_note_fields(
    update_request: NoteUpdateRequest,
) -> Result<NoteFieldsToUpdate, EndpointError> {
    let title = update_request.title.filter(|title| !title.is_empty());

    let contents = update_request
        .contents
        .filter(|contents| !contents.is_empty());

    match (title, contents) {
        (Some(new_title), Some(new_contents)) => Ok(NoteFieldsToUpdate {
            new_title,
            new_contents,
        }),
        _ => Err(EndpointError::invalid_request("All fields are required")),
    }
}




/// Update a note
///
/// This endpoint overwrites the title and contents of an existing note.
/// Field validation happens before the note is looked up, so a request
/// with missing fields never touches the database.
#[utoipa::path(
    patch,
    path = "/translation/{note_id}",
    tag = "translation",
    params(
        (
            "note_id" = String,
            Path,
            format = Uuid,
            description = "UUID of the note."
        )
    ),
    request_body(
        content = NoteUpdateRequest
    ),
    responses(
        (
            status = 201,
            description = "The note has been updated.",
            body = MessageResponse,
            example = json!({ "message": "note has been updated" })
        ),
        (
            status = 400,
            description = "A required field is missing or empty, the note id is not \
                           a valid UUID, or the request body is missing or not valid JSON.",
            body = ErrorResponse,
            example = json!({ "status": 400, "message": "All fields are required" })
        ),
        (
            status = 404,
            description = "The requested note does not exist.",
            body = ErrorResponse,
            example = json!({ "status": 404, "message": "note not found" })
        ),
        openapi::response::QueryTimeout,
        openapi::response::InternalServerError,
    )
)]
#[patch("/{note_id}")]
pub async fn update_note(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
    update_request: web::Json<NoteUpdateRequest>,
) -> EndpointResult {
    let fields_to_update = require_note_fields(update_request.into_inner())?;

    let target_note_id = parse_uuid::<NoteId>(parameters.into_inner().0)?;


    let mut database_connection = state.acquire_database_connection().await?;

    let Some(target_note) =
        entities::NoteQuery::get_by_id(&mut database_connection, target_note_id).await?
    else {
        return Err(EndpointError::not_found("note not found"));
    };


    let has_been_updated = entities::NoteMutation::update(
        &mut database_connection,
        target_note.id,
        fields_to_update,
    )
    .await?;

    if !has_been_updated {
        return Err(EndpointError::internal_error_with_reason(
            "failed to update a note that was just fetched",
        ));
    }

    info!(note_id = %target_note.id, "Updated a note.");


    EndpointResponseBuilder::created()
        .with_json_body(MessageResponse::new("note has been updated"))
        .build()
}




/// Delete a note
///
/// This endpoint removes an existing note.
#[utoipa::path(
    delete,
    path = "/translation/{note_id}",
    tag = "translation",
    params(
        (
            "note_id" = String,
            Path,
            format = Uuid,
            description = "UUID of the note to delete."
        )
    ),
    responses(
        (
            status = 200,
            description = "The note has been deleted.",
            body = MessageResponse,
            example = json!({ "message": "note has been deleted" })
        ),
        (
            status = 400,
            description = "The note id is missing or not a valid UUID.",
            body = ErrorResponse,
            example = json!({ "status": 400, "message": "Id is required" })
        ),
        (
            status = 404,
            description = "The requested note does not exist.",
            body = ErrorResponse,
            example = json!({ "status": 404, "message": "note not found" })
        ),
        openapi::response::QueryTimeout,
        openapi::response::InternalServerError,
    )
)]
#[delete("/{note_id}")]
pub async fn delete_note(
    state: ApplicationState,
    parameters: web::Path<(String,)>,
) -> EndpointResult {
    let target_note_id = parse_uuid::<NoteId>(parameters.into_inner().0)
        .map_err(|_| EndpointError::invalid_request("Id is required"))?;


    let mut database_connection = state.acquire_database_connection().await?;

    let Some(target_note) =
        entities::NoteQuery::get_by_id(&mut database_connection, target_note_id).await?
    else {
        return Err(EndpointError::not_found("note not found"));
    };


    let has_been_deleted =
        entities::NoteMutation::delete(&mut database_connection, target_note.id).await?;

    if !has_been_deleted {
        return Err(EndpointError::internal_error_with_reason(
            "failed to delete a note that was just fetched",
        ));
    }

    info!(note_id = %target_note.id, "Deleted a note.");


    EndpointResponseBuilder::ok()
        .with_json_body(MessageResponse::new("note has been deleted"))
        .build()
}



#[cfg(test)]
mod test {
    use super::*;

    fn request(title: Option<&str>, contents: Option<&str>) -> NoteUpdateRequest {
        NoteUpdateRequest {
            title: title.map(str::to_string),
            contents: contents.map(str::to_string),
        }
    }

    #[test]
    fn both_fields_present_produce_the_fields_to_update() {
        let fields = require_note_fields(request(Some("title"), Some("contents"))).unwrap();

        assert_eq!(fields.new_title, "title");
        assert_eq!(fields.new_contents, "contents");
    }

    #[test]
    fn missing_or_empty_fields_are_rejected() {
        assert!(require_note_fields(request(None, Some("contents"))).is_err());
        assert!(require_note_fields(request(Some("title"), None)).is_err());
        assert!(require_note_fields(request(Some(""), Some("contents"))).is_err());
        assert!(require_note_fields(request(Some("title"), Some(""))).is_err());
    }

    #[test]
    fn rejection_uses_the_documented_message() {
        let error = require_note_fields(request(None, None)).unwrap_err();

        assert!(error.to_string().contains("All fields are required"));
    }
}
