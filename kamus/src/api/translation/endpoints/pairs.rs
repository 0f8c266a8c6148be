use actix_web::{post, web};
use kamus_core::api_models::{ErrorResponse, MessageResponse, TranslationPairCreationRequest};
use kamus_database::entities::{self, NewTranslationPair};
use kamus_database::QueryError;
use tracing::{error, info};

use crate::api::errors::{EndpointError, EndpointResponseBuilder, EndpointResult};
use crate::api::openapi;
use crate::state::ApplicationState;




/// Extracts the two required fields of a creation request, rejecting
/// absent and empty values alike.
fn require_pair_fields(
    creation_request: TranslationPairCreationRequest,
) -> Result<NewTranslationPair, EndpointError> {
    let turkish_word = creation_request.turkish_word.filter(|word| !word.is_empty());

    let indonesian_translation = creation_request
        .indonesian_translation
        .filter(|translation| !translation.is_empty());

    match (turkish_word, indonesian_translation) {
        (Some(turkish_word), Some(indonesian_translation)) => Ok(NewTranslationPair {
            turkish_word,
            indonesian_translation,
        }),
        _ => Err(EndpointError::invalid_request("All fields are required")),
    }
}


/// Maps a failed pair insert onto the fixed client-facing creation error,
/// logging the underlying cause. Statement timeouts keep their own
/// classification (503) instead.
fn wrap_pair_creation_error(error: QueryError) -> EndpointError {
    if error.is_statement_timeout() {
        return EndpointError::QueryTimedOut;
    }

    error!(error = %error, "Failed to create a translation pair.");

    EndpointError::internal_error_with_message("Translation creation failed")
}




/// Create a translation pair
///
/// This endpoint inserts a Turkish word together with its Indonesian
/// translation. The two rows are written inside a single transaction,
/// so either both end up in the dictionary or neither does.
#[utoipa::path(
    post,
    path = "/translation/post",
    tag = "translation",
    request_body(
        content = TranslationPairCreationRequest
    ),
    responses(
        (
            status = 201,
            description = "The translation pair has been created.",
            body = MessageResponse,
            example = json!({ "message": "Translation has been created" })
        ),
        (
            status = 400,
            description = "A required field is missing or empty, \
                           or the request body is missing or not valid JSON.",
            body = ErrorResponse,
            example = json!({ "status": 400, "message": "All fields are required" })
        ),
        openapi::response::TranslationCreationFailed,
        openapi::response::QueryTimeout,
    )
)]
#[post("/post")]
pub async fn create_translation_pair(
    state: ApplicationState,
    creation_request: web::Json<TranslationPairCreationRequest>,
) -> EndpointResult {
    let new_pair = require_pair_fields(creation_request.into_inner())?;

    let mut database_connection = state.acquire_database_connection().await?;


    let created_pair =
        entities::TranslationPairMutation::create(&mut database_connection, new_pair)
            .await
            .map_err(wrap_pair_creation_error)?;

    info!(
        turkish_word_id = %created_pair.turkish_word.id,
        indonesian_translation_id = %created_pair.indonesian_translation.id,
        "Created a new translation pair."
    );


    EndpointResponseBuilder::created()
        .with_json_body(MessageResponse::new("Translation has been created"))
        .build()
}




/// Create translation pairs in bulk
///
/// This endpoint accepts an ordered array of translation pairs and inserts
/// them one by one, each pair in its own transaction. An invalid element
/// aborts the batch at that position; pairs created by the preceding
/// elements stay committed.
#[utoipa::path(
    post,
    path = "/translation/batch",
    tag = "translation",
    request_body(
        content = Vec<TranslationPairCreationRequest>
    ),
    responses(
        (
            status = 201,
            description = "All translation pairs have been created \
                           (an empty array is vacuously successful).",
            body = MessageResponse,
            example = json!({ "message": "Translations have been created" })
        ),
        (
            status = 400,
            description = "An element has a missing or empty field, \
                           or the request body is missing or not valid JSON. \
                           Pairs from the preceding elements stay committed.",
            body = ErrorResponse,
            example = json!({ "status": 400, "message": "All fields are required" })
        ),
        openapi::response::TranslationCreationFailed,
        openapi::response::QueryTimeout,
    )
)]
#[post("/batch")]
pub async fn create_translation_pair_batch(
    state: ApplicationState,
    batch_request: web::Json<Vec<TranslationPairCreationRequest>>,
) -> EndpointResult {
    let requested_pairs = batch_request.into_inner();

    if requested_pairs.is_empty() {
        return EndpointResponseBuilder::created()
            .with_json_body(MessageResponse::new("Translations have been created"))
            .build();
    }

    let pair_count = requested_pairs.len();

    let mut database_connection = state.acquire_database_connection().await?;


    for creation_request in requested_pairs {
        let new_pair = require_pair_fields(creation_request)?;

        entities::TranslationPairMutation::create(&mut database_connection, new_pair)
            .await
            .map_err(wrap_pair_creation_error)?;
    }

    info!(
        pair_count = pair_count,
        "Created a batch of translation pairs."
    );


    EndpointResponseBuilder::created()
        .with_json_body(MessageResponse::new("Translations have been created"))
        .build()
}



#[cfg(test)]
mod test {
    use super::*;

    fn request(
        turkish_word: Option<&str>,
        indonesian_translation: Option<&str>,
    ) -> TranslationPairCreationRequest {
        TranslationPairCreationRequest {
            turkish_word: turkish_word.map(str::to_string),
            indonesian_translation: indonesian_translation.map(str::to_string),
        }
    }

    #[test]
    fn both_fields_present_produce_a_new_pair() {
        let new_pair = require_pair_fields(request(Some("merhaba"), Some("halo"))).unwrap();

        assert_eq!(new_pair.turkish_word, "merhaba");
        assert_eq!(new_pair.indonesian_translation, "halo");
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert!(require_pair_fields(request(None, Some("halo"))).is_err());
        assert!(require_pair_fields(request(Some("merhaba"), None)).is_err());
        assert!(require_pair_fields(request(None, None)).is_err());
    }

    #[test]
    fn empty_fields_are_rejected_like_missing_ones() {
        assert!(require_pair_fields(request(Some(""), Some("halo"))).is_err());
        assert!(require_pair_fields(request(Some("merhaba"), Some(""))).is_err());
    }

    #[test]
    fn whitespace_only_fields_are_kept() {
        // Only truly empty values count as absent; whitespace is preserved.
        let new_pair = require_pair_fields(request(Some(" "), Some("halo"))).unwrap();

        assert_eq!(new_pair.turkish_word, " ");
    }

    #[test]
    fn rejection_uses_the_documented_message() {
        let error = require_pair_fields(request(None, None)).unwrap_err();

        assert!(error
            .to_string()
            .contains("All fields are required"));
    }
}
