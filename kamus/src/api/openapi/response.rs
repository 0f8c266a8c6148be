use std::collections::BTreeMap;

use kamus_core::api_models::ErrorResponse;
use serde_json::json;
use utoipa::openapi::example::ExampleBuilder;
use utoipa::openapi::{ContentBuilder, RefOr, Response, ResponseBuilder, ResponsesBuilder};
use utoipa::ToSchema;


/// A `utoipa` endpoint response for when an endpoint may return a
/// `500 Internal Server Error` HTTP response indicating that something
/// went wrong internally.
///
/// This should be present on all routes that touch the database.
///
/// **As with all other structures in this module, it is fully up to the
/// endpoint function to ensure this can happen; adding the annotation only
/// makes it appear in the OpenAPI documentation.**
pub struct InternalServerError;

impl utoipa::IntoResponses for InternalServerError {
    fn responses() -> BTreeMap<String, RefOr<Response>> {
        let internal_error_response = ResponseBuilder::new()
            .description("Internal server error.")
            .content(
                mime::APPLICATION_JSON.to_string(),
                ContentBuilder::new()
                    .examples_from_iter(vec![(
                        "Internal server error.",
                        ExampleBuilder::new()
                            .value(Some(json!({
                                "status": 500,
                                "message": "Internal server error"
                            })))
                            .build(),
                    )])
                    .schema(ErrorResponse::schema().1)
                    .build(),
            )
            .build();

        ResponsesBuilder::new()
            .response("500", internal_error_response)
            .build()
            .into()
    }
}


/// A `utoipa` endpoint response for when an endpoint may return a
/// `503 Service Unavailable` HTTP response because a database statement
/// was cancelled by the configured statement timeout.
///
/// This should be present on all routes that touch the database.
pub struct QueryTimeout;

impl utoipa::IntoResponses for QueryTimeout {
    fn responses() -> BTreeMap<String, RefOr<Response>> {
        let query_timeout_response = ResponseBuilder::new()
            .description(
                "The underlying database query exceeded the configured statement timeout. \
                The request can be retried later.",
            )
            .content(
                mime::APPLICATION_JSON.to_string(),
                ContentBuilder::new()
                    .examples_from_iter(vec![(
                        "Query cancelled by the statement timeout.",
                        ExampleBuilder::new()
                            .value(Some(json!({
                                "status": 503,
                                "message": "Database query timed out"
                            })))
                            .build(),
                    )])
                    .schema(ErrorResponse::schema().1)
                    .build(),
            )
            .build();

        ResponsesBuilder::new()
            .response("503", query_timeout_response)
            .build()
            .into()
    }
}


/// A `utoipa` endpoint response for when an endpoint may return a
/// `500 Internal Server Error` with a fixed, endpoint-specific message
/// (instead of the generic one) for a failed database write.
pub struct TranslationCreationFailed;

impl utoipa::IntoResponses for TranslationCreationFailed {
    fn responses() -> BTreeMap<String, RefOr<Response>> {
        let creation_failed_response = ResponseBuilder::new()
            .description("The translation pair could not be written to the database.")
            .content(
                mime::APPLICATION_JSON.to_string(),
                ContentBuilder::new()
                    .examples_from_iter(vec![(
                        "Database write failed.",
                        ExampleBuilder::new()
                            .value(Some(json!({
                                "status": 500,
                                "message": "Translation creation failed"
                            })))
                            .build(),
                    )])
                    .schema(ErrorResponse::schema().1)
                    .build(),
            )
            .build();

        ResponsesBuilder::new()
            .response("500", creation_failed_response)
            .build()
            .into()
    }
}
