//! Provides ways of handling errors in API endpoint functions
//! and ways to have those errors automatically turned into correct
//! HTTP error responses when returned as `Err(error)` from those functions.
//!
//! Every failed request, no matter where it failed, is ultimately formatted
//! by a single boundary: the [`ResponseError`] implementation on
//! [`EndpointError`], which emits the uniform `{ "status": ..., "message": ... }`
//! JSON body alongside the corresponding HTTP status code.

use std::borrow::{Borrow, Cow};
use std::fmt::{Display, Formatter};

use actix_http::header::{HeaderName, HeaderValue};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::http::{header, StatusCode};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use kamus_core::api_models::ErrorResponse;
use kamus_database::QueryError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Ways in which a JSON request body can be unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidJsonBodyReason {
    /// Signals an IO / syntax / EOF error while parsing.
    NotJson,

    /// The body parsed as JSON, but its structure did not
    /// match the expected model.
    InvalidData,

    /// The body exceeded the configured payload limit.
    TooLarge,
}


/// General-purpose API error type, returnable from endpoint functions.
///
/// Use this type alongside an [`EndpointResult`] return type in actix endpoint
/// handlers to be able to `?`-propagate failures; the [`ResponseError`]
/// implementation below converts each variant into the correct 4xx/5xx
/// response with the uniform JSON error body.
///
/// Messages carried by the `InternalError*` variants with a `reason`
/// (and by [`InternalGenericError`][Self::InternalGenericError] and
/// [`InternalDatabaseError`][Self::InternalDatabaseError]) are logged,
/// but never leak through the API.
#[derive(Debug, Error)]
pub enum EndpointError {
    /*
     * Client errors.
     *
     * Reasons are exposed as a HTTP status code plus a JSON body.
     */
    /// Bad client request with a message; produces a `400 Bad Request`,
    /// with the message included in the response body.
    InvalidRequest {
        message: Cow<'static, str>,
    },

    /// The requested entity could not be found; produces a `404 Not Found`,
    /// with the message included in the response body.
    NotFound {
        message: Cow<'static, str>,
    },

    /// The endpoint expected a JSON body, but there was either:
    /// - no JSON body sent with the request,
    /// - or there was an incorrect `Content-Type` header (expected: `application/json`).
    MissingJsonBody,

    /// Invalid JSON body, either due to a deserialization error,
    /// or because the body is too large.
    InvalidJsonBody {
        reason: InvalidJsonBodyReason,
    },

    /// A path parameter that should have been a UUID was not parsable as one.
    InvalidUuidFormat {
        #[source]
        error: uuid::Error,
    },

    /*
     * Server errors.
     */
    /// A database statement was cancelled because it exceeded the configured
    /// `statement_timeout`; produces a `503 Service Unavailable`.
    QueryTimedOut,

    /// Internal error with a fixed client-facing message.
    /// Triggers a `500 Internal Server Error` with the given message
    /// **included in the response body** (unlike the variants below).
    InternalErrorWithMessage {
        message: Cow<'static, str>,
    },

    /// Internal error with a string reason.
    /// Triggers a `500 Internal Server Error` (**reason doesn't leak through the API**).
    InternalErrorWithReason {
        reason: Cow<'static, str>,
    },

    /// Internal error, constructed from a boxed [`Error`][std::error::Error].
    /// Triggers a `500 Internal Server Error` (**error doesn't leak through the API**).
    InternalGenericError {
        #[from]
        #[source]
        error: Box<dyn std::error::Error>,
    },

    /// Internal error, constructed from a [`sqlx::Error`].
    /// Triggers a `500 Internal Server Error` (**error doesn't leak through the API**).
    ///
    /// Note: prefer `?` with the [`From<sqlx::Error>`][From] conversion over
    /// constructing this variant directly, since the conversion routes
    /// statement timeouts to [`QueryTimedOut`][Self::QueryTimedOut].
    InternalDatabaseError {
        #[source]
        error: sqlx::Error,
    },
}

impl EndpointError {
    #[inline]
    pub fn invalid_request<S>(message: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    #[inline]
    pub fn not_found<S>(message: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub const fn missing_json_body() -> Self {
        Self::MissingJsonBody
    }

    pub const fn invalid_json_body(reason: InvalidJsonBodyReason) -> Self {
        Self::InvalidJsonBody { reason }
    }

    pub fn internal_error<E>(error: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Self::InternalGenericError {
            error: Box::new(error),
        }
    }

    /// Initialize a new internal API error with a fixed message.
    /// The message **is exposed** in the HTTP response body.
    #[inline]
    pub fn internal_error_with_message<S>(message: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::InternalErrorWithMessage {
            message: message.into(),
        }
    }

    /// Initialize a new internal API error using an internal reason string.
    /// When constructing an HTTP response using this error variant, the **reason
    /// is not leaked through the API.**
    #[inline]
    pub fn internal_error_with_reason<S>(reason: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::InternalErrorWithReason {
            reason: reason.into(),
        }
    }

    /// The message included in the JSON error body sent to the client.
    ///
    /// Internal variants collapse to a generic message; their details
    /// stay in the server logs.
    fn client_facing_message(&self) -> Cow<'static, str> {
        match self {
            Self::InvalidRequest { message } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::MissingJsonBody => Cow::Borrowed("Expected a JSON body"),
            Self::InvalidJsonBody { reason } => match reason {
                InvalidJsonBodyReason::NotJson => Cow::Borrowed("Invalid JSON body"),
                InvalidJsonBodyReason::InvalidData => {
                    Cow::Borrowed("JSON body contains invalid data")
                }
                InvalidJsonBodyReason::TooLarge => Cow::Borrowed("JSON body is too large"),
            },
            Self::InvalidUuidFormat { .. } => Cow::Borrowed("Invalid id format"),
            Self::QueryTimedOut => Cow::Borrowed("Database query timed out"),
            Self::InternalErrorWithMessage { message } => message.clone(),
            Self::InternalErrorWithReason { .. }
            | Self::InternalGenericError { .. }
            | Self::InternalDatabaseError { .. } => Cow::Borrowed("Internal server error"),
        }
    }
}

impl Display for EndpointError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest { message } => {
                write!(f, "Invalid request: {}.", message)
            }
            Self::NotFound { message } => {
                write!(f, "Not found: {}.", message)
            }
            Self::MissingJsonBody => {
                write!(f, "Expected a JSON body.")
            }
            Self::InvalidJsonBody { reason } => match reason {
                InvalidJsonBodyReason::NotJson => {
                    write!(f, "Invalid JSON body: not JSON.")
                }
                InvalidJsonBodyReason::InvalidData => {
                    write!(f, "Invalid JSON body: invalid data.")
                }
                InvalidJsonBodyReason::TooLarge => {
                    write!(f, "Invalid JSON body: too large.")
                }
            },
            Self::InvalidUuidFormat { error } => {
                write!(f, "Invalid UUID format: {}.", error)
            }
            Self::QueryTimedOut => {
                write!(f, "Database query timed out.")
            }
            Self::InternalErrorWithMessage { message } => {
                write!(f, "Internal server error (with message): {message}.")
            }
            Self::InternalErrorWithReason { reason } => {
                write!(f, "Internal server error (with reason): {reason}.")
            }
            Self::InternalGenericError { error } => {
                write!(f, "Internal server error (generic): {error:?}")
            }
            Self::InternalDatabaseError { error } => {
                write!(f, "Internal server error (database error): {error}.")
            }
        }
    }
}

impl ResponseError for EndpointError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MissingJsonBody => StatusCode::BAD_REQUEST,
            Self::InvalidJsonBody { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidUuidFormat { .. } => StatusCode::BAD_REQUEST,
            Self::QueryTimedOut => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalErrorWithMessage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalErrorWithReason { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalGenericError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalDatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::QueryTimedOut => {
                error!("A database query was cancelled by the statement timeout.");
            }
            Self::InternalErrorWithMessage { message } => {
                error!(client_facing_message = %message, "Internal server error.");
            }
            Self::InternalErrorWithReason { reason } => {
                error!(reason = %reason, "Internal server error.");
            }
            Self::InternalGenericError { error } => {
                error!(error = ?error, "Internal server error.");
            }
            Self::InternalDatabaseError { error } => {
                error!(error = %error, "Internal server error (database error).");
            }
            _ => {}
        }

        let status_code = self.status_code();

        let fallibly_built_response = EndpointResponseBuilder::new(status_code)
            .with_json_body(ErrorResponse::new(
                status_code.as_u16(),
                self.client_facing_message(),
            ))
            .build();

        fallibly_built_response.unwrap_or_else(|_| HttpResponse::InternalServerError().finish())
    }
}


impl From<sqlx::Error> for EndpointError {
    fn from(value: sqlx::Error) -> Self {
        if kamus_database::error_is_statement_timeout(&value) {
            return Self::QueryTimedOut;
        }

        Self::InternalDatabaseError { error: value }
    }
}

impl From<QueryError> for EndpointError {
    fn from(value: QueryError) -> Self {
        if value.is_statement_timeout() {
            return Self::QueryTimedOut;
        }

        match value {
            QueryError::SqlxError { error } => Self::InternalDatabaseError { error },
            QueryError::ModelError { reason } => Self::InternalErrorWithReason { reason },
            QueryError::DatabaseInconsistencyError { problem } => {
                Self::InternalErrorWithReason { reason: problem }
            }
        }
    }
}


/// Converts JSON extractor failures into [`EndpointError`]s, so that
/// malformed request bodies produce the same error shape as everything else.
///
/// Register with [`JsonConfig::error_handler`][actix_web::web::JsonConfig::error_handler]
/// when constructing the actix application.
pub fn handle_json_payload_error(
    error: actix_web::error::JsonPayloadError,
    _request: &HttpRequest,
) -> actix_web::Error {
    use actix_web::error::JsonPayloadError;

    let endpoint_error = match error {
        JsonPayloadError::ContentType => EndpointError::missing_json_body(),
        JsonPayloadError::Deserialize(error) => {
            if error.is_data() {
                EndpointError::invalid_json_body(InvalidJsonBodyReason::InvalidData)
            } else {
                EndpointError::invalid_json_body(InvalidJsonBodyReason::NotJson)
            }
        }
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            EndpointError::invalid_json_body(InvalidJsonBodyReason::TooLarge)
        }
        _ => EndpointError::invalid_json_body(InvalidJsonBodyReason::NotJson),
    };

    endpoint_error.into()
}




pub struct EndpointResponseBuilder {
    status_code: StatusCode,

    body: Option<Result<Vec<u8>, serde_json::Error>>,

    additional_headers: Vec<(HeaderName, HeaderValue)>,
}

impl EndpointResponseBuilder {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            body: None,
            additional_headers: Vec::with_capacity(1),
        }
    }

    #[inline]
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    #[inline]
    pub fn created() -> Self {
        Self::new(StatusCode::CREATED)
    }

    #[inline]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    pub fn with_json_body<D, S>(mut self, data: D) -> Self
    where
        S: Serialize,
        D: Borrow<S>,
    {
        let body = serde_json::to_vec(data.borrow());

        self.additional_headers.push((
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        ));

        Self {
            status_code: self.status_code,
            body: Some(body),
            additional_headers: self.additional_headers,
        }
    }

    pub fn build(self) -> Result<HttpResponse<BoxBody>, EndpointError> {
        let optional_body = match self.body {
            Some(body_or_error) => match body_or_error {
                Ok(body) => Some(body),
                Err(serialization_error) => {
                    return Err(EndpointError::internal_error(serialization_error))
                }
            },
            None => None,
        };


        let mut response_builder = HttpResponse::build(self.status_code);

        for (header_name, header_value) in self.additional_headers {
            response_builder.insert_header((header_name, header_value));
        }


        match optional_body {
            Some(body) => response_builder
                .message_body(body.boxed())
                // This will, however, never produce an error (`type Error = Infallible`),
                // see <https://docs.rs/actix-web/4.9.0/actix_web/body/trait.MessageBody.html#impl-MessageBody-for-Vec%3Cu8%3E>.
                .map_err(EndpointError::internal_error),
            None => response_builder
                .message_body(().boxed())
                // This will, however, never produce an error (`type Error = Infallible`),
                // see <https://docs.rs/actix-web/4.9.0/actix_web/body/trait.MessageBody.html#impl-MessageBody-for-()>.
                .map_err(EndpointError::internal_error),
        }
    }
}




/// Short for [`Result`]`<`[`HttpResponse`]`, `[`EndpointError`]`>`,
/// the return type of all endpoint handlers in this crate.
pub type EndpointResult<Body = BoxBody> = Result<HttpResponse<Body>, EndpointError>;



#[cfg(test)]
mod test {
    use super::*;

    fn response_status_and_json_body(error: EndpointError) -> (StatusCode, serde_json::Value) {
        let response = error.error_response();
        let status = response.status();

        let body_bytes = response.into_body().try_into_bytes().unwrap();
        let body = serde_json::from_slice(&body_bytes).unwrap();

        (status, body)
    }

    #[test]
    fn invalid_request_exposes_the_message_as_a_bad_request() {
        let (status, body) =
            response_status_and_json_body(EndpointError::invalid_request("All fields are required"));

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "status": 400, "message": "All fields are required" })
        );
    }

    #[test]
    fn not_found_exposes_the_message() {
        let (status, body) =
            response_status_and_json_body(EndpointError::not_found("note not found"));

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            serde_json::json!({ "status": 404, "message": "note not found" })
        );
    }

    #[test]
    fn internal_database_errors_do_not_leak_details() {
        let (status, body) = response_status_and_json_body(EndpointError::InternalDatabaseError {
            error: sqlx::Error::PoolClosed,
        });

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({ "status": 500, "message": "Internal server error" })
        );
    }

    #[test]
    fn internal_error_with_message_exposes_the_fixed_message() {
        let (status, body) = response_status_and_json_body(
            EndpointError::internal_error_with_message("Translation creation failed"),
        );

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({ "status": 500, "message": "Translation creation failed" })
        );
    }

    #[test]
    fn query_timeout_maps_to_service_unavailable() {
        let (status, body) = response_status_and_json_body(EndpointError::QueryTimedOut);

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body,
            serde_json::json!({ "status": 503, "message": "Database query timed out" })
        );
    }

    #[test]
    fn missing_json_body_maps_to_a_bad_request() {
        let (status, body) = response_status_and_json_body(EndpointError::missing_json_body());

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({ "status": 400, "message": "Expected a JSON body" })
        );
    }
}
