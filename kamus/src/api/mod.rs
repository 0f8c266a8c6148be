//! API definitions and annotations for the kamus backend.

use actix_web::http::StatusCode;
use actix_web::{web, Scope};
use kamus_core::api_models::ErrorResponse;

use self::errors::{EndpointResponseBuilder, EndpointResult};
use self::health::health_router;
use self::translation::translation_router;

pub mod errors;
pub mod health;
pub mod openapi;
pub mod translation;



/// Handles any request that did not match a registered route.
///
/// Register this as the application's default service; unknown paths
/// (and known paths requested with an unsupported method) then produce
/// the same JSON error shape as every other failure.
pub async fn handle_unmatched_route() -> EndpointResult {
    EndpointResponseBuilder::not_found()
        .with_json_body(ErrorResponse::new(
            StatusCode::NOT_FOUND.as_u16(),
            "Route not found",
        ))
        .build()
}


/// Router for the entire public API.
///
/// Made up of the `/health` and `/translation` sub-routes
/// (this service has no version prefix).
#[rustfmt::skip]
pub fn api_router() -> Scope {
    web::scope("")
        .service(health_router())
        .service(translation_router())
}
