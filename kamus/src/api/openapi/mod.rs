//! Defines commonly used OpenAPI responses
//! to be used in conjunction with the [`utoipa::path`] proc macro on actix handlers.


pub mod response;
