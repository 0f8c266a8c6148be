//! Request validation tests for the HTTP layer.
//!
//! These spin up the full actix application on top of a lazily-initialized
//! connection pool. No PostgreSQL server is required: every request here is
//! resolved before any database query would run.

use std::path::PathBuf;

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::web::{self, JsonConfig};
use actix_web::{test, App};
use kamus::api::errors::handle_json_payload_error;
use kamus::api::{api_router, handle_unmatched_route};
use kamus::state::ApplicationStateInner;
use kamus_configuration::{
    Configuration, DatabaseConfiguration, HttpConfiguration, LoggingConfiguration,
};
use serde_json::{json, Value};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};


fn test_configuration() -> Configuration {
    Configuration {
        configuration_file_path: PathBuf::from("./data/configuration.toml"),
        logging: LoggingConfiguration {
            console_output_level_filter: "info".to_string(),
            log_file_output_level_filter: "info".to_string(),
            log_file_output_directory: PathBuf::from("./logs"),
        },
        http: HttpConfiguration {
            host: "127.0.0.1".to_string(),
            port: 8866,
        },
        database: DatabaseConfiguration {
            host: "127.0.0.1".to_string(),
            port: 5432,
            username: "kamus".to_string(),
            password: None,
            database_name: "kamus".to_string(),
            statement_cache_capacity: None,
            statement_timeout_milliseconds: None,
        },
    }
}

/// Builds application state whose connection pool has not connected yet
/// (and never will, as long as no endpoint reaches its database code).
fn lazy_application_state() -> web::Data<ApplicationStateInner> {
    let configuration = test_configuration();

    let connection_options = PgConnectOptions::new_without_pgpass()
        .host(&configuration.database.host)
        .port(configuration.database.port)
        .username(&configuration.database.username)
        .database(&configuration.database.database_name);

    let database_pool = PgPoolOptions::new().connect_lazy_with(connection_options);

    web::Data::new(ApplicationStateInner {
        configuration,
        database_pool,
    })
}

macro_rules! init_test_application {
    () => {
        test::init_service(
            App::new()
                .app_data(JsonConfig::default().error_handler(handle_json_payload_error))
                .app_data(lazy_application_state())
                .service(api_router())
                .default_service(web::route().to(handle_unmatched_route)),
        )
        .await
    };
}


#[actix_web::test]
async fn ping_returns_ok() {
    let application = init_test_application!();

    let request = test::TestRequest::get().uri("/health/ping").to_request();
    let response = test::call_service(&application, request).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({ "ok": true }));
}

#[actix_web::test]
async fn unmatched_routes_return_the_error_shape() {
    let application = init_test_application!();

    let request = test::TestRequest::get().uri("/no/such/route").to_request();
    let response = test::call_service(&application, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "status": 404, "message": "Route not found" })
    );
}

#[actix_web::test]
async fn translation_lookup_requires_langpair() {
    let application = init_test_application!();

    let request = test::TestRequest::get()
        .uri("/translation/get?q=ev")
        .to_request();
    let response = test::call_service(&application, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "status": 400, "message": "langpair is required" })
    );
}

#[actix_web::test]
async fn translation_lookup_rejects_unknown_language_pairs() {
    let application = init_test_application!();

    let request = test::TestRequest::get()
        .uri("/translation/get?langpair=en%7Cfr&q=ev")
        .to_request();
    let response = test::call_service(&application, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "status": 400,
            "message": "langpair must be \"tr|id\" or \"id|tr\""
        })
    );
}

#[actix_web::test]
async fn translation_creation_requires_both_fields() {
    let application = init_test_application!();

    let request = test::TestRequest::post()
        .uri("/translation/post")
        .set_json(json!({ "turkishWord": "ev" }))
        .to_request();
    let response = test::call_service(&application, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "status": 400, "message": "All fields are required" })
    );
}

#[actix_web::test]
async fn empty_translation_batches_are_accepted() {
    let application = init_test_application!();

    let request = test::TestRequest::post()
        .uri("/translation/batch")
        .set_json(json!([]))
        .to_request();
    let response = test::call_service(&application, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "message": "Translations have been created" })
    );
}

#[actix_web::test]
async fn note_deletion_requires_a_well_formed_id() {
    let application = init_test_application!();

    let request = test::TestRequest::delete()
        .uri("/translation/not-a-uuid")
        .to_request();
    let response = test::call_service(&application, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({ "status": 400, "message": "Id is required" }));
}

#[actix_web::test]
async fn note_update_requires_a_well_formed_id() {
    let application = init_test_application!();

    let request = test::TestRequest::patch()
        .uri("/translation/not-a-uuid")
        .set_json(json!({ "title": "Korku", "contents": "see: korku filmi" }))
        .to_request();
    let response = test::call_service(&application, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "status": 400, "message": "Invalid id format" })
    );
}

#[actix_web::test]
async fn note_update_requires_both_fields() {
    let application = init_test_application!();

    let request = test::TestRequest::patch()
        .uri("/translation/0191f6a8-5be4-7d2f-8fd2-3c1de338557a")
        .set_json(json!({ "title": "Korku" }))
        .to_request();
    let response = test::call_service(&application, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "status": 400, "message": "All fields are required" })
    );
}

#[actix_web::test]
async fn json_bodies_must_be_valid_json() {
    let application = init_test_application!();

    let request = test::TestRequest::post()
        .uri("/translation/post")
        .insert_header(ContentType::json())
        .set_payload("{ not json")
        .to_request();
    let response = test::call_service(&application, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "status": 400, "message": "Invalid JSON body" })
    );
}

#[actix_web::test]
async fn json_bodies_require_the_json_content_type() {
    let application = init_test_application!();

    let request = test::TestRequest::post()
        .uri("/translation/post")
        .set_payload(r#"{ "turkishWord": "ev", "indonesianTranslation": "rumah" }"#)
        .to_request();
    let response = test::call_service(&application, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({ "status": 400, "message": "Expected a JSON body" })
    );
}
