use std::net::Ipv4Addr;

use actix_web::{App, HttpServer};
use kamus::api::health;
use kamus::api::translation;
use kamus::logging::initialize_tracing;
use kamus_core::api_models;
use miette::Context;
use miette::IntoDiagnostic;
use miette::Result;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi as OpenApiDerivable;
use utoipa_rapidoc::RapiDoc;


#[derive(OpenApiDerivable)]
#[openapi(
    paths(
        // kamus::api::health
        health::ping,

        // kamus::api::translation
        translation::lookup_translations,
        translation::create_translation_pair,
        translation::create_translation_pair_batch,
        translation::update_note,
        translation::delete_note,
    ),
    components(
        schemas(
            // kamus_core::api_models
            api_models::ErrorResponse,
            api_models::MessageResponse,
            api_models::PingResponse,
            api_models::TranslationMatch,
            api_models::TranslationLookupResponseData,
            api_models::TranslationLookupResponse,
            api_models::TranslationPairCreationRequest,
            api_models::NoteUpdateRequest,

            // kamus_core::language
            kamus_core::language::Language,
        ),
    ),
    info(
        title = "Kamus API",
        description = "Bilingual Turkish-Indonesian translation dictionary.",
        contact(
            name = "Kamus Team"
        )
    ),
    servers(
        (
            url = "http://127.0.0.1:8866/",
            description = "Local development server"
        )
    )
)]
struct APIDocumentation;


#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize logging and tracing.
    let guard = initialize_tracing(
        EnvFilter::builder().from_env_lossy(),
        EnvFilter::builder().from_env_lossy(),
        "./logs",
        "kamus-openapi.log",
    )
    .wrap_err("Failed to initialize tracing.")?;

    // Initialize compile-time generated OpenApi documentation.
    let open_api = APIDocumentation::openapi();

    // Start actix HTTP server to serve the documentation.
    // The interactive documentation page will be served at `/api-documentation`,
    // and the OpenAPI JSON file at `/api-documentation/openapi.json`.

    let server = HttpServer::new(move || {
        App::new().wrap(TracingLogger::default()).service(
            RapiDoc::with_openapi(
                "/api-documentation/openapi.json",
                open_api.clone(),
            )
            .path("/api-documentation"),
        )
    })
    .bind((Ipv4Addr::LOCALHOST, 8877))
    .into_diagnostic()
    .wrap_err("Failed to set up actix HTTP server.")?;

    info!("HTTP server initialized, running.");

    server
        .run()
        .await
        .into_diagnostic()
        .wrap_err("Errored while running actix HTTP server.")?;

    drop(guard);
    Ok(())
}
