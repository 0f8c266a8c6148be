use actix_web::web::JsonConfig;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use kamus::api::errors::handle_json_payload_error;
use kamus::api::{api_router, handle_unmatched_route};
use kamus::logging::initialize_tracing;
use kamus::state::ApplicationStateInner;
use kamus_configuration::Configuration;
use miette::{Context, IntoDiagnostic, Result};
use tracing::info;

mod cli;

use crate::cli::CLIArgs;



#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments.
    let arguments = CLIArgs::parse();

    // Load configuration.
    let configuration = match arguments.configuration_file_path.as_ref() {
        Some(path) => {
            println!("Loading configuration: {}.", path.display());
            Configuration::load_from_path(path)
        }
        None => {
            println!("Loading configuration at default path.");
            Configuration::load_from_default_path()
        }
    }
    .into_diagnostic()
    .wrap_err("Failed to load configuration file.")?;


    let guard = initialize_tracing(
        configuration.logging.console_output_level_filter(),
        configuration.logging.log_file_output_level_filter(),
        &configuration.logging.log_file_output_directory,
        "kamus.log",
    )
    .wrap_err("Failed to initialize tracing.")?;

    info!(
        configuration_file_path = configuration
            .configuration_file_path
            .to_string_lossy()
            .as_ref(),
        "Configuration loaded."
    );


    // Initialize the database connection pool and the shared application state.
    let state = web::Data::new(
        ApplicationStateInner::new(configuration.clone())
            .await
            .into_diagnostic()
            .wrap_err("Failed to set up the application state.")?,
    );


    // Initialize and start the actix HTTP server.
    let server = HttpServer::new(move || {
        let json_extractor_config = JsonConfig::default().error_handler(handle_json_payload_error);

        // FIXME Modify permissive CORS to something more safe in production.
        let cors = actix_cors::Cors::permissive().expose_headers(vec![
            "Date",
            "Content-Type",
            "Content-Length",
        ]);

        App::new()
            .wrap(actix_web::middleware::NormalizePath::trim())
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(json_extractor_config)
            .app_data(state.clone())
            .service(api_router())
            .default_service(web::route().to(handle_unmatched_route))
    })
    .bind((
        configuration.http.host.as_str(),
        configuration.http.port as u16,
    ))
    .into_diagnostic()
    .wrap_err("Failed to set up actix HTTP server.")?;

    info!(
        host = configuration.http.host.as_str(),
        port = configuration.http.port as u16,
        "HTTP server initialized and running."
    );

    // Run HTTP server until stopped.
    server
        .run()
        .await
        .into_diagnostic()
        .wrap_err("Errored while running actix HTTP server.")?;


    drop(guard);

    Ok(())
}
