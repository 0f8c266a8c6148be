//! Tracing initialization (console output and a rolling daily log file).

use std::fs;
use std::path::Path;

use miette::{Context, IntoDiagnostic, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};


/// Guard for the tracing subsystem.
///
/// Keep this alive until the program exits; dropping it flushes
/// buffered log lines to the log file.
pub struct TracingGuard {
    #[allow(unused)]
    log_file_writer_guard: WorkerGuard,
}


/// Sets up the global tracing subscriber with two outputs:
/// formatted console output filtered by `console_output_filter`, and
/// a non-blocking daily-rolling log file in `log_file_output_directory`
/// filtered by `log_file_output_filter`.
///
/// The directory is created if it does not exist yet.
pub fn initialize_tracing(
    console_output_filter: EnvFilter,
    log_file_output_filter: EnvFilter,
    log_file_output_directory: impl AsRef<Path>,
    log_file_name_prefix: &str,
) -> Result<TracingGuard> {
    let log_file_output_directory = log_file_output_directory.as_ref();

    fs::create_dir_all(log_file_output_directory)
        .into_diagnostic()
        .wrap_err("Failed to create log file output directory.")?;


    let (log_file_writer, log_file_writer_guard) = tracing_appender::non_blocking(
        tracing_appender::rolling::daily(log_file_output_directory, log_file_name_prefix),
    );

    let console_output_layer = tracing_subscriber::fmt::layer().with_filter(console_output_filter);

    let log_file_output_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(log_file_writer)
        .with_filter(log_file_output_filter);


    tracing_subscriber::registry()
        .with(console_output_layer)
        .with(log_file_output_layer)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to initialize the tracing registry.")?;

    Ok(TracingGuard {
        log_file_writer_guard,
    })
}
