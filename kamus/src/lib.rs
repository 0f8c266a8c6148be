use std::time::Duration;

use kamus_configuration::DatabaseConfiguration;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};

pub mod api;
pub mod logging;
pub mod state;


/// Default `statement_timeout` applied to every pooled connection, in milliseconds.
/// Queries that run longer than this are cancelled by PostgreSQL.
pub const DEFAULT_STATEMENT_TIMEOUT_MILLISECONDS: u64 = 10_000;


pub async fn establish_database_connection_pool(
    database_configuration: &DatabaseConfiguration,
) -> Result<PgPool, sqlx::Error> {
    let statement_timeout_milliseconds = database_configuration
        .statement_timeout_milliseconds
        .unwrap_or(DEFAULT_STATEMENT_TIMEOUT_MILLISECONDS);

    let mut connection_options = PgConnectOptions::new_without_pgpass()
        .application_name(&format!("kamus-api_v{}", env!("CARGO_PKG_VERSION")))
        .statement_cache_capacity(
            database_configuration
                .statement_cache_capacity
                .unwrap_or(200),
        )
        .options([(
            "statement_timeout",
            statement_timeout_milliseconds.to_string(),
        )])
        .host(&database_configuration.host)
        .port(database_configuration.port)
        .username(&database_configuration.username)
        .database(&database_configuration.database_name);

    if let Some(password) = &database_configuration.password {
        connection_options = connection_options.password(password.as_str());
    }


    PgPoolOptions::new()
        .idle_timeout(Some(Duration::from_secs(60 * 20)))
        .max_lifetime(Some(Duration::from_secs(60 * 60)))
        .min_connections(1)
        .max_connections(10)
        .test_before_acquire(true)
        .connect_with(connection_options)
        .await
}
