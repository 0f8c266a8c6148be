use serde::Deserialize;

use crate::traits::Resolve;


pub(crate) type UnresolvedDatabaseConfiguration = DatabaseConfiguration;

/// PostgreSQL-related configuration.
#[derive(Deserialize, Debug, Clone)]
pub struct DatabaseConfiguration {
    /// Host of the database.
    pub host: String,

    /// Port the database is listening at.
    pub port: u16,

    /// Login username.
    pub username: String,

    /// Login password.
    pub password: Option<String>,

    /// Database name.
    pub database_name: String,

    /// Maximum number of prepared statements cached per connection.
    /// Defaults to 200 when unset.
    pub statement_cache_capacity: Option<usize>,

    /// Server-side `statement_timeout` applied to every connection,
    /// in milliseconds. Defaults to 10000 when unset.
    pub statement_timeout_milliseconds: Option<u64>,
}

impl Resolve for UnresolvedDatabaseConfiguration {
    type Resolved = DatabaseConfiguration;

    fn resolve(self) -> Self::Resolved {
        self
    }
}
