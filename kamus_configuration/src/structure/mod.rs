use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

mod database;
mod http;
mod logging;

pub use database::*;
pub use http::*;
pub use logging::*;

use crate::traits::{Resolve, TryResolve, TryResolveWithContext};
use crate::utilities::get_default_configuration_file_path;
use crate::{ConfigurationLoadingError, ConfigurationResolutionError};



#[derive(Deserialize, Debug)]
pub(crate) struct UnresolvedConfiguration {
    /// Logging-related configuration.
    logging: UnresolvedLoggingConfiguration,

    /// Configuration related to the HTTP server.
    http: UnresolvedHttpConfiguration,

    /// Configuration related to the database.
    database: UnresolvedDatabaseConfiguration,
}


/// The entire kamus backend configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// This is the file path this [`Configuration`] instance was loaded from.
    pub configuration_file_path: PathBuf,

    /// Logging-related configuration.
    pub logging: LoggingConfiguration,

    /// Configuration related to the HTTP server.
    pub http: HttpConfiguration,

    /// Configuration related to the database.
    pub database: DatabaseConfiguration,
}



pub(crate) struct ConfigurationResolutionContext {
    configuration_file_path: PathBuf,
}


impl TryResolveWithContext for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = ConfigurationResolutionContext;
    type Error = ConfigurationResolutionError;

    fn try_resolve_with_context(
        self,
        context: Self::Context,
    ) -> Result<Self::Resolved, Self::Error> {
        let logging = self.logging.try_resolve()?;
        let http = self.http.resolve();
        let database = self.database.resolve();

        Ok(Configuration {
            configuration_file_path: context.configuration_file_path,
            logging,
            http,
            database,
        })
    }
}


impl Configuration {
    /// Load the configuration from a specific file path.
    pub fn load_from_path<S: AsRef<Path>>(
        configuration_file_path: S,
    ) -> Result<Self, ConfigurationLoadingError> {
        // Read the configuration file into memory as a string.
        let configuration_string =
            fs::read_to_string(configuration_file_path.as_ref()).map_err(|error| {
                ConfigurationLoadingError::UnableToReadConfigurationFile {
                    path: configuration_file_path.as_ref().to_path_buf(),
                    error,
                }
            })?;

        // Parse the string into the [`UnresolvedConfiguration`] structure and then resolve it.
        let unresolved_configuration =
            toml::from_str::<UnresolvedConfiguration>(&configuration_string)
                .map_err(|error| ConfigurationLoadingError::ParsingError { error })?;

        let canonical_configuration_file_path = dunce::canonicalize(
            configuration_file_path.as_ref(),
        )
        .map_err(
            |error| ConfigurationLoadingError::UnableToCanonicalizePath {
                path: configuration_file_path.as_ref().to_path_buf(),
                error,
            },
        )?;

        let resolved_configuration =
            unresolved_configuration.try_resolve_with_context(ConfigurationResolutionContext {
                configuration_file_path: canonical_configuration_file_path,
            })?;

        Ok(resolved_configuration)
    }

    /// Load the configuration from the default path (`./data/configuration.toml`).
    pub fn load_from_default_path() -> Result<Self, ConfigurationLoadingError> {
        Configuration::load_from_path(get_default_configuration_file_path())
    }
}


#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE_CONFIGURATION: &str = r#"
        [logging]
        console_output_level_filter = "info"
        log_file_output_level_filter = "debug"
        log_file_output_directory = "./logs"

        [http]
        host = "127.0.0.1"
        port = 8866

        [database]
        host = "127.0.0.1"
        port = 5432
        username = "kamus"
        database_name = "kamus"
        statement_timeout_milliseconds = 5000
    "#;

    #[test]
    fn sample_configuration_parses_and_resolves() {
        let unresolved =
            toml::from_str::<UnresolvedConfiguration>(SAMPLE_CONFIGURATION).unwrap();

        let configuration = unresolved
            .try_resolve_with_context(ConfigurationResolutionContext {
                configuration_file_path: PathBuf::from("./data/configuration.toml"),
            })
            .unwrap();

        assert_eq!(configuration.http.host, "127.0.0.1");
        assert_eq!(configuration.http.port, 8866);

        assert_eq!(configuration.database.port, 5432);
        assert_eq!(configuration.database.password, None);
        assert_eq!(configuration.database.statement_cache_capacity, None);
        assert_eq!(
            configuration.database.statement_timeout_milliseconds,
            Some(5000)
        );

        assert_eq!(
            configuration.logging.log_file_output_directory,
            PathBuf::from("./logs")
        );
    }

    #[test]
    fn invalid_tracing_filter_fails_resolution() {
        let with_broken_filter = SAMPLE_CONFIGURATION.replace(
            "console_output_level_filter = \"info\"",
            "console_output_level_filter = \"kamus=not_a_level\"",
        );

        let unresolved = toml::from_str::<UnresolvedConfiguration>(&with_broken_filter).unwrap();

        let resolution_result = unresolved.try_resolve_with_context(ConfigurationResolutionContext {
            configuration_file_path: PathBuf::from("./data/configuration.toml"),
        });

        assert!(resolution_result.is_err());
    }
}
