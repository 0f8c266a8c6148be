use std::path::PathBuf;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::error::LoggingConfigurationError;
use crate::traits::TryResolve;


#[derive(Deserialize, Clone, Debug)]
pub(super) struct UnresolvedLoggingConfiguration {
    console_output_level_filter: String,

    log_file_output_level_filter: String,

    log_file_output_directory: String,
}

#[derive(Clone, Debug)]
pub struct LoggingConfiguration {
    pub console_output_level_filter: String,

    pub log_file_output_level_filter: String,

    pub log_file_output_directory: PathBuf,
}

impl TryResolve for UnresolvedLoggingConfiguration {
    type Resolved = LoggingConfiguration;
    type Error = LoggingConfigurationError;

    fn try_resolve(self) -> Result<Self::Resolved, Self::Error> {
        // Validate the console and file level filters.
        EnvFilter::try_new(&self.console_output_level_filter).map_err(|error| {
            LoggingConfigurationError::InvalidTracingFilter {
                invalid_filter: self.console_output_level_filter.clone(),
                kind: "console_output_level_filter".into(),
                error,
            }
        })?;

        EnvFilter::try_new(&self.log_file_output_level_filter).map_err(|error| {
            LoggingConfigurationError::InvalidTracingFilter {
                invalid_filter: self.log_file_output_level_filter.clone(),
                kind: "log_file_output_level_filter".into(),
                error,
            }
        })?;

        let log_file_output_directory = PathBuf::from(self.log_file_output_directory);

        Ok(Self::Resolved {
            console_output_level_filter: self.console_output_level_filter,
            log_file_output_level_filter: self.log_file_output_level_filter,
            log_file_output_directory,
        })
    }
}

impl LoggingConfiguration {
    pub fn console_output_level_filter(&self) -> EnvFilter {
        // PANIC SAFETY: This is safe because we checked that the input is valid in `try_resolve`.
        EnvFilter::try_new(&self.console_output_level_filter).unwrap()
    }

    pub fn log_file_output_level_filter(&self) -> EnvFilter {
        // PANIC SAFETY: This is safe because we checked that the input is valid in `try_resolve`.
        EnvFilter::try_new(&self.log_file_output_level_filter).unwrap()
    }
}
