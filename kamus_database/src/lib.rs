use std::borrow::Cow;

use thiserror::Error;

#[macro_use]
pub(crate) mod macros;

pub mod entities;



/// SQLSTATE code the server reports when it cancels a statement,
/// which includes statements that ran into `statement_timeout`.
pub const QUERY_CANCELED_SQLSTATE: &str = "57014";


/// Returns `true` if the given error means the server cancelled
/// the statement, e.g. because it exceeded `statement_timeout`.
pub fn error_is_statement_timeout(error: &sqlx::Error) -> bool {
    let sqlx::Error::Database(database_error) = error else {
        return false;
    };

    database_error
        .code()
        .is_some_and(|code| code == QUERY_CANCELED_SQLSTATE)
}



#[derive(Debug, Error)]
pub enum QueryError {
    #[error("sqlx error")]
    SqlxError {
        #[from]
        #[source]
        error: sqlx::Error,
    },

    #[error("model error: {}", .reason)]
    ModelError { reason: Cow<'static, str> },

    #[error("database inconsistency: {}", .problem)]
    DatabaseInconsistencyError { problem: Cow<'static, str> },
}

impl QueryError {
    pub fn database_inconsistency<R>(problem: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        Self::DatabaseInconsistencyError {
            problem: problem.into(),
        }
    }

    /// Whether the underlying cause is the server cancelling
    /// the statement after `statement_timeout`.
    pub fn is_statement_timeout(&self) -> bool {
        match self {
            Self::SqlxError { error } => error_is_statement_timeout(error),
            _ => false,
        }
    }
}



pub type QueryResult<R, E = QueryError> = Result<R, E>;


pub trait IntoExternalModel {
    type ExternalModel;

    fn into_external_model(self) -> Self::ExternalModel;
}
