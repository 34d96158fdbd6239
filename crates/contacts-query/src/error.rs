//! Query errors

use contacts_model::RowSourceError;
use contacts_where::WhereError;
use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while building or running a query
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Builder misuse (empty value list, constraint on a union query)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// No row source has been configured yet
    #[error("Contacts not initialized: no row source configured")]
    NotInitialized,

    /// The row source failed; passed through unchanged
    #[error(transparent)]
    RowSource(#[from] RowSourceError),
}

impl QueryError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<WhereError> for QueryError {
    fn from(error: WhereError) -> Self {
        Self::invalid_argument(error.to_string())
    }
}
