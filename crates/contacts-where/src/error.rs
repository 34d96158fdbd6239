//! Errors raised while building filter expressions

use thiserror::Error;

/// Result type for expression construction
pub type WhereResult<T> = Result<T, WhereError>;

/// Errors that can occur while building a filter expression
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WhereError {
    /// `IN` / `NOT IN` needs at least one value
    #[error("Empty value list for '{column}'")]
    EmptyValueList { column: String },
}

impl WhereError {
    /// Create an empty value list error
    pub fn empty_value_list(column: impl Into<String>) -> Self {
        Self::EmptyValueList {
            column: column.into(),
        }
    }
}
