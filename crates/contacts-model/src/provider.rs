//! Row source abstraction
//!
//! The row source is the one external capability the query engine needs: it
//! executes a kind-discriminated row query and yields rows ordered by the
//! requested sort column.

use crate::row::Row;
use contacts_where::Where;
use indexmap::IndexSet;

/// A lazily consumed stream of rows.
///
/// Dropping the cursor releases whatever resource backs it.
pub type RowCursor<'a> = Box<dyn Iterator<Item = Result<Row, RowSourceError>> + 'a>;

/// Trait for executing row queries against a data source
pub trait RowSource: Send + Sync {
    /// Run a query and return a cursor over the matching rows.
    ///
    /// Rows must come back in ascending order of `request.sort_order`.
    /// Unknown projected columns are absent from the rows rather than
    /// failing the whole query.
    fn query(&self, request: &RowRequest) -> Result<RowCursor<'_>, RowSourceError>;
}

/// A single row query: projection, filter and ordering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowRequest {
    /// Columns to return; empty means every column
    pub projection: IndexSet<String>,
    /// Filter; `None` selects every row
    pub selection: Option<Where>,
    /// Column to sort ascending by
    pub sort_order: Option<String>,
}

impl RowRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add columns to the projection
    pub fn with_projection<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projection.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn with_selection(mut self, selection: Where) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_sort_order(mut self, column: impl Into<String>) -> Self {
        self.sort_order = Some(column.into());
        self
    }

    /// The rendered filter text
    pub fn selection_text(&self) -> Option<String> {
        self.selection.as_ref().map(Where::render)
    }
}

/// Row source error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowSourceError {
    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = RowRequest::new()
            .with_projection(["contact_id", "mimetype"])
            .with_projection(["contact_id", "display_name"])
            .with_selection(Where::equal_to("display_name", "A"))
            .with_sort_order("display_name");

        assert_eq!(
            request.projection.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["contact_id", "mimetype", "display_name"]
        );
        assert_eq!(request.selection_text().as_deref(), Some("display_name='A'"));
        assert_eq!(request.sort_order.as_deref(), Some("display_name"));
    }
}
