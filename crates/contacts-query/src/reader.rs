//! Row reader: one scoped row-source call per read
//!
//! The cursor obtained from the source never escapes a reader method, so it
//! is released on every exit path, including errors raised mid-stream.

use crate::error::QueryResult;
use contacts_model::{Row, RowRequest, RowSource, columns};
use contacts_where::Where;
use indexmap::IndexSet;
use log::debug;

/// Issues row requests against a source
pub struct RowReader<'s> {
    source: &'s dyn RowSource,
}

impl<'s> RowReader<'s> {
    pub fn new(source: &'s dyn RowSource) -> Self {
        Self { source }
    }

    /// Run a request and visit every row in order. Returns the row count.
    pub fn scan<F>(&self, request: &RowRequest, mut visit: F) -> QueryResult<usize>
    where
        F: FnMut(&Row),
    {
        debug!(
            "row request: columns [{}] where {} order by {}",
            request
                .projection
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            request.selection_text().as_deref().unwrap_or("<all>"),
            request.sort_order.as_deref().unwrap_or("<none>"),
        );

        let cursor = self.source.query(request)?;
        let mut count = 0;
        for row in cursor {
            visit(&row?);
            count += 1;
        }
        Ok(count)
    }

    /// Collect the distinct entity keys of the rows matching `selection`
    pub fn read_keys(&self, selection: Where) -> QueryResult<IndexSet<i64>> {
        let request = RowRequest::new()
            .with_projection([columns::CONTACT_ID])
            .with_selection(selection)
            .with_sort_order(columns::CONTACT_ID);

        let mut keys = IndexSet::new();
        self.scan(&request, |row| {
            if let Some(id) = row.get_i64(columns::CONTACT_ID) {
                keys.insert(id);
            }
        })?;
        debug!("resolved {} keys", keys.len());
        Ok(keys)
    }
}
