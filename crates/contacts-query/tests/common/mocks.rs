//! Mock row sources for testing

use contacts_model::{MemoryRowSource, Row, RowCursor, RowRequest, RowSource, RowSourceError};
use parking_lot::RwLock;
use std::sync::Arc;

/// Row source that delegates to a [`MemoryRowSource`] and records requests
pub struct RecordingRowSource {
    inner: MemoryRowSource,
    requests: RwLock<Vec<RowRequest>>,
}

impl RecordingRowSource {
    pub fn new(rows: impl IntoIterator<Item = Row>) -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryRowSource::with_rows(rows),
            requests: RwLock::new(Vec::new()),
        })
    }

    /// The wrapped in-memory source, for fault injection and cursor stats
    pub fn inner(&self) -> &MemoryRowSource {
        &self.inner
    }

    /// Every request issued so far
    pub fn requests(&self) -> Vec<RowRequest> {
        self.requests.read().clone()
    }

    /// Rendered selections of every request issued so far
    pub fn selections(&self) -> Vec<String> {
        self.requests
            .read()
            .iter()
            .map(|r| r.selection_text().unwrap_or_default())
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.read().len()
    }
}

impl RowSource for RecordingRowSource {
    fn query(&self, request: &RowRequest) -> Result<RowCursor<'_>, RowSourceError> {
        self.requests.write().push(request.clone());
        self.inner.query(request)
    }
}
