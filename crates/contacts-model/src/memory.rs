//! In-memory row sources
//!
//! [`MemoryRowSource`] evaluates requests against rows held in memory. It
//! counts issued queries and open cursors so callers can check how many
//! reads a query made and that every cursor was released.

use crate::provider::{RowCursor, RowRequest, RowSource, RowSourceError};
use crate::row::Row;
use contacts_where::{Value, compare_values};
use log::debug;
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

/// Counters shared between a source and its cursors
#[derive(Debug, Default)]
pub struct CursorStats {
    queries: AtomicUsize,
    opened: AtomicUsize,
    open: AtomicUsize,
}

impl CursorStats {
    /// Number of queries issued
    pub fn queries(&self) -> usize {
        self.queries.load(AtomicOrdering::SeqCst)
    }

    /// Number of cursors handed out
    pub fn opened(&self) -> usize {
        self.opened.load(AtomicOrdering::SeqCst)
    }

    /// Number of cursors not yet released
    pub fn open(&self) -> usize {
        self.open.load(AtomicOrdering::SeqCst)
    }
}

#[derive(Debug, Clone, Default)]
struct Faults {
    query: Option<RowSourceError>,
    read_after: Option<(usize, RowSourceError)>,
}

/// Row source over rows held in memory
#[derive(Debug, Default)]
pub struct MemoryRowSource {
    rows: RwLock<Vec<Row>>,
    faults: RwLock<Faults>,
    stats: Arc<CursorStats>,
}

impl MemoryRowSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source holding the given rows
    pub fn with_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        let source = Self::new();
        source.extend(rows);
        source
    }

    /// Load rows from a JSON array of objects
    pub fn from_json(json: &str) -> Result<Self, RowSourceError> {
        let rows: Vec<Row> =
            serde_json::from_str(json).map_err(|e| RowSourceError::InvalidData(e.to_string()))?;
        Ok(Self::with_rows(rows))
    }

    /// Load rows from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RowSourceError> {
        let json = std::fs::read_to_string(path.as_ref())
            .map_err(|e| RowSourceError::ReadFailed(e.to_string()))?;
        Self::from_json(&json)
    }

    /// Append a row
    pub fn push(&self, row: Row) {
        self.rows.write().push(row);
    }

    /// Append rows
    pub fn extend(&self, rows: impl IntoIterator<Item = Row>) {
        self.rows.write().extend(rows);
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Query and cursor counters
    pub fn stats(&self) -> Arc<CursorStats> {
        Arc::clone(&self.stats)
    }

    /// Make every following query fail with `error`
    pub fn fail_queries(&self, error: RowSourceError) {
        self.faults.write().query = Some(error);
    }

    /// Make every following cursor fail with `error` after yielding `rows` rows
    pub fn fail_reads_after(&self, rows: usize, error: RowSourceError) {
        self.faults.write().read_after = Some((rows, error));
    }

    /// Remove injected failures
    pub fn clear_faults(&self) {
        *self.faults.write() = Faults::default();
    }
}

/// Ascending order with NULL (and absent) first, matching SQL `ORDER BY`
fn sort_cmp(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_values(a, b).unwrap_or(Ordering::Equal),
    }
}

impl RowSource for MemoryRowSource {
    fn query(&self, request: &RowRequest) -> Result<RowCursor<'_>, RowSourceError> {
        let faults = self.faults.read().clone();
        if let Some(error) = faults.query {
            return Err(error);
        }
        self.stats.queries.fetch_add(1, AtomicOrdering::SeqCst);

        let mut matched: Vec<Row> = self
            .rows
            .read()
            .iter()
            .filter(|row| request.selection.as_ref().is_none_or(|w| w.matches(*row)))
            .cloned()
            .collect();

        if let Some(sort) = &request.sort_order {
            matched.sort_by(|a, b| sort_cmp(a.get(sort), b.get(sort)));
        }

        if !request.projection.is_empty() {
            matched = matched
                .iter()
                .map(|row| row.project(&request.projection))
                .collect();
        }

        debug!(
            "memory source: {} rows for {}",
            matched.len(),
            request.selection_text().as_deref().unwrap_or("<all>")
        );

        Ok(Box::new(MemoryCursor::new(
            matched,
            Arc::clone(&self.stats),
            faults.read_after,
        )))
    }
}

struct MemoryCursor {
    rows: std::vec::IntoIter<Row>,
    stats: Arc<CursorStats>,
    fail_after: Option<(usize, RowSourceError)>,
    yielded: usize,
    failed: bool,
}

impl MemoryCursor {
    fn new(
        rows: Vec<Row>,
        stats: Arc<CursorStats>,
        fail_after: Option<(usize, RowSourceError)>,
    ) -> Self {
        stats.opened.fetch_add(1, AtomicOrdering::SeqCst);
        stats.open.fetch_add(1, AtomicOrdering::SeqCst);
        Self {
            rows: rows.into_iter(),
            stats,
            fail_after,
            yielded: 0,
            failed: false,
        }
    }
}

impl Iterator for MemoryCursor {
    type Item = Result<Row, RowSourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Some((limit, error)) = &self.fail_after {
            if self.yielded >= *limit {
                self.failed = true;
                return Some(Err(error.clone()));
            }
        }
        let row = self.rows.next()?;
        self.yielded += 1;
        Some(Ok(row))
    }
}

impl Drop for MemoryCursor {
    fn drop(&mut self) {
        self.stats.open.fetch_sub(1, AtomicOrdering::SeqCst);
    }
}

/// Row source that never returns rows
pub struct NoOpRowSource;

impl NoOpRowSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpRowSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSource for NoOpRowSource {
    fn query(&self, _request: &RowRequest) -> Result<RowCursor<'_>, RowSourceError> {
        Ok(Box::new(std::iter::empty()))
    }
}
