//! Rows returned by a row source

use contacts_where::{ColumnLookup, Value};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// One row: an ordered mapping from column name to value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column (builder style)
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Set a column
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Get a column value; absent columns and NULL both yield `None`
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns.get(column).filter(|v| !v.is_null())
    }

    /// Get a text column
    pub fn get_str(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(Value::as_str)
    }

    /// Get a text column as an owned string
    pub fn get_string(&self, column: &str) -> Option<String> {
        self.get_str(column).map(str::to_string)
    }

    /// Get a long column
    pub fn get_i64(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(Value::as_i64)
    }

    /// Get an int column; out-of-range values yield `None`
    pub fn get_i32(&self, column: &str) -> Option<i32> {
        self.get_i64(column).and_then(|v| i32::try_from(v).ok())
    }

    /// Check if the row carries a column at all
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Keep only the projected columns, in projection order
    pub fn project(&self, projection: &IndexSet<String>) -> Row {
        projection
            .iter()
            .filter_map(|column| {
                self.columns
                    .get(column)
                    .map(|value| (column.clone(), value.clone()))
            })
            .collect()
    }
}

impl ColumnLookup for Row {
    fn lookup(&self, column: &str) -> Option<&Value> {
        self.columns.get(column)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
