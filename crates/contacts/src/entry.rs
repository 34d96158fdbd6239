//! The library entry point

use contacts_model::RowSource;
use contacts_query::{AggregationConfig, Query, QueryError, QueryResult};
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Holds the row source and aggregation configuration queries run against.
///
/// A handle starts out unconfigured; [`Contacts::query`] fails with
/// [`QueryError::NotInitialized`] until a source is attached.
#[derive(Clone, Default)]
pub struct Contacts {
    source: Option<Arc<dyn RowSource>>,
    config: Arc<AggregationConfig>,
}

impl Contacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the row source, replacing any earlier one
    pub fn initialize(&mut self, source: Arc<dyn RowSource>) {
        debug!("contacts: row source attached");
        self.source = Some(source);
    }

    /// Builder-style [`Contacts::initialize`]
    pub fn with_source(mut self, source: Arc<dyn RowSource>) -> Self {
        self.initialize(source);
        self
    }

    /// Set the aggregation configuration handed to every new query
    pub fn with_config(mut self, config: AggregationConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.source.is_some()
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Start a new query
    pub fn query(&self) -> QueryResult<Query> {
        let source = self.source.clone().ok_or(QueryError::NotInitialized)?;
        Ok(Query::new(source).with_config(Arc::clone(&self.config)))
    }
}

impl fmt::Debug for Contacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Contacts")
            .field("initialized", &self.is_initialized())
            .field("config", &self.config)
            .finish()
    }
}
