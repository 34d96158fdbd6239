//! Contact queries over kind-tagged rows
//!
//! This crate ties the workspace together:
//! - [`Contacts`]: the entry point holding the row source and configuration
//! - re-exports of the filter, model and query crates
//! - the `contacts` command-line tool (`cli` feature)
//!
//! # Example
//!
//! ```
//! use contacts::{Contacts, Field, Kind, MemoryRowSource, Row};
//! use std::sync::Arc;
//!
//! let source = MemoryRowSource::with_rows([Row::new()
//!     .with("contact_id", 7)
//!     .with("mimetype", Kind::Email.tag())
//!     .with("display_name", "Ann Lee")
//!     .with("data1", "ann@example.com")]);
//!
//! let contacts = Contacts::new().with_source(Arc::new(source));
//! let found = contacts
//!     .query()?
//!     .where_contains(Field::Email, "@example")?
//!     .find()?;
//!
//! assert_eq!(found[0].id, 7);
//! # Ok::<(), contacts::QueryError>(())
//! ```

mod entry;

pub use entry::Contacts;

// Re-export all public APIs from internal crates
pub use contacts_model as model;
pub use contacts_query as query;
pub use contacts_where as filter;

// Convenience re-exports
pub use contacts_model::{
    Contact, Field, Kind, MemoryRowSource, NoOpRowSource, Row, RowRequest, RowSource,
    RowSourceError,
};
pub use contacts_query::{AggregationConfig, Query, QueryError, QueryResult, Selection};
pub use contacts_where::{Value, Where};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
