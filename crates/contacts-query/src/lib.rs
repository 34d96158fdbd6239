//! Contact queries and row aggregation
//!
//! This crate provides:
//! - [`Query`]: a builder for filtered contact queries, including `or` unions
//! - [`Aggregator`]: folds kind-tagged rows into [`Contact`] aggregates
//! - [`AggregationConfig`]: selectors for conflicting single-valued attributes
//!
//! # Example
//!
//! ```
//! use contacts_model::{Field, Kind, MemoryRowSource, Row};
//! use contacts_query::Query;
//! use std::sync::Arc;
//!
//! let source = MemoryRowSource::with_rows([Row::new()
//!     .with("contact_id", 1)
//!     .with("mimetype", Kind::Phone.tag())
//!     .with("display_name", "Ann")
//!     .with("data1", "+15551234567")]);
//!
//! let contacts = Query::new(Arc::new(source))
//!     .where_starts_with(Field::PhoneNumber, "+1555")?
//!     .include([Field::DisplayName, Field::PhoneNumber])
//!     .find()?;
//!
//! assert_eq!(contacts[0].display_name.as_deref(), Some("Ann"));
//! # Ok::<(), contacts_query::QueryError>(())
//! ```
//!
//! [`Contact`]: contacts_model::Contact

mod aggregator;
mod config;
mod error;
mod keyset;
mod query;
mod reader;

pub use aggregator::*;
pub use config::*;
pub use error::*;
pub use keyset::*;
pub use query::*;
pub use reader::*;
