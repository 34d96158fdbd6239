//! Contact data model
//!
//! This crate provides:
//! - Kind tags and the static field catalog
//! - Rows and the row source abstraction
//! - In-memory row sources
//! - The aggregated `Contact` and its value types

pub mod address;
pub mod catalog;
pub mod contact;
pub mod email;
pub mod event;
pub mod field;
pub mod kind;
pub mod memory;
pub mod phone;
pub mod provider;
pub mod row;

pub use address::*;
pub use catalog::{CATALOG, FieldSpec, INTERNAL_COLUMNS, columns};
pub use contact::*;
pub use email::*;
pub use event::*;
pub use field::*;
pub use kind::*;
pub use memory::*;
pub use phone::*;
pub use provider::*;
pub use row::*;

pub use contacts_where::Value;
