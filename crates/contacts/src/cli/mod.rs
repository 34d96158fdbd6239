//! CLI functionality for the contacts tool
//!
//! This module contains all CLI-related functionality including:
//! - Running queries over row files
//! - Listing the field catalog
//! - Output formatting
//! - Stderr logging through `tracing-subscriber`

pub mod fields;
pub mod find;
pub mod logger;
pub mod output;
