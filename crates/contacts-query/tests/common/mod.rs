//! Common test utilities for query testing
//!
//! This module provides shared testing infrastructure including:
//! - A row source that records every request it receives
//! - Builders for realistic contact rows

#![allow(dead_code)]

pub mod mocks;
pub mod rows;

pub use mocks::*;
pub use rows::*;
