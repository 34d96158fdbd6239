//! Aggregation configuration
//!
//! Decides which value a single-valued attribute keeps when several rows of
//! one contact disagree. Without a selector the last non-null value wins.

use contacts_model::Field;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Outcome of comparing the held value with a newly read one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    KeepCurrent,
    TakeCandidate,
}

/// Picks between the held value (first argument) and a candidate (second)
pub type Selector = Arc<dyn Fn(&str, &str) -> Selection + Send + Sync>;

/// Configuration handed to the aggregator
#[derive(Clone, Default)]
pub struct AggregationConfig {
    selectors: HashMap<Field, Selector>,
}

impl AggregationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a selector for a single-valued field (builder style)
    pub fn with_selector<F>(mut self, field: Field, selector: F) -> Self
    where
        F: Fn(&str, &str) -> Selection + Send + Sync + 'static,
    {
        self.set_selector(field, selector);
        self
    }

    /// Register a selector for a single-valued field
    pub fn set_selector<F>(&mut self, field: Field, selector: F)
    where
        F: Fn(&str, &str) -> Selection + Send + Sync + 'static,
    {
        self.selectors.insert(field, Arc::new(selector));
    }

    /// Get the selector registered for a field
    pub fn selector(&self, field: Field) -> Option<&Selector> {
        self.selectors.get(&field)
    }

    /// Fold a newly read value into a single-valued slot
    pub fn merge_scalar(&self, field: Field, slot: &mut Option<String>, candidate: &str) {
        match slot.as_mut() {
            Some(current) => {
                let take = match self.selectors.get(&field) {
                    Some(selector) => {
                        selector(current.as_str(), candidate) == Selection::TakeCandidate
                    }
                    None => true,
                };
                if take && current.as_str() != candidate {
                    *current = candidate.to_string();
                }
            }
            None => *slot = Some(candidate.to_string()),
        }
    }
}

impl fmt::Debug for AggregationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<&Field> = self.selectors.keys().collect();
        fields.sort();
        f.debug_struct("AggregationConfig")
            .field("selectors", &fields)
            .finish()
    }
}
