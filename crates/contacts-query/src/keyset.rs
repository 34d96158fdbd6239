//! Candidate entity-key sets produced while resolving sub-queries

use indexmap::IndexSet;

/// The entity keys a query may still return
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySet {
    /// No restriction
    All,
    /// Exactly these keys, in first-seen order
    Keys(IndexSet<i64>),
}

impl KeySet {
    /// The empty set
    pub fn none() -> Self {
        Self::Keys(IndexSet::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Keys(keys) if keys.is_empty())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Keep only keys also present in `other`
    pub fn intersect(self, other: IndexSet<i64>) -> Self {
        match self {
            Self::All => Self::Keys(other),
            Self::Keys(keys) => {
                Self::Keys(keys.into_iter().filter(|k| other.contains(k)).collect())
            }
        }
    }

    /// Add every key of `other`
    pub fn union(self, other: KeySet) -> Self {
        match (self, other) {
            (Self::All, _) | (_, Self::All) => Self::All,
            (Self::Keys(mut keys), Self::Keys(other)) => {
                keys.extend(other);
                Self::Keys(keys)
            }
        }
    }

    /// The explicit keys, or `None` when unrestricted
    pub fn keys(&self) -> Option<&IndexSet<i64>> {
        match self {
            Self::All => None,
            Self::Keys(keys) => Some(keys),
        }
    }
}
