//! Filter operators with their rendered symbols

use serde::{Deserialize, Serialize};

/// Comparison operators supported by the filter language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Equality
    Equal,
    /// Inequality
    NotEqual,
    /// Less than
    LessThan,
    /// Less than or equal
    LessThanOrEqual,
    /// Greater than
    GreaterThan,
    /// Greater than or equal
    GreaterThanOrEqual,
    /// Pattern match (`%` and `_` wildcards)
    Like,
    /// Negated pattern match
    NotLike,
    /// Null-aware identity
    Is,
    /// Negated null-aware identity
    IsNot,
    /// Set membership
    In,
    /// Negated set membership
    NotIn,
}

impl Operator {
    /// Get the operator symbol, including the spacing it is rendered with
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::Like => " LIKE ",
            Self::NotLike => " NOT LIKE ",
            Self::Is => " IS ",
            Self::IsNot => " IS NOT ",
            Self::In => " IN ",
            Self::NotIn => " NOT IN ",
        }
    }

    /// Check if this operator takes a list of values
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    /// Check if this is an ordering comparison
    pub const fn is_ordering(&self) -> bool {
        matches!(
            self,
            Self::LessThan | Self::LessThanOrEqual | Self::GreaterThan | Self::GreaterThanOrEqual
        )
    }
}

/// Logical connectives joining two expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}
