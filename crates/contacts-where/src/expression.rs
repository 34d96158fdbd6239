//! Filter expression tree and its rendering
//!
//! A [`Where`] is an immutable boolean expression over `(column, operator,
//! literal)` terms. Every literal is quoted when the expression is rendered,
//! so caller strings never reach the filter text unescaped.

use crate::error::{WhereError, WhereResult};
use crate::operator::{Connective, Operator};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A boolean filter expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Where {
    /// `column OP literal`
    Compare {
        column: String,
        op: Operator,
        value: Value,
    },
    /// `column IN (v1, v2, ...)` or `column NOT IN (...)`; never empty
    List {
        column: String,
        op: Operator,
        values: Vec<Value>,
    },
    /// `( left AND right )` or `( left OR right )`
    Binary {
        connective: Connective,
        left: Box<Where>,
        right: Box<Where>,
    },
}

impl Where {
    fn compare(column: impl Into<String>, op: Operator, value: impl Into<Value>) -> Self {
        Self::Compare {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    fn pattern(column: impl Into<String>, op: Operator, pattern: String) -> Self {
        Self::compare(column, op, Value::Text(pattern))
    }

    fn list<I, V>(column: impl Into<String>, op: Operator, values: I) -> WhereResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let column = column.into();
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(WhereError::empty_value_list(column));
        }
        Ok(Self::List { column, op, values })
    }

    pub fn equal_to(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::Equal, value)
    }

    pub fn not_equal_to(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::NotEqual, value)
    }

    pub fn less_than(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::LessThan, value)
    }

    pub fn less_than_or_equal(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::LessThanOrEqual, value)
    }

    pub fn greater_than(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::GreaterThan, value)
    }

    pub fn greater_than_or_equal(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::GreaterThanOrEqual, value)
    }

    /// `column LIKE 'prefix%'`
    pub fn starts_with(column: impl Into<String>, prefix: impl fmt::Display) -> Self {
        Self::pattern(column, Operator::Like, format!("{}%", prefix))
    }

    /// `column LIKE '%suffix'`
    pub fn ends_with(column: impl Into<String>, suffix: impl fmt::Display) -> Self {
        Self::pattern(column, Operator::Like, format!("%{}", suffix))
    }

    /// `column LIKE '%substring%'`
    pub fn contains(column: impl Into<String>, substring: impl fmt::Display) -> Self {
        Self::pattern(column, Operator::Like, format!("%{}%", substring))
    }

    /// `column NOT LIKE 'prefix%'`
    pub fn does_not_start_with(column: impl Into<String>, prefix: impl fmt::Display) -> Self {
        Self::pattern(column, Operator::NotLike, format!("{}%", prefix))
    }

    pub fn is(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::Is, value)
    }

    pub fn is_not(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Operator::IsNot, value)
    }

    /// `column IS NULL`
    pub fn is_null(column: impl Into<String>) -> Self {
        Self::is(column, Value::Null)
    }

    /// `column IS NOT NULL`
    pub fn is_not_null(column: impl Into<String>) -> Self {
        Self::is_not(column, Value::Null)
    }

    /// `column IN (v1, v2, ...)`; fails on an empty list
    pub fn in_list<I, V>(column: impl Into<String>, values: I) -> WhereResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::list(column, Operator::In, values)
    }

    /// `column NOT IN (v1, v2, ...)`; fails on an empty list
    pub fn not_in_list<I, V>(column: impl Into<String>, values: I) -> WhereResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::list(column, Operator::NotIn, values)
    }

    /// Combine with another expression using AND
    pub fn and(self, other: Where) -> Where {
        Self::Binary {
            connective: Connective::And,
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    /// Combine with another expression using OR
    pub fn or(self, other: Where) -> Where {
        Self::Binary {
            connective: Connective::Or,
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    /// AND together every expression, left to right.
    /// Returns `None` for an empty input.
    pub fn all<I: IntoIterator<Item = Where>>(wheres: I) -> Option<Where> {
        wheres.into_iter().reduce(Where::and)
    }

    /// AND `other` onto an optional accumulated expression
    pub fn and_maybe(current: Option<Where>, other: Where) -> Where {
        match current {
            Some(current) => current.and(other),
            None => other,
        }
    }

    /// Columns referenced by this expression, in first-use order
    pub fn columns(&self) -> Vec<&str> {
        let mut columns = Vec::new();
        self.collect_columns(&mut columns);
        columns
    }

    fn collect_columns<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Compare { column, .. } | Self::List { column, .. } => {
                if !out.contains(&column.as_str()) {
                    out.push(column);
                }
            }
            Self::Binary { left, right, .. } => {
                left.collect_columns(out);
                right.collect_columns(out);
            }
        }
    }

    /// Render the filter text
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Self::Compare { column, op, value } => {
                out.push_str(column);
                out.push_str(op.symbol());
                out.push_str(&value.to_sql_literal());
            }
            Self::List { column, op, values } => {
                out.push_str(column);
                out.push_str(op.symbol());
                out.push('(');
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&value.to_sql_literal());
                }
                out.push(')');
            }
            Self::Binary {
                connective,
                left,
                right,
            } => {
                out.push_str("( ");
                left.render_into(out);
                out.push(' ');
                out.push_str(connective.keyword());
                out.push(' ');
                right.render_into(out);
                out.push_str(" )");
            }
        }
    }
}

impl fmt::Display for Where {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
