//! In-process evaluation of filter expressions
//!
//! Row sources backed by a real query engine consume the rendered text.
//! In-memory sources evaluate the tree directly with the same semantics:
//! - any comparison involving NULL is false (only `IS` / `IS NOT` see NULL)
//! - integers and numeric text compare numerically, everything else as text
//! - `LIKE` is case-insensitive, `%` matches any run and `_` one character

use crate::expression::Where;
use crate::operator::{Connective, Operator};
use crate::value::Value;
use regex::RegexBuilder;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Column access used while evaluating an expression
pub trait ColumnLookup {
    /// Get a column value; `None` when the column is absent
    fn lookup(&self, column: &str) -> Option<&Value>;
}

impl ColumnLookup for HashMap<String, Value> {
    fn lookup(&self, column: &str) -> Option<&Value> {
        self.get(column)
    }
}

impl ColumnLookup for BTreeMap<String, Value> {
    fn lookup(&self, column: &str) -> Option<&Value> {
        self.get(column)
    }
}

const NULL: Value = Value::Null;

impl Where {
    /// Evaluate this expression against a row
    pub fn matches<L: ColumnLookup + ?Sized>(&self, row: &L) -> bool {
        match self {
            Self::Compare { column, op, value } => {
                let left = row.lookup(column).unwrap_or(&NULL);
                eval_compare(left, *op, value)
            }
            Self::List { column, op, values } => {
                let left = row.lookup(column).unwrap_or(&NULL);
                if left.is_null() {
                    return false;
                }
                let found = values.iter().any(|v| compare_values(left, v) == Some(Ordering::Equal));
                match op {
                    Operator::NotIn => !found,
                    _ => found,
                }
            }
            Self::Binary {
                connective,
                left,
                right,
            } => match connective {
                Connective::And => left.matches(row) && right.matches(row),
                Connective::Or => left.matches(row) || right.matches(row),
            },
        }
    }
}

fn eval_compare(left: &Value, op: Operator, right: &Value) -> bool {
    match op {
        Operator::Is => is_same(left, right),
        Operator::IsNot => !is_same(left, right),
        Operator::Like => like(left, right).unwrap_or(false),
        Operator::NotLike => like(left, right).map(|m| !m).unwrap_or(false),
        Operator::In | Operator::NotIn => {
            // A single-valued IN behaves like (in)equality
            let eq = compare_values(left, right).map(|o| o == Ordering::Equal);
            match (op, eq) {
                (_, None) => false,
                (Operator::In, Some(eq)) => eq,
                (_, Some(eq)) => !eq,
            }
        }
        _ => match compare_values(left, right) {
            None => false,
            Some(ordering) => match op {
                Operator::Equal => ordering == Ordering::Equal,
                Operator::NotEqual => ordering != Ordering::Equal,
                Operator::LessThan => ordering == Ordering::Less,
                Operator::LessThanOrEqual => ordering != Ordering::Greater,
                Operator::GreaterThan => ordering == Ordering::Greater,
                Operator::GreaterThanOrEqual => ordering != Ordering::Less,
                _ => false,
            },
        },
    }
}

fn is_same(left: &Value, right: &Value) -> bool {
    match (left.is_null(), right.is_null()) {
        (true, true) => true,
        (false, false) => compare_values(left, right) == Some(Ordering::Equal),
        _ => false,
    }
}

/// Compare two values; `None` when either side is NULL
pub fn compare_values(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Null, _) | (_, Value::Null) => None,
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (a, b) => match (a.as_i64(), b.as_i64()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            // Integers order before text that does not read as a number
            _ if matches!(a, Value::Integer(_)) => Some(Ordering::Less),
            _ => Some(Ordering::Greater),
        },
    }
}

fn like(left: &Value, pattern: &Value) -> Option<bool> {
    if left.is_null() {
        return None;
    }
    let pattern = pattern.as_str()?;

    let mut expr = String::with_capacity(pattern.len() + 8);
    expr.push('^');
    let mut literal = String::new();
    for c in pattern.chars() {
        match c {
            '%' | '_' => {
                expr.push_str(&regex::escape(&literal));
                literal.clear();
                expr.push_str(if c == '%' { ".*" } else { "." });
            }
            _ => literal.push(c),
        }
    }
    expr.push_str(&regex::escape(&literal));
    expr.push('$');

    let re = RegexBuilder::new(&expr)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .ok()?;
    Some(re.is_match(&left.to_string()))
}
