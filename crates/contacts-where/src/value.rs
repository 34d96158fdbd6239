//! Scalar values shared by filter literals and row cells

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A scalar value as stored in a row cell or embedded in a filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value (SQL NULL)
    #[default]
    Null,
    /// Integer value (covers both int and long columns)
    Integer(i64),
    /// Text value
    Text(String),
}

impl Value {
    /// Check if the value is null
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get the text content, if this is a text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer content.
    ///
    /// Text holding a decimal integer is accepted as well, since row sources
    /// are loosely typed about numeric columns.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Null => None,
        }
    }

    /// Render the value as a literal of the filter language.
    ///
    /// Text is single-quoted with embedded quotes doubled.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Text(s) => quote(s),
        }
    }
}

/// Shapes a JSON cell may take before it is narrowed to a [`Value`]
#[derive(Deserialize)]
#[serde(untagged)]
enum ValueWire {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Other(#[allow(dead_code)] IgnoredAny),
}

impl From<ValueWire> for Value {
    fn from(wire: ValueWire) -> Self {
        match wire {
            ValueWire::Null | ValueWire::Other(_) => Self::Null,
            ValueWire::Bool(b) => Self::Integer(i64::from(b)),
            ValueWire::Integer(i) => Self::Integer(i),
            ValueWire::Float(f) => float_value(f),
            ValueWire::Text(s) => Self::Text(s),
        }
    }
}

// Whole floats inside the i64 range become integers, anything else text.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
fn float_value(f: f64) -> Value {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Value::Integer(f as i64)
    } else {
        Value::Text(f.to_string())
    }
}

impl<'de> Deserialize<'de> for Value {
    /// Booleans read as `0`/`1` and whole floats as integers. Arrays and
    /// objects read as null rather than failing the surrounding row.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ValueWire::deserialize(deserializer).map(Self::from)
    }
}

/// Quote a string as a filter literal, doubling every embedded `'`
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
