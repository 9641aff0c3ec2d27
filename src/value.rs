use std::fmt;

use serde::Deserialize;

use crate::error::Fault;

/// A dynamically typed value, so mismatched operands can be built at runtime.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Text(_) => "text",
        }
    }

    /// `+` with the usual meaning for matching operands.
    ///
    /// Text and text concatenates, integer and integer adds. Any mixed pair is
    /// undefined and yields [`Fault::TypeMismatch`]. Integer overflow is
    /// reported the same way, since no result of the requested type exists.
    pub fn concat(&self, other: &Value) -> Result<Value, Fault> {
        let mismatch = || Fault::TypeMismatch {
            left: self.type_name(),
            right: other.type_name(),
        };

        match (self, other) {
            (Value::Text(a), Value::Text(b)) => Ok(Value::Text(format!("{a}{b}"))),
            (Value::Int(a), Value::Int(b)) => {
                a.checked_add(*b).map(Value::Int).ok_or_else(mismatch)
            }
            _ => Err(mismatch()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}
