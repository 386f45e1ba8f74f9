//! Scalar cell values
//!
//! [`Value`] is the dynamically-typed currency between raw tabular input and
//! the typed attribute columns. Integers are widened to `f64` on conversion.

use crate::error::{DatasetError, Result};

/// The scalar type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[display("numeric")]
    Number,
    #[display("boolean")]
    Bool,
    #[display("text")]
    Text,
}

/// A single cell of a table or attribute.
///
/// The `Display` form is the string representation used when values are
/// compared as labels: numbers print in their shortest round-trip form and
/// booleans print as `True` / `False`.
#[derive(
    Debug, Clone, PartialEq, derive_more::From, derive_more::Display, serde::Serialize,
)]
#[serde(untagged)]
pub enum Value {
    #[display("{_0}")]
    Number(f64),
    #[display("{}", bool_label(*_0))]
    Bool(bool),
    #[display("{_0}")]
    Text(String),
}

impl Value {
    /// The scalar type of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
        }
    }

    pub(crate) fn into_number(self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(n),
            other => Err(other.mismatch(ValueKind::Number)),
        }
    }

    pub(crate) fn into_bool(self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(b),
            other => Err(other.mismatch(ValueKind::Bool)),
        }
    }

    pub(crate) fn into_text(self) -> Result<String> {
        match self {
            Value::Text(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::Text)),
        }
    }

    fn mismatch(&self, expected: ValueKind) -> DatasetError {
        DatasetError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    #[expect(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

/// String form of a boolean, as used by categorical conversion.
#[must_use]
pub fn bool_label(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
