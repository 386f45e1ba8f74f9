use tabscope_stats::correlation::UnknownCorrelationMethod;

use crate::value::ValueKind;

/// Errors raised by attribute and dataset operations.
///
/// Every operation that returns this error leaves its receiver unchanged.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum DatasetError {
    /// A value does not have the scalar type the column requires.
    #[display("type mismatch: expected {expected} value, got {found}")]
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
    },
    /// A value is outside the domain of a categorical column.
    #[display("value '{value}' is not in the categorical domain")]
    DomainViolation { value: String },
    /// An index does not address an existing value.
    #[display("index {index} is out of range for {len} values")]
    IndexOutOfRange { index: usize, len: usize },
    /// A column (or the class column) does not exist.
    #[display("{what} '{name}' not found")]
    NotFound { what: &'static str, name: String },
    /// A method, metric, comparator, bin count, cut point list or shape is invalid.
    #[display("invalid parameter: {reason}")]
    InvalidParameter { reason: String },
    /// The operation is not defined for the column types or state involved.
    #[display("undefined operation: {reason}")]
    UndefinedOperation { reason: String },
}

impl DatasetError {
    pub(crate) fn column_not_found(name: &str) -> Self {
        Self::NotFound {
            what: "attribute",
            name: name.to_owned(),
        }
    }

    pub(crate) fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    pub(crate) fn undefined(reason: impl Into<String>) -> Self {
        Self::UndefinedOperation {
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors that bulk operations treat as "not applicable".
    #[must_use]
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::UndefinedOperation { .. })
    }
}

impl From<UnknownCorrelationMethod> for DatasetError {
    fn from(err: UnknownCorrelationMethod) -> Self {
        Self::invalid_parameter(err.to_string())
    }
}

pub type Result<T, E = DatasetError> = std::result::Result<T, E>;
