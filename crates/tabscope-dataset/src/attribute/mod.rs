//! Typed attribute columns
//!
//! An [`Attribute`] is a homogeneously-typed, 0-indexed column. The variant is
//! chosen once, when the column is built from raw [`Value`]s, by
//! [`Attribute::classify`]; every later mutation is validated against that
//! variant and fails without touching the column.
//!
//! | Variant       | Storage       | Operations                                      |
//! |---------------|---------------|-------------------------------------------------|
//! | `Numerical`   | `Vec<f64>`    | normalize, standardize, discretize, mean/median/variance |
//! | `Boolean`     | `Vec<bool>`   | mode, entropy, conversion to categorical        |
//! | `Text`        | `Vec<String>` | mode, entropy, conversion to categorical        |
//! | `Categorical` | `Vec<String>` | as text, restricted to a fixed [`Domain`]        |
//!
//! # Examples
//!
//! ```
//! use tabscope_dataset::{attribute::Attribute, value::Value};
//!
//! let column = Attribute::classify(vec![Value::from(1.0), Value::from(2.5)]).unwrap();
//! assert!(column.is_numerical());
//! assert_eq!(column.mean().unwrap(), 1.75);
//!
//! let mixed = Attribute::classify(vec![Value::from(1.0), Value::from("a")]);
//! assert!(mixed.is_err());
//! ```

pub use self::{
    boolean::Boolean,
    categorical::{Categorical, Domain},
    numerical::{Discretized, Numerical},
    text::Text,
};
use crate::{
    error::{DatasetError, Result},
    value::Value,
};

mod boolean;
mod categorical;
mod numerical;
mod text;

/// The variant of an [`Attribute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    #[display("numerical")]
    Numerical,
    #[display("boolean")]
    Boolean,
    #[display("text")]
    Text,
    #[display("categorical")]
    Categorical,
}

/// A typed column.
#[derive(Debug, Clone, PartialEq, derive_more::From, derive_more::IsVariant)]
pub enum Attribute {
    Numerical(Numerical),
    Boolean(Boolean),
    Text(Text),
    Categorical(Categorical),
}

impl Attribute {
    /// Builds the attribute variant matching the scalar type of `values`.
    ///
    /// All numbers give a numerical column, all booleans a boolean column and
    /// all text (or no values at all) a text column. Categorical columns are
    /// never inferred; they come from explicit conversion.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::TypeMismatch`] if the values are not all of the
    /// same scalar type.
    pub fn classify(values: Vec<Value>) -> Result<Self> {
        let attribute = match values.first() {
            Some(Value::Number(_)) => Numerical::from_values(values)?.into(),
            Some(Value::Bool(_)) => Boolean::from_values(values)?.into(),
            Some(Value::Text(_)) | None => Text::from_values(values)?.into(),
        };
        Ok(attribute)
    }

    #[must_use]
    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Numerical(_) => AttributeKind::Numerical,
            Attribute::Boolean(_) => AttributeKind::Boolean,
            Attribute::Text(_) => AttributeKind::Text,
            Attribute::Categorical(_) => AttributeKind::Categorical,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Attribute::Numerical(a) => a.len(),
            Attribute::Boolean(a) => a.len(),
            Attribute::Text(a) => a.len(),
            Attribute::Categorical(a) => a.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<Value> {
        match self {
            Attribute::Numerical(a) => a.get(index).map(Value::from),
            Attribute::Boolean(a) => a.get(index).map(Value::from),
            Attribute::Text(a) => a.get(index).map(Value::from),
            Attribute::Categorical(a) => a.get(index).map(Value::from),
        }
    }

    /// Replaces the value at `index` after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::IndexOutOfRange`], [`DatasetError::TypeMismatch`]
    /// or, for categorical columns, [`DatasetError::DomainViolation`].
    pub fn update(&mut self, index: usize, value: Value) -> Result<()> {
        match self {
            Attribute::Numerical(a) => a.update(index, value),
            Attribute::Boolean(a) => a.update(index, value),
            Attribute::Text(a) => a.update(index, value),
            Attribute::Categorical(a) => a.update(index, value),
        }
    }

    /// Replaces every value, keeping the variant.
    ///
    /// # Errors
    ///
    /// Fails like [`Attribute::update`]; the previous data is kept on failure.
    pub fn set_data(&mut self, values: Vec<Value>) -> Result<()> {
        match self {
            Attribute::Numerical(a) => a.set_data(values),
            Attribute::Boolean(a) => a.set_data(values),
            Attribute::Text(a) => a.set_data(values),
            Attribute::Categorical(a) => a.set_data(values),
        }
    }

    /// All values in row order.
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        match self {
            Attribute::Numerical(a) => a.values().iter().copied().map(Value::from).collect(),
            Attribute::Boolean(a) => a.values().iter().copied().map(Value::from).collect(),
            Attribute::Text(a) => a.values().iter().map(|s| Value::from(s.as_str())).collect(),
            Attribute::Categorical(a) => {
                a.values().iter().map(|s| Value::from(s.as_str())).collect()
            }
        }
    }

    #[must_use]
    pub fn as_numerical(&self) -> Option<&Numerical> {
        match self {
            Attribute::Numerical(a) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_numerical_mut(&mut self) -> Option<&mut Numerical> {
        match self {
            Attribute::Numerical(a) => Some(a),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_boolean(&self) -> Option<&Boolean> {
        match self {
            Attribute::Boolean(a) => Some(a),
            _ => None,
        }
    }

    /// The values of a non-numerical column in their string form.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UndefinedOperation`] for numerical columns.
    pub fn labels(&self) -> Result<Vec<String>> {
        match self {
            Attribute::Numerical(_) => Err(self.not_applicable("labels")),
            Attribute::Boolean(a) => Ok(a.labels()),
            Attribute::Text(a) => Ok(a.values().to_vec()),
            Attribute::Categorical(a) => Ok(a.values().to_vec()),
        }
    }

    /// Sample mean of a numerical column.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UndefinedOperation`] for non-numerical columns.
    pub fn mean(&self) -> Result<f64> {
        self.numerical("mean").map(Numerical::mean)
    }

    /// Median of a numerical column.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UndefinedOperation`] for non-numerical columns.
    pub fn median(&self) -> Result<f64> {
        self.numerical("median").map(Numerical::median)
    }

    /// Sample variance of a numerical column.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UndefinedOperation`] for non-numerical columns.
    pub fn variance(&self) -> Result<f64> {
        self.numerical("variance").map(Numerical::variance)
    }

    /// Most frequent value of a non-numerical column, `None` when empty.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UndefinedOperation`] for numerical columns.
    pub fn mode(&self) -> Result<Option<Value>> {
        match self {
            Attribute::Numerical(_) => Err(self.not_applicable("mode")),
            Attribute::Boolean(a) => Ok(a.mode().map(Value::from)),
            Attribute::Text(a) => Ok(a.mode().map(Value::from)),
            Attribute::Categorical(a) => Ok(a.mode().map(Value::from)),
        }
    }

    /// Entropy in bits of a non-numerical column.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UndefinedOperation`] for numerical columns.
    pub fn entropy(&self) -> Result<f64> {
        match self {
            Attribute::Numerical(_) => Err(self.not_applicable("entropy")),
            Attribute::Boolean(a) => Ok(a.entropy()),
            Attribute::Text(a) => Ok(a.entropy()),
            Attribute::Categorical(a) => Ok(a.entropy()),
        }
    }

    /// Converts a non-numerical column to a categorical one.
    ///
    /// Boolean columns always get the domain `["True", "False"]` and ignore
    /// `domain`. Text columns use `domain` when given, otherwise the observed
    /// values. Categorical columns are copied, switching to `domain` when given.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UndefinedOperation`] for numerical columns and
    /// [`DatasetError::DomainViolation`] if a value is missing from `domain`.
    pub fn to_categorical(&self, domain: Option<Vec<String>>) -> Result<Categorical> {
        match self {
            Attribute::Numerical(_) => Err(self.not_applicable("categorical conversion")),
            Attribute::Boolean(a) => Ok(a.to_categorical()),
            Attribute::Text(a) => a.to_categorical(domain),
            Attribute::Categorical(a) => {
                let mut converted = a.clone();
                if let Some(domain) = domain {
                    converted.set_domain(domain)?;
                }
                Ok(converted)
            }
        }
    }

    fn numerical(&self, operation: &str) -> Result<&Numerical> {
        self.as_numerical()
            .ok_or_else(|| self.not_applicable(operation))
    }

    fn not_applicable(&self, operation: &str) -> DatasetError {
        DatasetError::undefined(format!(
            "{operation} is not defined for {} attributes",
            self.kind()
        ))
    }
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(DatasetError::IndexOutOfRange { index, len })
    }
}
