use tabscope_stats::information;

use super::{Categorical, check_index};
use crate::{error::Result, value::Value};

/// A column of free-form strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    values: Vec<String>,
}

impl From<Vec<String>> for Text {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

impl Text {
    /// # Errors
    ///
    /// Returns [`crate::error::DatasetError::TypeMismatch`] if any value is not text.
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        let values = values
            .into_iter()
            .map(Value::into_text)
            .collect::<Result<_>>()?;
        Ok(Self { values })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// # Errors
    ///
    /// Returns [`crate::error::DatasetError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&str> {
        check_index(index, self.len())?;
        Ok(&self.values[index])
    }

    /// # Errors
    ///
    /// Returns an index or type error without modifying the column.
    pub fn update(&mut self, index: usize, value: Value) -> Result<()> {
        check_index(index, self.len())?;
        self.values[index] = value.into_text()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a type error without modifying the column.
    pub fn set_data(&mut self, values: Vec<Value>) -> Result<()> {
        *self = Self::from_values(values)?;
        Ok(())
    }

    /// Most frequent value; ties go to the lexicographically smallest.
    #[must_use]
    pub fn mode(&self) -> Option<&str> {
        information::mode(self.values.iter().map(String::as_str))
    }

    #[must_use]
    pub fn entropy(&self) -> f64 {
        information::entropy(&self.values)
    }

    /// Converts to a categorical column over `domain`, or over the observed
    /// values when no domain is given.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::DatasetError::DomainViolation`] if a value is
    /// missing from `domain`.
    pub fn to_categorical(&self, domain: Option<Vec<String>>) -> Result<Categorical> {
        Categorical::new(self.values.clone(), domain)
    }
}
