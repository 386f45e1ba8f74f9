use tabscope_stats::information;

use super::{Categorical, Domain, check_index};
use crate::{
    error::Result,
    value::{Value, bool_label},
};

/// A column of booleans.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Boolean {
    values: Vec<bool>,
}

impl From<Vec<bool>> for Boolean {
    fn from(values: Vec<bool>) -> Self {
        Self { values }
    }
}

impl Boolean {
    /// # Errors
    ///
    /// Returns [`crate::error::DatasetError::TypeMismatch`] if any value is not a boolean.
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        let values = values
            .into_iter()
            .map(Value::into_bool)
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
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// # Errors
    ///
    /// Returns [`crate::error::DatasetError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<bool> {
        check_index(index, self.len())?;
        Ok(self.values[index])
    }

    /// # Errors
    ///
    /// Returns an index or type error without modifying the column.
    pub fn update(&mut self, index: usize, value: Value) -> Result<()> {
        check_index(index, self.len())?;
        self.values[index] = value.into_bool()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns a type error without modifying the column.
    pub fn set_data(&mut self, values: Vec<Value>) -> Result<()> {
        *self = Self::from_values(values)?;
        Ok(())
    }

    /// Most frequent value; `false` wins a tie.
    #[must_use]
    pub fn mode(&self) -> Option<bool> {
        information::mode(self.values.iter().copied())
    }

    #[must_use]
    pub fn entropy(&self) -> f64 {
        information::entropy(self.values.iter().copied())
    }

    /// The values as `"True"` / `"False"` labels.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|&b| bool_label(b).to_owned())
            .collect()
    }

    /// Converts to a categorical column over exactly `["True", "False"]`.
    #[must_use]
    pub fn to_categorical(&self) -> Categorical {
        let domain = Domain::new([true, false].map(|b| bool_label(b).to_owned()));
        Categorical::with_domain(self.labels(), domain)
    }
}
