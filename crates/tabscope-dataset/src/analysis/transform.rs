//! In-place column transformations
//!
//! Discretization replaces a numerical column by a categorical one;
//! normalization and standardization rescale a numerical column in place.
//! The `*_all` forms apply to every numerical column and compute all results
//! before replacing anything, so a failure leaves the dataset untouched.

use std::str::FromStr;

use super::summary::PerColumn;
use crate::{
    attribute::{Attribute, Discretized, Numerical},
    dataset::Dataset,
    error::{DatasetError, Result},
};

/// Automatic binning strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BinningMethod {
    /// Intervals of equal width over `[min, max]`.
    #[display("width")]
    Width,
    /// Intervals holding the same number of rows.
    #[display("frequency")]
    Frequency,
}

impl FromStr for BinningMethod {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "width" => Ok(Self::Width),
            "frequency" => Ok(Self::Frequency),
            _ => Err(DatasetError::invalid_parameter(format!(
                "unknown discretization method '{s}' (expected width or frequency)"
            ))),
        }
    }
}

/// How to discretize a single column.
#[derive(Debug, Clone, PartialEq)]
pub enum Discretization {
    Binned { method: BinningMethod, num_bins: usize },
    Custom { cut_points: Vec<f64> },
}

impl Discretization {
    fn apply(&self, column: &Numerical) -> Result<Discretized> {
        match self {
            Discretization::Binned {
                method: BinningMethod::Width,
                num_bins,
            } => column.discretize_equal_width(*num_bins),
            Discretization::Binned {
                method: BinningMethod::Frequency,
                num_bins,
            } => column.discretize_equal_frequency(*num_bins),
            Discretization::Custom { cut_points } => column.discretize(cut_points),
        }
    }
}

impl Dataset {
    fn numerical(&self, name: &str, operation: &str) -> Result<&Numerical> {
        self.attribute(name)?.as_numerical().ok_or_else(|| {
            DatasetError::undefined(format!(
                "cannot {operation} non-numerical attribute '{name}'"
            ))
        })
    }

    fn numerical_mut(&mut self, name: &str, operation: &str) -> Result<&mut Numerical> {
        self.attribute_mut(name)?.as_numerical_mut().ok_or_else(|| {
            DatasetError::undefined(format!(
                "cannot {operation} non-numerical attribute '{name}'"
            ))
        })
    }

    fn numerical_names(&self) -> Vec<String> {
        self.attributes()
            .filter(|(_, attribute)| attribute.is_numerical())
            .map(|(name, _)| name.to_owned())
            .collect()
    }

    /// Replaces numerical column `name` by its discretization and returns the
    /// cut points used.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] for an unknown column,
    /// [`DatasetError::UndefinedOperation`] for a non-numerical or empty one,
    /// and [`DatasetError::InvalidParameter`] for bad bins or cut points.
    pub fn discretize(&mut self, name: &str, discretization: &Discretization) -> Result<Vec<f64>> {
        let Discretized {
            attribute,
            cut_points,
        } = discretization.apply(self.numerical(name, "discretize")?)?;
        self.replace_attribute(name, attribute.into())?;
        Ok(cut_points)
    }

    /// Discretizes every numerical column with the same method.
    ///
    /// Returns the cut points of each column; non-numerical columns map to
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns the first discretization error; no column is replaced then.
    pub fn discretize_all(
        &mut self,
        method: BinningMethod,
        num_bins: usize,
    ) -> Result<PerColumn<Vec<f64>>> {
        let discretization = Discretization::Binned { method, num_bins };
        let results = self
            .numerical_names()
            .into_iter()
            .map(|name| {
                let discretized = discretization.apply(self.numerical(&name, "discretize")?)?;
                Ok((name, discretized))
            })
            .collect::<Result<Vec<_>>>()?;

        let cut_points = PerColumn::collect(self, |name, _| {
            results
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, d)| d.cut_points.clone())
        });
        for (name, discretized) in results {
            self.replace_attribute(&name, Attribute::from(discretized.attribute))?;
        }
        Ok(cut_points)
    }

    /// Rescales numerical column `name` to `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] for an unknown column and
    /// [`DatasetError::UndefinedOperation`] for a non-numerical one.
    pub fn normalize(&mut self, name: &str) -> Result<()> {
        self.numerical_mut(name, "normalize")?.normalize();
        Ok(())
    }

    /// Rescales numerical column `name` to zero mean and unit variance.
    ///
    /// # Errors
    ///
    /// Fails like [`Dataset::normalize`].
    pub fn standardize(&mut self, name: &str) -> Result<()> {
        self.numerical_mut(name, "standardize")?.standardize();
        Ok(())
    }

    /// Normalizes every numerical column and returns their names.
    pub fn normalize_all(&mut self) -> Vec<String> {
        self.rescale_all(Numerical::normalize)
    }

    /// Standardizes every numerical column and returns their names.
    pub fn standardize_all(&mut self) -> Vec<String> {
        self.rescale_all(Numerical::standardize)
    }

    fn rescale_all(&mut self, f: fn(&mut Numerical)) -> Vec<String> {
        let names = self.numerical_names();
        for name in &names {
            if let Ok(column) = self.numerical_mut(name, "rescale") {
                f(column);
            }
        }
        names
    }
}
