//! Pairwise dependency between columns
//!
//! Numerical columns are compared by correlation, non-numerical ones by
//! normalized mutual information. The matrix forms never fail: a pair of
//! columns the measure does not apply to, or a coefficient that is undefined
//! (for example on a constant column), is left empty.

use tabscope_stats::{
    correlation::{self, CorrelationMethod},
    information,
};

use crate::{
    dataset::Dataset,
    error::{DatasetError, Result},
};

/// A square matrix of optional values indexed by column name.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Matrix {
    pub names: Vec<String>,
    /// `cells[i][j]` relates `names[i]` to `names[j]`.
    pub cells: Vec<Vec<Option<f64>>>,
}

impl Matrix {
    fn build<F>(dataset: &Dataset, f: F) -> Self
    where
        F: Fn(&str, &str) -> Option<f64>,
    {
        let names = dataset.names().map(str::to_owned).collect::<Vec<_>>();
        let cells = names
            .iter()
            .map(|a| names.iter().map(|b| f(a, b)).collect())
            .collect();
        Self { names, cells }
    }

    /// The cell relating columns `a` and `b`.
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.names.iter().position(|n| n == a)?;
        let j = self.names.iter().position(|n| n == b)?;
        self.cells[i][j]
    }
}

impl Dataset {
    /// Correlation coefficient between two numerical columns.
    ///
    /// Returns `Ok(None)` when the coefficient is undefined, i.e. with fewer
    /// than two rows or a constant column.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] for unknown columns and
    /// [`DatasetError::UndefinedOperation`] unless both are numerical.
    pub fn correlation(&self, a: &str, b: &str, method: CorrelationMethod) -> Result<Option<f64>> {
        let (x, y) = (self.attribute(a)?, self.attribute(b)?);
        let (Some(x), Some(y)) = (x.as_numerical(), y.as_numerical()) else {
            return Err(DatasetError::undefined(
                "correlation is only defined between numerical attributes",
            ));
        };
        Ok(correlation::correlation(method, x.values(), y.values()))
    }

    /// Correlations between every pair of columns.
    #[must_use]
    pub fn correlation_matrix(&self, method: CorrelationMethod) -> Matrix {
        Matrix::build(self, |a, b| self.correlation(a, b, method).ok().flatten())
    }

    /// Normalized mutual information `2 * (H(a) - H(a|b)) / (H(a) + H(b))`
    /// between two non-numerical columns, comparing values by their string
    /// form.
    ///
    /// Returns `Ok(None)` when both columns are constant.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] for unknown columns and
    /// [`DatasetError::UndefinedOperation`] if either is numerical.
    pub fn normalized_mutual_information(&self, a: &str, b: &str) -> Result<Option<f64>> {
        let (x, y) = (self.attribute(a)?, self.attribute(b)?);
        let (Ok(x), Ok(y)) = (x.labels(), y.labels()) else {
            return Err(DatasetError::undefined(
                "mutual information is only defined between non-numerical attributes",
            ));
        };
        Ok(information::normalized_mutual_information(&x, &y))
    }

    /// Normalized mutual information between every pair of columns.
    #[must_use]
    pub fn mutual_information_matrix(&self) -> Matrix {
        Matrix::build(self, |a, b| {
            self.normalized_mutual_information(a, b).ok().flatten()
        })
    }
}
