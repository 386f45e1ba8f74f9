//! Per-column statistics and their dataset-wide sweeps

use serde::{Serialize, Serializer};
use tabscope_stats::descriptive::DescriptiveStats;

use crate::{
    attribute::{Attribute, AttributeKind, Numerical},
    dataset::Dataset,
    error::Result,
    value::Value,
};

/// One optional entry per column, in dataset order.
///
/// `None` marks columns for which the statistic is not defined. Serializes
/// as a JSON object keyed by column name.
#[derive(Debug, Clone, PartialEq)]
pub struct PerColumn<T> {
    entries: Vec<(String, Option<T>)>,
}

impl<T> PerColumn<T> {
    pub(crate) fn collect<F>(dataset: &Dataset, mut f: F) -> Self
    where
        F: FnMut(&str, &Attribute) -> Option<T>,
    {
        let entries = dataset
            .attributes()
            .map(|(name, attribute)| (name.to_owned(), f(name, attribute)))
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, value)| value.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&T>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Serialize for PerColumn<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries = self.entries.iter().map(|(name, value)| (name, value));
        serializer.collect_map(entries)
    }
}

/// Every statistic of one column, `None` where it does not apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: AttributeKind,
    /// Count, range, center and spread of the present values of a numerical
    /// column.
    pub stats: Option<DescriptiveStats>,
    pub mode: Option<Value>,
    pub entropy: Option<f64>,
    /// AUC of the column as a predictor of the boolean class.
    pub auc: Option<f64>,
}

impl Dataset {
    /// # Errors
    ///
    /// Returns [`crate::error::DatasetError::NotFound`] for an unknown column
    /// and [`crate::error::DatasetError::UndefinedOperation`] for a
    /// non-numerical one.
    pub fn mean(&self, name: &str) -> Result<f64> {
        self.attribute(name)?.mean()
    }

    /// # Errors
    ///
    /// Fails like [`Dataset::mean`].
    pub fn median(&self, name: &str) -> Result<f64> {
        self.attribute(name)?.median()
    }

    /// # Errors
    ///
    /// Fails like [`Dataset::mean`].
    pub fn variance(&self, name: &str) -> Result<f64> {
        self.attribute(name)?.variance()
    }

    /// # Errors
    ///
    /// Returns [`crate::error::DatasetError::NotFound`] for an unknown column
    /// and [`crate::error::DatasetError::UndefinedOperation`] for a numerical
    /// one.
    pub fn mode(&self, name: &str) -> Result<Option<Value>> {
        self.attribute(name)?.mode()
    }

    /// # Errors
    ///
    /// Fails like [`Dataset::mode`].
    pub fn entropy(&self, name: &str) -> Result<f64> {
        self.attribute(name)?.entropy()
    }

    #[must_use]
    pub fn mean_all(&self) -> PerColumn<f64> {
        PerColumn::collect(self, |_, a| a.mean().ok())
    }

    #[must_use]
    pub fn median_all(&self) -> PerColumn<f64> {
        PerColumn::collect(self, |_, a| a.median().ok())
    }

    #[must_use]
    pub fn variance_all(&self) -> PerColumn<f64> {
        PerColumn::collect(self, |_, a| a.variance().ok())
    }

    /// Modes of the non-numerical columns; empty columns have no mode.
    #[must_use]
    pub fn mode_all(&self) -> PerColumn<Value> {
        PerColumn::collect(self, |_, a| a.mode().ok().flatten())
    }

    #[must_use]
    pub fn entropy_all(&self) -> PerColumn<f64> {
        PerColumn::collect(self, |_, a| a.entropy().ok())
    }

    /// Summarizes every column.
    ///
    /// The AUC is only filled in for numerical columns when the class is a
    /// boolean column holding both values.
    #[must_use]
    pub fn summarize(&self) -> Vec<ColumnSummary> {
        self.attributes()
            .map(|(name, attribute)| ColumnSummary {
                name: name.to_owned(),
                kind: attribute.kind(),
                stats: attribute.as_numerical().and_then(Numerical::describe),
                mode: attribute.mode().ok().flatten(),
                entropy: attribute.entropy().ok(),
                auc: self.roc_auc(name).ok(),
            })
            .collect()
    }
}
