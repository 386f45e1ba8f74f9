//! Metric-based column selection

use std::str::FromStr;

use crate::{
    dataset::Dataset,
    error::{DatasetError, Result},
};

/// Per-column score used to select columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[display("entropy")]
    Entropy,
    #[display("auc")]
    Auc,
    #[display("variance")]
    Variance,
    #[display("mean")]
    Mean,
    #[display("median")]
    Median,
}

impl Metric {
    pub const ALL: [Self; 5] = [
        Self::Entropy,
        Self::Auc,
        Self::Variance,
        Self::Mean,
        Self::Median,
    ];
}

impl FromStr for Metric {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.to_string() == s)
            .ok_or_else(|| {
                DatasetError::invalid_parameter(format!(
                    "unknown metric '{s}' (expected entropy, auc, variance, mean or median)"
                ))
            })
    }
}

/// Comparison between a column's score and a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparator {
    #[display("lt")]
    Lt,
    #[display("gt")]
    Gt,
    #[display("le")]
    Le,
    #[display("ge")]
    Ge,
    #[display("eq")]
    Eq,
    #[display("neq")]
    Neq,
}

impl Comparator {
    pub const ALL: [Self; 6] = [
        Self::Lt,
        Self::Gt,
        Self::Le,
        Self::Ge,
        Self::Eq,
        Self::Neq,
    ];

    /// Evaluates `lhs <op> rhs`.
    #[expect(clippy::float_cmp)]
    #[must_use]
    pub fn holds(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Comparator::Lt => lhs < rhs,
            Comparator::Gt => lhs > rhs,
            Comparator::Le => lhs <= rhs,
            Comparator::Ge => lhs >= rhs,
            Comparator::Eq => lhs == rhs,
            Comparator::Neq => lhs != rhs,
        }
    }
}

impl FromStr for Comparator {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.to_string() == s)
            .ok_or_else(|| {
                DatasetError::invalid_parameter(format!(
                    "unknown comparator '{s}' (expected lt, gt, le, ge, eq or neq)"
                ))
            })
    }
}

impl Dataset {
    /// Removes every column whose `metric` does not satisfy
    /// `metric <comparator> threshold`, and returns the removed names in
    /// dataset order.
    ///
    /// Columns for which the metric is undefined or `NaN` are kept, and so is
    /// the class column.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidParameter`] for a `NaN` threshold. With
    /// [`Metric::Auc`] the class errors of [`Dataset::fpr_tpr`] propagate.
    /// Nothing is removed on error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tabscope_dataset::analysis::{Comparator, Metric};
    /// # use tabscope_dataset::{dataset::Dataset, table::Table, value::Value};
    /// let table = Table::new(vec![
    ///     ("wide".to_owned(), [0.0, 10.0].map(Value::from).to_vec()),
    ///     ("narrow".to_owned(), [1.0, 1.1].map(Value::from).to_vec()),
    /// ])
    /// .unwrap();
    /// let mut dataset = Dataset::from_table(table, None).unwrap();
    /// let removed = dataset.filter_by(Metric::Variance, Comparator::Ge, 1.0).unwrap();
    /// assert_eq!(removed, ["narrow"]);
    /// ```
    pub fn filter_by(
        &mut self,
        metric: Metric,
        comparator: Comparator,
        threshold: f64,
    ) -> Result<Vec<String>> {
        if threshold.is_nan() {
            return Err(DatasetError::invalid_parameter("threshold must not be NaN"));
        }

        let scores = match metric {
            Metric::Entropy => self.entropy_all(),
            Metric::Auc => self.roc_auc_all()?,
            Metric::Variance => self.variance_all(),
            Metric::Mean => self.mean_all(),
            Metric::Median => self.median_all(),
        };
        let removed = scores
            .iter()
            .filter(|&(name, score)| {
                Some(name) != self.class_name()
                    && score.is_some_and(|&s| !s.is_nan() && !comparator.holds(s, threshold))
            })
            .map(|(name, _)| name.to_owned())
            .collect::<Vec<_>>();

        for name in &removed {
            self.remove_attribute(name)?;
        }
        log::debug!(
            "filter {metric} {comparator} {threshold} removed {} attribute(s)",
            removed.len()
        );
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{table::Table, value::Value};

    fn dataset() -> Dataset {
        let table = Table::new(vec![
            (
                "low".to_owned(),
                [1.0, 1.0, 1.0, 2.0].map(Value::from).to_vec(),
            ),
            (
                "high".to_owned(),
                [0.0, 10.0, 5.0, 30.0].map(Value::from).to_vec(),
            ),
            (
                "cls".to_owned(),
                [false, true, false, true].map(Value::from).to_vec(),
            ),
            (
                "txt".to_owned(),
                ["a", "a", "b", "c"].map(Value::from).to_vec(),
            ),
            ("nan".to_owned(), [f64::NAN; 4].map(Value::from).to_vec()),
        ])
        .unwrap();
        Dataset::from_table(table, Some("cls")).unwrap()
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("auc".parse(), Ok(Metric::Auc));
        assert_eq!("neq".parse(), Ok(Comparator::Neq));
        assert!(matches!(
            "max".parse::<Metric>(),
            Err(DatasetError::InvalidParameter { .. })
        ));
        assert!(matches!(
            "ne".parse::<Comparator>(),
            Err(DatasetError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_comparators() {
        assert!(Comparator::Lt.holds(1.0, 2.0));
        assert!(!Comparator::Gt.holds(1.0, 2.0));
        assert!(Comparator::Le.holds(2.0, 2.0));
        assert!(Comparator::Ge.holds(2.0, 2.0));
        assert!(Comparator::Eq.holds(2.0, 2.0));
        assert!(Comparator::Neq.holds(2.0, 3.0));
    }

    #[test]
    fn test_filter_by_variance_keeps_class_and_undefined() {
        let mut dataset = dataset();
        let removed = dataset
            .filter_by(Metric::Variance, Comparator::Lt, 0.0)
            .unwrap();
        assert_eq!(removed, ["low", "high"]);
        assert_eq!(dataset.names().collect::<Vec<_>>(), ["cls", "txt", "nan"]);
        assert_eq!(dataset.class_name(), Some("cls"));
    }

    #[test]
    fn test_filter_by_entropy_never_removes_class() {
        let mut dataset = dataset();
        // the class has one bit of entropy, the text column 1.5
        let removed = dataset
            .filter_by(Metric::Entropy, Comparator::Gt, 1.2)
            .unwrap();
        assert!(removed.is_empty());
        let removed = dataset
            .filter_by(Metric::Entropy, Comparator::Lt, 1.2)
            .unwrap();
        assert_eq!(removed, ["txt"]);
        assert!(dataset.attribute("cls").is_ok());
    }

    #[test]
    fn test_filter_by_auc() {
        let mut dataset = dataset();
        // "high" separates the classes perfectly, "low" scores 0.75 and the
        // all-NaN column has no AUC
        let removed = dataset
            .filter_by(Metric::Auc, Comparator::Ge, 0.8)
            .unwrap();
        assert_eq!(removed, ["low"]);

        dataset.clear_class();
        assert!(
            dataset
                .filter_by(Metric::Auc, Comparator::Ge, 0.8)
                .is_err()
        );
        assert_eq!(dataset.num_attributes(), 4);
    }

    #[test]
    fn test_filter_by_variance_never_removes_numerical_class() {
        let mut dataset = dataset();
        dataset.set_class("low").unwrap();
        // both numerical columns, the class included, have a variance below 1000
        let removed = dataset
            .filter_by(Metric::Variance, Comparator::Ge, 1000.0)
            .unwrap();
        assert_eq!(removed, ["high"]);
        assert_eq!(dataset.class_name(), Some("low"));
        assert_eq!(
            dataset.names().collect::<Vec<_>>(),
            ["low", "cls", "txt", "nan"]
        );
    }

    #[test]
    fn test_nan_threshold_is_rejected() {
        let mut dataset = dataset();
        assert!(matches!(
            dataset.filter_by(Metric::Mean, Comparator::Gt, f64::NAN),
            Err(DatasetError::InvalidParameter { .. })
        ));
        assert_eq!(dataset.num_attributes(), 5);
    }

    #[test]
    fn test_uninitialized_dataset_removes_nothing() {
        let mut dataset = Dataset::default();
        assert_eq!(
            dataset.filter_by(Metric::Mean, Comparator::Gt, 0.0),
            Ok(vec![])
        );
    }
}
