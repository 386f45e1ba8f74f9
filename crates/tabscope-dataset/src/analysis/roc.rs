//! ROC analysis of numerical predictors against a boolean class

use tabscope_stats::roc::RocCurve;

use super::summary::PerColumn;
use crate::{
    dataset::Dataset,
    error::{DatasetError, Result},
};

impl Dataset {
    /// The class labels, checked for use as an ROC target.
    fn roc_target(&self) -> Result<&[bool]> {
        let name = self.class_name().ok_or_else(|| DatasetError::NotFound {
            what: "class attribute",
            name: "(unset)".to_owned(),
        })?;
        let labels = self
            .attribute(name)?
            .as_boolean()
            .ok_or_else(|| DatasetError::undefined(format!("class '{name}' must be boolean")))?
            .values();
        if !(labels.contains(&true) && labels.contains(&false)) {
            return Err(DatasetError::undefined(format!(
                "the ROC curve is not defined when class '{name}' holds a single value"
            )));
        }
        Ok(labels)
    }

    /// ROC curve of numerical column `predictor` against the boolean class.
    ///
    /// The curve starts at `(1, 1)` and ends at `(0, 0)`; see
    /// [`RocCurve::from_scores`]. Rows with a missing (`NaN`) score are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] if no class is set or `predictor`
    /// does not exist, and [`DatasetError::UndefinedOperation`] if the class
    /// is not boolean, holds a single value, or `predictor` is not numerical.
    pub fn fpr_tpr(&self, predictor: &str) -> Result<RocCurve> {
        let labels = self.roc_target()?;
        let scores = self
            .attribute(predictor)?
            .as_numerical()
            .ok_or_else(|| {
                DatasetError::undefined(format!(
                    "predictor '{predictor}' must be a numerical attribute"
                ))
            })?
            .values();
        RocCurve::from_scores(scores, labels).ok_or_else(|| {
            DatasetError::undefined("the ROC curve needs both classes among rows with a score")
        })
    }

    /// Area under the ROC curve of `predictor`.
    ///
    /// # Errors
    ///
    /// Fails like [`Dataset::fpr_tpr`].
    pub fn roc_auc(&self, predictor: &str) -> Result<f64> {
        self.fpr_tpr(predictor).map(|curve| curve.auc())
    }

    /// AUC of every numerical column; other columns map to `None`.
    ///
    /// # Errors
    ///
    /// Returns the class errors of [`Dataset::fpr_tpr`].
    pub fn roc_auc_all(&self) -> Result<PerColumn<f64>> {
        let labels = self.roc_target()?;
        Ok(PerColumn::collect(self, |_, attribute| {
            let scores = attribute.as_numerical()?.values();
            RocCurve::from_scores(scores, labels)
                .map(|curve| curve.auc())
        }))
    }
}
