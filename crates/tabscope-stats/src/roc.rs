//! Receiver operating characteristic curves
//!
//! A numeric score is turned into a binary classifier by thresholding: an
//! instance is predicted positive when its score is at or above the
//! threshold. Sweeping the threshold over every distinct score yields the ROC
//! curve, and the area under it summarizes how well the score separates the
//! two classes.
//!
//! # Curve Shape
//!
//! Instances with a missing (`NaN`) score are dropped, and the rest are
//! sorted by ascending score. The candidate thresholds are the
//! first sorted position of each distinct score, followed by a sentinel equal
//! to the number of instances ("predict everything negative"). The first
//! threshold (position 0) predicts everything positive, so every curve starts
//! at `(1, 1)`; the sentinel always yields `(0, 0)`. Points are therefore
//! ordered by decreasing false positive rate and no anchor points need to be
//! added.
//!
//! # Examples
//!
//! ```
//! use tabscope_stats::roc::RocCurve;
//!
//! let scores = [0.1, 0.4, 0.35, 0.8];
//! let labels = [false, false, true, true];
//! let curve = RocCurve::from_scores(&scores, &labels).unwrap();
//! assert_eq!(curve.auc(), 0.75);
//! ```

use std::iter;

/// Paired false/true positive rates of an ROC curve.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RocCurve {
    /// False positive rate at each threshold, non-increasing.
    pub fpr: Vec<f64>,
    /// True positive rate at each threshold, non-increasing.
    pub tpr: Vec<f64>,
}

impl RocCurve {
    /// Builds the curve of `scores` against the binary `labels`.
    ///
    /// # Returns
    ///
    /// `None` if the labels of the instances with a score do not contain both
    /// classes.
    ///
    /// # Panics
    ///
    /// Panics if `scores` and `labels` differ in length.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_scores(scores: &[f64], labels: &[bool]) -> Option<Self> {
        assert_eq!(
            scores.len(),
            labels.len(),
            "scores and labels must have the same length"
        );

        let mut order = iter::zip(scores.iter().copied(), labels.iter().copied())
            .filter(|(score, _)| !score.is_nan())
            .collect::<Vec<_>>();
        order.sort_by(|a, b| a.0.total_cmp(&b.0));

        let len = order.len();
        let total_pos = order.iter().filter(|(_, label)| *label).count();
        let total_neg = len - total_pos;
        if total_pos == 0 || total_neg == 0 {
            return None;
        }

        // first sorted position of each distinct score, then the sentinel
        let thresholds = (0..len)
            .filter(|&i| i == 0 || order[i - 1].0.total_cmp(&order[i].0).is_ne())
            .chain(iter::once(len));

        // `neg_before[i]` is the number of negatives at positions `< i`
        let mut neg_before = Vec::with_capacity(len + 1);
        neg_before.push(0);
        for (_, label) in &order {
            let last = *neg_before.last().unwrap_or(&0);
            neg_before.push(if *label { last } else { last + 1 });
        }

        let (fpr, tpr) = thresholds
            .map(|i| {
                let tn = neg_before[i];
                let fn_ = i - tn;
                let tp = total_pos - fn_;
                let fp = (len - i) - tp;
                (
                    fp as f64 / (fp + tn) as f64,
                    tp as f64 / (tp + fn_) as f64,
                )
            })
            .unzip();

        Some(Self { fpr, tpr })
    }

    /// Number of points on the curve.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fpr.len()
    }

    /// Returns `true` if the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fpr.is_empty()
    }

    /// Area under the curve by the trapezoidal rule.
    ///
    /// Each pair of consecutive points contributes
    /// `(fpr[i] - fpr[i+1]) * ((tpr[i] - tpr[i+1]) / 2 + tpr[i+1])`.
    #[must_use]
    pub fn auc(&self) -> f64 {
        trapezoid_auc(&self.fpr, &self.tpr)
    }
}

/// Trapezoidal area under a curve whose x coordinates are non-increasing.
///
/// # Panics
///
/// Panics if `fpr` and `tpr` differ in length.
#[must_use]
pub fn trapezoid_auc(fpr: &[f64], tpr: &[f64]) -> f64 {
    assert_eq!(
        fpr.len(),
        tpr.len(),
        "fpr and tpr must have the same length"
    );
    iter::zip(fpr.windows(2), tpr.windows(2))
        .map(|(x, y)| (x[0] - x[1]) * ((y[0] - y[1]) / 2.0 + y[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_class_is_undefined() {
        assert!(RocCurve::from_scores(&[1.0, 2.0], &[true, true]).is_none());
        assert_eq!(RocCurve::from_scores(&[1.0, 2.0], &[false, false]), None);
        assert!(RocCurve::from_scores(&[], &[]).is_none());
    }

    #[test]
    fn test_curve_is_anchored_at_corners() {
        let curve = RocCurve::from_scores(&[3.0, 1.0, 2.0, 5.0], &[true, false, false, true])
            .unwrap();
        assert_eq!(curve.fpr.first(), Some(&1.0));
        assert_eq!(curve.tpr.first(), Some(&1.0));
        assert_eq!(curve.fpr.last(), Some(&0.0));
        assert_eq!(curve.tpr.last(), Some(&0.0));
        assert_eq!(curve.len(), 5);
    }

    #[test]
    fn test_perfect_separation() {
        let scores = [0.1, 0.2, 0.3, 0.7, 0.8, 0.9];
        let labels = [false, false, false, true, true, true];
        let curve = RocCurve::from_scores(&scores, &labels).unwrap();
        assert!((curve.auc() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverted_separation() {
        let scores = [0.9, 0.8, 0.1, 0.2];
        let labels = [false, false, true, true];
        let curve = RocCurve::from_scores(&scores, &labels).unwrap();
        assert_eq!(curve.auc(), 0.0);
    }

    #[test]
    fn test_constant_predictor_is_half() {
        let scores = [4.0; 6];
        let labels = [true, false, true, false, false, true];
        let curve = RocCurve::from_scores(&scores, &labels).unwrap();
        assert_eq!(curve.fpr, vec![1.0, 0.0]);
        assert_eq!(curve.tpr, vec![1.0, 0.0]);
        assert_eq!(curve.auc(), 0.5);
    }

    #[test]
    fn test_ties_are_grouped() {
        // the tied scores 2.0 form a single threshold
        let scores = [1.0, 2.0, 2.0, 3.0];
        let labels = [false, true, false, true];
        let curve = RocCurve::from_scores(&scores, &labels).unwrap();
        assert_eq!(curve.fpr, vec![1.0, 0.5, 0.0, 0.0]);
        assert_eq!(curve.tpr, vec![1.0, 1.0, 0.5, 0.0]);
        assert_eq!(curve.auc(), 0.875);
    }

    #[test]
    fn test_missing_scores_are_dropped() {
        let scores = [f64::NAN, 0.2, 0.9, f64::NAN];
        let labels = [false, false, true, true];
        let curve = RocCurve::from_scores(&scores, &labels).unwrap();
        assert_eq!(curve.fpr, vec![1.0, 0.0, 0.0]);
        assert_eq!(curve.tpr, vec![1.0, 1.0, 0.0]);
        assert_eq!(curve.auc(), 1.0);

        assert_eq!(
            RocCurve::from_scores(&[f64::NAN; 3], &[true, false, true]),
            None
        );
        assert_eq!(
            RocCurve::from_scores(&[1.0, f64::NAN], &[true, false]),
            None
        );
    }

    #[test]
    fn test_rates_are_non_increasing() {
        let scores = [5.0, 3.0, 4.0, 1.0, 2.0, 2.0, 6.0, 0.5];
        let labels = [true, false, true, false, true, false, true, false];
        let curve = RocCurve::from_scores(&scores, &labels).unwrap();
        assert!(curve.fpr.windows(2).all(|w| w[0] >= w[1]));
        assert!(curve.tpr.windows(2).all(|w| w[0] >= w[1]));
        let auc = curve.auc();
        assert!((0.0..=1.0).contains(&auc));
    }

    #[test]
    fn test_serializes_as_parallel_arrays() {
        let curve = RocCurve::from_scores(&[1.0, 2.0], &[false, true]).unwrap();
        let json = serde_json::to_value(&curve).unwrap();
        assert_eq!(json["fpr"], serde_json::json!([1.0, 0.0, 0.0]));
        assert_eq!(json["tpr"], serde_json::json!([1.0, 1.0, 0.0]));
    }
}
