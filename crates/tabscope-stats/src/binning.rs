//! Interval binning for discretization
//!
//! This module computes cut points for the two unsupervised discretization
//! strategies and maps values onto the resulting intervals.
//!
//! # Interval Convention
//!
//! `k` sorted cut points `c1 <= ... <= ck` define `k + 1` intervals:
//!
//! ```text
//! (-infinity, c1], (c1, c2], ..., (c(k-1), ck], (ck, infinity)
//! ```
//!
//! Intervals are closed on the right. A value equal to a cut point belongs to
//! the interval that ends at that cut point; the first and last intervals are
//! unbounded.
//!
//! # Examples
//!
//! ```
//! use tabscope_stats::binning::{Intervals, equal_width_cut_points};
//!
//! let cuts = equal_width_cut_points(1.0, 10.0, 2);
//! assert_eq!(cuts, vec![5.5]);
//!
//! let intervals = Intervals::new(cuts);
//! assert_eq!(intervals.label_of(5.0), "(-infinity, 5.5]");
//! assert_eq!(intervals.label_of(6.0), "(5.5, infinity)");
//! ```

/// Cut points of an equal-width partition of `[min, max]` into `num_bins`
/// intervals.
///
/// The `num_bins - 1` cut points are `min + width * i` with
/// `width = (max - min) / num_bins`.
///
/// # Examples
///
/// ```
/// # use tabscope_stats::binning::equal_width_cut_points;
/// assert_eq!(equal_width_cut_points(0.0, 8.0, 4), vec![2.0, 4.0, 6.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn equal_width_cut_points(min: f64, max: f64, num_bins: usize) -> Vec<f64> {
    let width = (max - min) / num_bins as f64;
    (1..num_bins).map(|i| min + width * i as f64).collect()
}

/// Cut points of an equal-frequency partition of sorted values.
///
/// The values are split into `num_bins` buckets of `len / num_bins` elements,
/// the first `len % num_bins` buckets taking one extra element. Each cut point
/// is the last value of a bucket, so ties can produce repeated cut points.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted, or if `num_bins` is zero or larger
/// than the number of values.
///
/// # Examples
///
/// ```
/// # use tabscope_stats::binning::equal_frequency_cut_points;
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// // bucket sizes 4, 3, 3
/// assert_eq!(equal_frequency_cut_points(&values, 3), vec![4.0, 7.0]);
/// ```
#[must_use]
pub fn equal_frequency_cut_points(sorted_values: &[f64], num_bins: usize) -> Vec<f64> {
    assert!(
        sorted_values.is_sorted_by(|a, b| a.total_cmp(b).is_le()),
        "values must be sorted in ascending order"
    );
    assert!(
        (1..=sorted_values.len()).contains(&num_bins),
        "number of bins must be between 1 and the number of values"
    );

    let size = sorted_values.len() / num_bins;
    let rem = sorted_values.len() % num_bins;
    (1..num_bins)
        .map(|i| {
            // buckets before `i` hold `size + 1` elements while `i <= rem`
            let end = if i < rem {
                (size + 1) * i
            } else {
                size * i + rem
            };
            sorted_values[end - 1]
        })
        .collect()
}

/// A set of right-closed intervals defined by cut points.
#[derive(Debug, Clone, PartialEq)]
pub struct Intervals {
    cut_points: Vec<f64>,
    labels: Vec<String>,
}

impl Intervals {
    /// Builds the intervals for `cut_points`, sorting them first.
    ///
    /// # Panics
    ///
    /// Panics if `cut_points` is empty.
    #[must_use]
    pub fn new(mut cut_points: Vec<f64>) -> Self {
        assert!(!cut_points.is_empty(), "at least one cut point is required");
        cut_points.sort_by(f64::total_cmp);
        let labels = interval_labels(&cut_points);
        Self { cut_points, labels }
    }

    /// The sorted cut points.
    #[must_use]
    pub fn cut_points(&self) -> &[f64] {
        &self.cut_points
    }

    /// Labels of all intervals, from the lowest to the highest.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of the interval containing `value`.
    ///
    /// This is the position of the first cut point that is `>= value`. `NaN`
    /// sorts after every number and lands in the last interval.
    #[must_use]
    pub fn bucket_of(&self, value: f64) -> usize {
        if value.is_nan() {
            return self.cut_points.len();
        }
        self.cut_points.partition_point(|&c| c < value)
    }

    /// Label of the interval containing `value`.
    #[must_use]
    pub fn label_of(&self, value: f64) -> &str {
        &self.labels[self.bucket_of(value)]
    }
}

/// Labels for the intervals defined by sorted cut points.
///
/// Cut points print in their shortest form, except that integral values keep
/// a trailing `.0`.
///
/// ```
/// # use tabscope_stats::binning::interval_labels;
/// assert_eq!(
///     interval_labels(&[1.5, 3.0]),
///     vec!["(-infinity, 1.5]", "(1.5, 3.0]", "(3.0, infinity)"],
/// );
/// ```
#[must_use]
pub fn interval_labels(cut_points: &[f64]) -> Vec<String> {
    let bounds = cut_points
        .iter()
        .map(|&c| format_cut_point(c))
        .collect::<Vec<_>>();
    let Some((first, last)) = bounds.first().zip(bounds.last()) else {
        return vec![];
    };
    let mut labels = Vec::with_capacity(bounds.len() + 1);
    labels.push(format!("(-infinity, {first}]"));
    labels.extend(
        bounds
            .windows(2)
            .map(|pair| format!("({}, {}]", pair[0], pair[1])),
    );
    labels.push(format!("({last}, infinity)"));
    labels
}

fn format_cut_point(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_width_ten_values_two_bins() {
        let cuts = equal_width_cut_points(1.0, 10.0, 2);
        assert_eq!(cuts, vec![5.5]);
        let intervals = Intervals::new(cuts);
        assert_eq!(intervals.labels(), ["(-infinity, 5.5]", "(5.5, infinity)"]);
        for v in 1..=5 {
            assert_eq!(intervals.bucket_of(f64::from(v)), 0);
        }
        for v in 6..=10 {
            assert_eq!(intervals.bucket_of(f64::from(v)), 1);
        }
    }

    #[test]
    fn test_value_on_cut_point_goes_left() {
        let intervals = Intervals::new(vec![2.0, 4.0]);
        assert_eq!(intervals.label_of(2.0), "(-infinity, 2.0]");
        assert_eq!(intervals.label_of(2.000_001), "(2.0, 4.0]");
        assert_eq!(intervals.label_of(4.0), "(2.0, 4.0]");
        assert_eq!(intervals.label_of(100.0), "(4.0, infinity)");
        assert_eq!(intervals.label_of(-100.0), "(-infinity, 2.0]");
    }

    #[test]
    fn test_nan_goes_to_last_interval() {
        let intervals = Intervals::new(vec![1.0, 2.0]);
        assert_eq!(intervals.bucket_of(f64::NAN), 2);
    }

    #[test]
    fn test_intervals_sort_cut_points() {
        let intervals = Intervals::new(vec![3.0, 1.0, 2.0]);
        assert_eq!(intervals.cut_points(), [1.0, 2.0, 3.0]);
        assert_eq!(intervals.labels().len(), 4);
    }

    #[test]
    fn test_equal_frequency_even_split() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(equal_frequency_cut_points(&values, 2), vec![3.0]);
        assert_eq!(equal_frequency_cut_points(&values, 3), vec![2.0, 4.0]);
        assert_eq!(
            equal_frequency_cut_points(&values, 6),
            vec![1.0, 2.0, 3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn test_equal_frequency_with_remainder() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        // bucket sizes 3, 2, 2
        assert_eq!(equal_frequency_cut_points(&values, 3), vec![3.0, 5.0]);
        // bucket sizes 2, 2, 2, 1
        assert_eq!(equal_frequency_cut_points(&values, 4), vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_equal_frequency_ties_repeat_cut_points() {
        let values = [1.0, 1.0, 1.0, 1.0, 2.0];
        assert_eq!(equal_frequency_cut_points(&values, 3), vec![1.0, 1.0]);
    }

    #[test]
    fn test_every_value_lands_in_exactly_one_bucket() {
        let values = (0..37)
            .map(|v| f64::from(v) * 0.7 - 5.0)
            .collect::<Vec<_>>();
        for num_bins in 2..6 {
            let cuts = equal_width_cut_points(-5.0, 36.0 * 0.7 - 5.0, num_bins);
            let intervals = Intervals::new(cuts);
            let mut counts = vec![0; num_bins];
            for &v in &values {
                counts[intervals.bucket_of(v)] += 1;
            }
            assert_eq!(counts.iter().sum::<usize>(), values.len());
        }
    }

    #[test]
    fn test_label_number_format() {
        assert_eq!(
            interval_labels(&[-3.0, 0.25, 1e20]),
            [
                "(-infinity, -3.0]",
                "(-3.0, 0.25]",
                "(0.25, 100000000000000000000]",
                "(100000000000000000000, infinity)"
            ]
        );
    }

    #[test]
    fn test_labels_for_empty_cut_points() {
        assert!(interval_labels(&[]).is_empty());
    }
}
