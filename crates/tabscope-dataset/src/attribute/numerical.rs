use tabscope_stats::{
    binning::{self, Intervals},
    descriptive::{self, DescriptiveStats},
};

use super::{Categorical, Domain, check_index};
use crate::{
    error::{DatasetError, Result},
    value::Value,
};

/// A column of real numbers.
///
/// `NaN` is a valid value and marks a missing cell. Statistics and cut points
/// are computed from the other values, and transforms leave `NaN` in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Numerical {
    values: Vec<f64>,
}

/// The result of discretizing a numerical column.
#[derive(Debug, Clone, PartialEq)]
pub struct Discretized {
    /// One interval label per row; the domain lists every interval in order.
    pub attribute: Categorical,
    /// The sorted cut points that define the intervals.
    pub cut_points: Vec<f64>,
}

impl From<Vec<f64>> for Numerical {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl Numerical {
    /// Builds a column from raw values.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::TypeMismatch`] if any value is not a number.
    pub fn from_values(values: Vec<Value>) -> Result<Self> {
        let values = values
            .into_iter()
            .map(Value::into_number)
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
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// # Errors
    ///
    /// Returns [`DatasetError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<f64> {
        check_index(index, self.len())?;
        Ok(self.values[index])
    }

    /// # Errors
    ///
    /// Returns [`DatasetError::IndexOutOfRange`] or [`DatasetError::TypeMismatch`].
    pub fn update(&mut self, index: usize, value: Value) -> Result<()> {
        check_index(index, self.len())?;
        self.values[index] = value.into_number()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`DatasetError::TypeMismatch`] if any value is not a number.
    pub fn set_data(&mut self, values: Vec<Value>) -> Result<()> {
        *self = Self::from_values(values)?;
        Ok(())
    }

    /// Smallest non-`NaN` value, `NaN` if there is none.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::NAN, f64::min)
    }

    /// Largest non-`NaN` value, `NaN` if there is none.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NAN, f64::max)
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        descriptive::mean(&self.values)
    }

    #[must_use]
    pub fn median(&self) -> f64 {
        descriptive::median(&self.values)
    }

    /// Sample variance (`n - 1` denominator).
    #[must_use]
    pub fn variance(&self) -> f64 {
        descriptive::sample_variance(&self.values)
    }

    /// Summary statistics, `None` if every value is missing.
    #[must_use]
    pub fn describe(&self) -> Option<DescriptiveStats> {
        DescriptiveStats::new(self.values.iter().copied())
    }

    /// Rescales the values in place to `(x - min) / (max - min)`.
    ///
    /// A constant column divides by zero and becomes `NaN`.
    pub fn normalize(&mut self) {
        let min = self.min();
        let range = self.max() - min;
        for v in &mut self.values {
            *v = (*v - min) / range;
        }
    }

    /// Rescales the values in place to `(x - mean) / std_dev`, using the sample
    /// standard deviation.
    ///
    /// Columns with fewer than two present values, or constant ones, become
    /// `NaN`.
    pub fn standardize(&mut self) {
        let mean = self.mean();
        let std_dev = descriptive::sample_std_dev(&self.values);
        for v in &mut self.values {
            *v = (*v - mean) / std_dev;
        }
    }

    /// Splits `[min, max]` into `num_bins` intervals of equal width.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidParameter`] if `num_bins < 2` and
    /// [`DatasetError::UndefinedOperation`] if every value is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tabscope_dataset::attribute::Numerical;
    /// let column = Numerical::from((1..=10).map(f64::from).collect::<Vec<_>>());
    /// let discretized = column.discretize_equal_width(2).unwrap();
    /// assert_eq!(discretized.cut_points, vec![5.5]);
    /// assert_eq!(discretized.attribute.values()[4], "(-infinity, 5.5]");
    /// assert_eq!(discretized.attribute.values()[5], "(5.5, infinity)");
    /// ```
    pub fn discretize_equal_width(&self, num_bins: usize) -> Result<Discretized> {
        self.check_discretizable(num_bins)?;
        let cut_points = binning::equal_width_cut_points(self.min(), self.max(), num_bins);
        Ok(self.bucketize(cut_points))
    }

    /// Splits the sorted present values into `num_bins` buckets holding the
    /// same number of rows (the first buckets take one extra row when the
    /// split is uneven). `num_bins` is clamped to the number of present values.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidParameter`] if `num_bins < 2` or a
    /// single value is present, and [`DatasetError::UndefinedOperation`] if
    /// every value is missing.
    pub fn discretize_equal_frequency(&self, num_bins: usize) -> Result<Discretized> {
        self.check_discretizable(num_bins)?;
        let sorted = descriptive::sorted_present(self.values.iter().copied());
        let num_bins = num_bins.min(sorted.len());
        if num_bins < 2 {
            return Err(DatasetError::invalid_parameter(format!(
                "cannot split {} value(s) into at least 2 bins",
                sorted.len()
            )));
        }
        let cut_points = binning::equal_frequency_cut_points(&sorted, num_bins);
        Ok(self.bucketize(cut_points))
    }

    /// Discretizes with caller-supplied cut points, sorted before use.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidParameter`] if `cut_points` is empty or
    /// contains a non-finite value.
    pub fn discretize(&self, cut_points: &[f64]) -> Result<Discretized> {
        if cut_points.is_empty() {
            return Err(DatasetError::invalid_parameter(
                "at least one cut point is required",
            ));
        }
        if let Some(bad) = cut_points.iter().find(|c| !c.is_finite()) {
            return Err(DatasetError::invalid_parameter(format!(
                "cut point {bad} is not finite"
            )));
        }
        Ok(self.bucketize(cut_points.to_vec()))
    }

    fn check_discretizable(&self, num_bins: usize) -> Result<()> {
        if num_bins < 2 {
            return Err(DatasetError::invalid_parameter(format!(
                "number of bins must be at least 2, got {num_bins}"
            )));
        }
        if self.values.iter().all(|v| v.is_nan()) {
            return Err(DatasetError::undefined("cannot discretize a column without values"));
        }
        Ok(())
    }

    fn bucketize(&self, cut_points: Vec<f64>) -> Discretized {
        let intervals = Intervals::new(cut_points);
        let labels = self
            .values
            .iter()
            .map(|&v| intervals.label_of(v).to_owned())
            .collect();
        let domain = Domain::new(intervals.labels().iter().cloned());
        Discretized {
            attribute: Categorical::with_domain(labels, domain),
            cut_points: intervals.cut_points().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn one_to_ten() -> Numerical {
        Numerical::from((1..=10).map(f64::from).collect::<Vec<_>>())
    }

    #[test]
    fn test_normalize_maps_to_unit_range() {
        let mut column = Numerical::from(vec![3.0, -1.0, 7.0, 5.0]);
        column.normalize();
        assert_eq!(column.values(), [0.5, 0.0, 1.0, 0.75]);
    }

    #[test]
    fn test_normalize_constant_is_nan() {
        let mut column = Numerical::from(vec![2.0, 2.0]);
        column.normalize();
        assert!(column.values().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_standardize_gives_zero_mean_unit_variance() {
        let mut column = Numerical::from(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        column.standardize();
        assert!(column.mean().abs() < EPS);
        assert!((column.variance() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_standardize_single_value_is_nan() {
        let mut column = Numerical::from(vec![4.0]);
        column.standardize();
        assert!(column.values()[0].is_nan());
    }

    #[test]
    fn test_equal_width_ten_values() {
        let discretized = one_to_ten().discretize_equal_width(2).unwrap();
        assert_eq!(discretized.cut_points, vec![5.5]);
        let labels = discretized.attribute.values();
        assert!(labels[..5].iter().all(|l| l == "(-infinity, 5.5]"));
        assert!(labels[5..].iter().all(|l| l == "(5.5, infinity)"));
        assert_eq!(
            discretized.attribute.domain().as_slice(),
            ["(-infinity, 5.5]", "(5.5, infinity)"]
        );
    }

    #[test]
    fn test_equal_frequency_ten_values() {
        let discretized = one_to_ten().discretize_equal_frequency(3).unwrap();
        assert_eq!(discretized.cut_points, vec![4.0, 7.0]);
        assert_eq!(discretized.attribute.values()[3], "(-infinity, 4.0]");
        assert_eq!(discretized.attribute.values()[4], "(4.0, 7.0]");
        assert_eq!(discretized.attribute.values()[9], "(7.0, infinity)");
    }

    #[test]
    fn test_equal_frequency_clamps_bins() {
        let column = Numerical::from(vec![3.0, 1.0, 2.0]);
        let discretized = column.discretize_equal_frequency(10).unwrap();
        assert_eq!(discretized.cut_points, vec![1.0, 2.0]);

        let single = Numerical::from(vec![1.0]);
        assert!(matches!(
            single.discretize_equal_frequency(4),
            Err(DatasetError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_discretize_rejects_bad_parameters() {
        let column = one_to_ten();
        assert!(matches!(
            column.discretize_equal_width(1),
            Err(DatasetError::InvalidParameter { .. })
        ));
        assert!(matches!(
            column.discretize(&[]),
            Err(DatasetError::InvalidParameter { .. })
        ));
        assert!(matches!(
            column.discretize(&[1.0, f64::NAN]),
            Err(DatasetError::InvalidParameter { .. })
        ));
        assert!(
            Numerical::default()
                .discretize_equal_width(2)
                .unwrap_err()
                .is_not_applicable()
        );
    }

    #[test]
    fn test_discretize_with_own_cut_points_is_idempotent() {
        let column = Numerical::from(vec![0.3, 9.1, 4.4, 2.2, 7.5, 5.0]);
        let first = column.discretize_equal_width(4).unwrap();
        let second = column.discretize(&first.cut_points).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_cut_points_are_sorted() {
        let column = Numerical::from(vec![0.0, 5.0, 10.0]);
        let discretized = column.discretize(&[6.0, 2.0]).unwrap();
        assert_eq!(discretized.cut_points, vec![2.0, 6.0]);
        assert_eq!(
            discretized.attribute.values(),
            ["(-infinity, 2.0]", "(2.0, 6.0]", "(6.0, infinity)"]
        );
    }

    #[test]
    fn test_every_row_falls_in_one_of_n_buckets() {
        let column = Numerical::from(
            (0..50)
                .map(|i| (f64::from(i) * 1.37).sin() * 10.0)
                .collect::<Vec<_>>(),
        );
        for num_bins in 2..7 {
            for discretized in [
                column.discretize_equal_width(num_bins).unwrap(),
                column.discretize_equal_frequency(num_bins).unwrap(),
            ] {
                let domain = discretized.attribute.domain();
                assert!(domain.len() <= num_bins);
                assert!(
                    discretized
                        .attribute
                        .values()
                        .iter()
                        .all(|l| domain.contains(l))
                );
            }
        }
    }

    #[test]
    fn test_missing_values_are_skipped() {
        let column = Numerical::from(vec![1.0, 2.0, f64::NAN]);
        assert_eq!(column.mean(), 1.5);
        assert_eq!(column.median(), 1.5);
        assert_eq!(column.variance(), 0.5);
        assert_eq!(column.describe().map(|stats| stats.count), Some(2));

        let mut column = Numerical::from(vec![1.0, 2.0, 3.0, f64::NAN]);
        column.standardize();
        assert_eq!(&column.values()[..3], [-1.0, 0.0, 1.0]);
        assert!(column.values()[3].is_nan());

        let mut column = Numerical::from(vec![1.0, 2.0, 3.0, f64::NAN]);
        column.normalize();
        assert_eq!(&column.values()[..3], [0.0, 0.5, 1.0]);
        assert!(column.values()[3].is_nan());
    }

    #[test]
    fn test_equal_frequency_ignores_missing_values() {
        let column = Numerical::from(vec![1.0, 2.0, f64::NAN, f64::NAN]);
        let discretized = column.discretize_equal_frequency(4).unwrap();
        assert_eq!(discretized.cut_points, vec![1.0]);
        assert_eq!(
            discretized.attribute.values(),
            [
                "(-infinity, 1.0]",
                "(1.0, infinity)",
                "(1.0, infinity)",
                "(1.0, infinity)"
            ]
        );

        let missing = Numerical::from(vec![f64::NAN; 3]);
        assert!(
            missing
                .discretize_equal_frequency(2)
                .unwrap_err()
                .is_not_applicable()
        );
        assert!(
            missing
                .discretize_equal_width(2)
                .unwrap_err()
                .is_not_applicable()
        );
    }

    #[test]
    fn test_statistics() {
        let column = Numerical::from(vec![4.0, 1.0, 3.0, 2.0]);
        assert_eq!(column.mean(), 2.5);
        assert_eq!(column.median(), 2.5);
        assert!((column.variance() - 5.0 / 3.0).abs() < EPS);
        assert_eq!(column.min(), 1.0);
        assert_eq!(column.max(), 4.0);
        assert!(Numerical::default().mean().is_nan());
        assert!(Numerical::from(vec![1.0]).variance().is_nan());
    }
}
