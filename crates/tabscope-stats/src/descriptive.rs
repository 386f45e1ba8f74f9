//! Descriptive statistics over numeric values
//!
//! `NaN` marks a missing value. Every function here skips it, so a slice with
//! missing entries is summarized from the values that are present.

/// Descriptive statistics summarizing a numeric column.
///
/// This structure contains the measures of central tendency and dispersion
/// used by numerical attributes. Dispersion uses the unbiased sample
/// estimator (`n - 1` in the denominator).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DescriptiveStats {
    /// The number of non-`NaN` values summarized.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean of the dataset.
    pub mean: f64,
    /// The median of the dataset (mean of the two middle values for even counts).
    pub median: f64,
    /// The sample variance of the dataset. `NaN` when there is a single value.
    pub variance: f64,
    /// The sample standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values, skipping `NaN`.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if at least one value is not `NaN`
    /// * `None` - otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// # use tabscope_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, f64::NAN, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.variance, 2.5);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let sorted = sorted_present(values);
        let min = *sorted.first()?;
        let max = *sorted.last()?;
        let variance = sample_variance(&sorted);

        Some(Self {
            count: sorted.len(),
            min,
            max,
            mean: mean(&sorted),
            median: median_of_sorted(&sorted),
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

/// The non-`NaN` values, sorted ascending.
#[must_use]
pub fn sorted_present<I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sorted = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .collect::<Vec<_>>();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn present(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().filter(|v| !v.is_nan())
}

/// Arithmetic mean of the non-`NaN` values. `NaN` if there are none.
///
/// ```
/// # use tabscope_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
/// assert_eq!(mean(&[1.0, f64::NAN, 3.0]), 2.0);
/// assert!(mean(&[]).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    let (sum, count) = present(values).fold((0.0, 0_usize), |(sum, count), v| {
        (sum + v, count + 1)
    });
    if count == 0 {
        return f64::NAN;
    }
    sum / count as f64
}

/// Median of the non-`NaN` values. `NaN` if there are none.
///
/// ```
/// # use tabscope_stats::descriptive::median;
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
/// assert_eq!(median(&[1.0, 2.0, f64::NAN]), 1.5);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    median_of_sorted(&sorted_present(values.iter().copied()))
}

fn median_of_sorted(sorted_values: &[f64]) -> f64 {
    let n = sorted_values.len();
    match n {
        0 => f64::NAN,
        _ if n % 2 == 1 => sorted_values[n / 2],
        _ => f64::midpoint(sorted_values[n / 2 - 1], sorted_values[n / 2]),
    }
}

/// Unbiased sample variance (`n - 1` denominator) of the non-`NaN` values.
///
/// Returns `NaN` when fewer than two values are present.
///
/// ```
/// # use tabscope_stats::descriptive::sample_variance;
/// assert_eq!(sample_variance(&[1.0, 2.0, 3.0, 4.0]), 5.0 / 3.0);
/// assert!(sample_variance(&[1.0, f64::NAN]).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn sample_variance(values: &[f64]) -> f64 {
    let n = present(values).count();
    if n < 2 {
        return f64::NAN;
    }
    let mean = mean(values);
    present(values).map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64
}

/// Unbiased sample standard deviation of the non-`NaN` values.
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert!(DescriptiveStats::new(Vec::new()).is_none());
        assert!(mean(&[]).is_nan());
        assert!(median(&[]).is_nan());
        assert!(sample_variance(&[]).is_nan());
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([7.0]).unwrap();
        assert_eq!(stats.min, 7.0);
        assert_eq!(stats.max, 7.0);
        assert_eq!(stats.mean, 7.0);
        assert_eq!(stats.median, 7.0);
        assert!(stats.variance.is_nan());
    }

    #[test]
    fn test_even_median_is_midpoint() {
        let stats = DescriptiveStats::new([10.0, 1.0, 4.0, 3.0]).unwrap();
        assert_eq!(stats.median, 3.5);
    }

    #[test]
    fn test_sample_variance_matches_definition() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // population variance is 4.0, sample variance is 32 / 7
        let variance = sample_variance(&values);
        assert!((variance - 32.0 / 7.0).abs() < 1e-12);
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!((sample_std_dev(&values) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_nan_is_skipped() {
        let values = [1.0, 2.0, f64::NAN];
        assert_eq!(mean(&values), 1.5);
        assert_eq!(median(&values), 1.5);
        assert_eq!(sample_variance(&values), 0.5);

        let stats = DescriptiveStats::new(values).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.max, 2.0);
    }

    #[test]
    fn test_all_nan_is_like_empty() {
        let values = [f64::NAN; 3];
        assert!(DescriptiveStats::new(values).is_none());
        assert!(mean(&values).is_nan());
        assert!(median(&values).is_nan());
        assert!(sample_variance(&values).is_nan());
    }
}
