//! Bivariate correlation coefficients
//!
//! Three coefficients are provided, selected through [`CorrelationMethod`]:
//!
//! - **Pearson**: linear correlation of the raw values
//! - **Spearman**: Pearson correlation of the mid-ranks
//! - **Kendall**: tau-b rank correlation with tie correction
//!
//! Observations where either value is missing (`NaN`) are dropped first. All
//! functions return `None` when the coefficient is undefined: the inputs
//! differ in length, fewer than two complete observations remain, or one of
//! the variables is constant.
//!
//! # Examples
//!
//! ```
//! use tabscope_stats::correlation::{CorrelationMethod, correlation};
//!
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [2.0, 4.0, 6.0, 8.0, 10.0];
//! let r = correlation(CorrelationMethod::Pearson, &x, &y).unwrap();
//! assert!((r - 1.0).abs() < 1e-12);
//! ```

use std::str::FromStr;

use crate::descriptive;

/// Correlation coefficient to compute.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationMethod {
    #[default]
    #[display("pearson")]
    Pearson,
    #[display("spearman")]
    Spearman,
    #[display("kendall")]
    Kendall,
}

impl CorrelationMethod {
    /// All methods in their canonical order.
    pub const ALL: [Self; 3] = [Self::Pearson, Self::Spearman, Self::Kendall];
}

/// Error returned when parsing an unknown correlation method name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown correlation method '{name}' (expected pearson, spearman or kendall)")]
pub struct UnknownCorrelationMethod {
    pub name: String,
}

impl FromStr for CorrelationMethod {
    type Err = UnknownCorrelationMethod;

    /// Parses a lowercase method name.
    ///
    /// ```
    /// # use tabscope_stats::correlation::CorrelationMethod;
    /// assert_eq!("kendall".parse(), Ok(CorrelationMethod::Kendall));
    /// assert!("cosine".parse::<CorrelationMethod>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.to_string() == s)
            .ok_or_else(|| UnknownCorrelationMethod { name: s.to_owned() })
    }
}

/// Computes the coefficient selected by `method`.
#[must_use]
pub fn correlation(method: CorrelationMethod, x: &[f64], y: &[f64]) -> Option<f64> {
    match method {
        CorrelationMethod::Pearson => pearson(x, y),
        CorrelationMethod::Spearman => spearman(x, y),
        CorrelationMethod::Kendall => kendall_tau_b(x, y),
    }
}

/// Pearson product-moment correlation.
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() {
        return None;
    }
    let (x, y) = complete_pairs(x, y);
    if x.len() < 2 {
        return None;
    }

    let mean_x = descriptive::mean(&x);
    let mean_y = descriptive::mean(&y);
    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (xi, yi) in x.iter().zip(&y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let denom = (var_x * var_y).sqrt();
    if denom.is_nan() || denom <= 0.0 {
        return None;
    }
    Some((cov / denom).clamp(-1.0, 1.0))
}

/// Spearman rank correlation (Pearson on mid-ranks).
///
/// ```
/// # use tabscope_stats::correlation::spearman;
/// // monotone but non-linear
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [1.0, 4.0, 9.0, 16.0, 25.0];
/// assert!((spearman(&x, &y).unwrap() - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn spearman(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() {
        return None;
    }
    let (x, y) = complete_pairs(x, y);
    pearson(&rank_data(&x), &rank_data(&y))
}

/// Kendall's tau-b with tie correction.
///
/// `tau_b = (C - D) / sqrt((n0 - n1) * (n0 - n2))` where `n0 = n(n-1)/2`,
/// `n1`/`n2` count the pairs tied in `x`/`y`.
#[expect(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn kendall_tau_b(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() {
        return None;
    }
    let (x, y) = complete_pairs(x, y);
    let n = x.len();
    if n < 2 {
        return None;
    }

    let mut concordant: i64 = 0;
    let mut discordant: i64 = 0;
    let mut ties_x: i64 = 0;
    let mut ties_y: i64 = 0;

    for i in 0..n {
        for j in (i + 1)..n {
            let dx = x[i] - x[j];
            let dy = y[i] - y[j];
            if dx == 0.0 || dy == 0.0 {
                if dx == 0.0 {
                    ties_x += 1;
                }
                if dy == 0.0 {
                    ties_y += 1;
                }
            } else if dx * dy > 0.0 {
                concordant += 1;
            } else {
                discordant += 1;
            }
        }
    }

    let pairs = (n * (n - 1) / 2) as i64;
    let denom_sq = (pairs - ties_x) as f64 * (pairs - ties_y) as f64;
    if denom_sq <= 0.0 {
        return None;
    }
    let tau = (concordant - discordant) as f64 / denom_sq.sqrt();
    Some(tau.clamp(-1.0, 1.0))
}

/// Observations where neither value is `NaN`.
fn complete_pairs(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    x.iter()
        .zip(y)
        .filter(|(a, b)| !a.is_nan() && !b.is_nan())
        .map(|(&a, &b)| (a, b))
        .unzip()
}

/// Ranks data using the mid-rank method for ties (1-based).
#[expect(clippy::cast_precision_loss)]
fn rank_data(data: &[f64]) -> Vec<f64> {
    let n = data.len();
    let mut indexed = data.iter().copied().enumerate().collect::<Vec<_>>();
    indexed.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j < n && indexed[j].1 == indexed[i].1 {
            j += 1;
        }
        let avg_rank = (i + j) as f64 / 2.0 + 0.5;
        for item in &indexed[i..j] {
            ranks[item.0] = avg_rank;
        }
        i = j;
    }
    ranks
}
