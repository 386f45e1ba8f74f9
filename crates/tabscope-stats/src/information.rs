//! Information-theoretic measures over discrete values
//!
//! Everything here works on the *empirical* distribution of the values: only
//! values that actually occur contribute, so a categorical domain member that
//! never appears has no effect on the result.
//!
//! # Examples
//!
//! ```
//! use tabscope_stats::information::{entropy, normalized_mutual_information};
//!
//! assert_eq!(entropy(["a", "b", "a", "b"]), 1.0);
//!
//! // identical columns share all their information
//! let a = ["x", "y", "x", "y"];
//! assert_eq!(normalized_mutual_information(&a, &a), Some(1.0));
//! ```

use std::collections::BTreeMap;

/// Counts occurrences of each distinct value.
///
/// The map is ordered by value so that iteration order never depends on
/// hashing.
#[must_use]
pub fn frequencies<K, I>(values: I) -> BTreeMap<K, usize>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Shannon entropy in bits of a distribution given by its counts.
///
/// Zero counts are skipped. Returns `0.0` when the total is zero.
///
/// ```
/// # use tabscope_stats::information::entropy_from_counts;
/// assert_eq!(entropy_from_counts([5]), 0.0);
/// assert_eq!(entropy_from_counts([1, 1, 1, 1]), 2.0);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn entropy_from_counts<I>(counts: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let counts = counts.into_iter().filter(|&c| c > 0).collect::<Vec<_>>();
    let total = counts.iter().sum::<usize>();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .into_iter()
        .map(|c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>()
        .max(0.0)
}

/// Shannon entropy in bits of the empirical distribution of `values`.
#[must_use]
pub fn entropy<K, I>(values: I) -> f64
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    entropy_from_counts(frequencies(values).into_values())
}

/// Most frequent value.
///
/// When several values share the highest count the smallest of them (in the
/// `Ord` order of `K`) wins. Returns `None` for an empty input.
///
/// ```
/// # use tabscope_stats::information::mode;
/// assert_eq!(mode([3, 1, 3, 2]), Some(3));
/// assert_eq!(mode([true, true, false, false]), Some(false));
/// assert_eq!(mode(Vec::<u8>::new()), None);
/// ```
#[must_use]
pub fn mode<K, I>(values: I) -> Option<K>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut best: Option<(K, usize)> = None;
    for (value, count) in frequencies(values) {
        if best
            .as_ref()
            .is_none_or(|(_, best_count)| count > *best_count)
        {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Conditional entropy `H(a | b)` in bits.
///
/// `a` is partitioned by the distinct values of `b`; the result is the
/// entropy of each partition weighted by the relative frequency of the
/// corresponding `b` value.
///
/// # Panics
///
/// Panics if `a` and `b` differ in length.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn conditional_entropy<A, B>(a: &[A], b: &[B]) -> f64
where
    A: Ord,
    B: Ord,
{
    assert_eq!(a.len(), b.len(), "columns must have the same length");
    if a.is_empty() {
        return 0.0;
    }

    let mut partitions: BTreeMap<&B, Vec<&A>> = BTreeMap::new();
    for (av, bv) in a.iter().zip(b) {
        partitions.entry(bv).or_default().push(av);
    }

    let total = a.len() as f64;
    partitions
        .into_values()
        .map(|part| part.len() as f64 / total * entropy(part))
        .sum()
}

/// Normalized mutual information `2 * (H(a) - H(a|b)) / (H(a) + H(b))`.
///
/// The result lies in `[0, 1]`. Returns `None` when both columns are
/// constant, where the ratio is `0 / 0`.
///
/// # Panics
///
/// Panics if `a` and `b` differ in length.
#[must_use]
pub fn normalized_mutual_information<A, B>(a: &[A], b: &[B]) -> Option<f64>
where
    A: Ord,
    B: Ord,
{
    let h_a = entropy(a);
    let h_b = entropy(b);
    let denom = h_a + h_b;
    if denom <= 0.0 {
        return None;
    }
    let h_a_given_b = conditional_entropy(a, b);
    Some(2.0 * (h_a - h_a_given_b) / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_entropy_of_constant_is_zero() {
        assert_eq!(entropy(["x"; 10]), 0.0);
        assert_eq!(entropy(Vec::<&str>::new()), 0.0);
    }

    #[test]
    fn test_entropy_of_uniform_is_log2_k() {
        for k in 2_u32..=8 {
            let values = (0..k).cycle().take(k as usize * 3).collect::<Vec<_>>();
            assert!((entropy(values) - f64::from(k).log2()).abs() < EPS);
        }
    }

    #[test]
    fn test_boolean_entropy_is_one_bit() {
        assert_eq!(entropy([true, true, false, false]), 1.0);
    }

    #[test]
    fn test_mode_tie_break_prefers_smallest() {
        assert_eq!(mode(["b", "a", "b", "a", "c"]), Some("a"));
        assert_eq!(mode(["b", "b", "a"]), Some("b"));
    }

    #[test]
    fn test_conditional_entropy() {
        // b determines a completely
        let a = ["x", "y", "x", "y"];
        let b = [1, 2, 1, 2];
        assert!(conditional_entropy(&a, &b).abs() < EPS);

        // b carries no information about a
        let b = [1, 1, 2, 2];
        let a = ["x", "y", "x", "y"];
        assert!((conditional_entropy(&a, &b) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_nmi_bounds() {
        let a = ["x", "y", "x", "y"];
        assert_eq!(normalized_mutual_information(&a, &[1, 1, 2, 2]), Some(0.0));
        assert_eq!(
            normalized_mutual_information(&a, &["p", "q", "p", "q"]),
            Some(1.0)
        );
        assert_eq!(normalized_mutual_information(&["z"; 3], &[0; 3]), None);
    }

    #[test]
    fn test_nmi_is_symmetric() {
        let a = ["x", "x", "y", "y", "z", "x"];
        let b = [1, 1, 1, 2, 2, 2];
        let ab = normalized_mutual_information(&a, &b).unwrap();
        let ba = normalized_mutual_information(&b, &a).unwrap();
        assert!((ab - ba).abs() < EPS);
        assert!(ab > 0.0 && ab < 1.0);
    }
}
