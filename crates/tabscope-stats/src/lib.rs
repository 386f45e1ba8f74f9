//! Statistical primitives for the tabscope project.
//!
//! This crate works on plain slices and knows nothing about columns or
//! datasets. It provides:
//!
//! - **Descriptive statistics**: mean, median, sample variance and standard deviation
//! - **Correlation**: Pearson, Spearman and Kendall tau-b coefficients
//! - **Information measures**: entropy, conditional entropy, normalized mutual information, mode
//! - **Binning**: equal-width and equal-frequency cut points, right-closed intervals
//! - **ROC analysis**: ROC curves of a numeric score against a binary label, and their AUC
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing numeric values
//! - [`correlation`]: Bivariate correlation coefficients
//! - [`information`]: Information-theoretic measures over discrete values
//! - [`binning`]: Cut-point computation and interval assignment
//! - [`roc`]: Receiver operating characteristic curves
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use tabscope_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.variance, 2.5);
//! ```
//!
//! ## Discretizing values
//!
//! ```
//! use tabscope_stats::binning::{Intervals, equal_frequency_cut_points};
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let intervals = Intervals::new(equal_frequency_cut_points(&values, 2));
//! assert_eq!(intervals.label_of(2.0), "(-infinity, 3.0]");
//! ```
//!
//! ## Scoring a binary classifier
//!
//! ```
//! use tabscope_stats::roc::RocCurve;
//!
//! let curve = RocCurve::from_scores(&[0.2, 0.9], &[false, true]).unwrap();
//! assert_eq!(curve.auc(), 1.0);
//! ```

pub mod binning;
pub mod correlation;
pub mod descriptive;
pub mod information;
pub mod roc;
