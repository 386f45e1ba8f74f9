//! Cross-column analyses
//!
//! Each submodule adds methods to [`Dataset`](crate::dataset::Dataset):
//!
//! - [`summary`]: per-column statistics and their sweeps over all columns
//! - [`dependency`]: correlation and normalized mutual information, pairwise and as matrices
//! - [`roc`]: ROC curves and AUC of numerical predictors against a boolean class
//! - [`filter`]: removing columns by a metric threshold
//! - [`transform`]: discretization, normalization and standardization in place
//!
//! Sweeps and matrices never fail on columns a measure does not apply to;
//! those entries are `None`.

pub use self::{
    dependency::Matrix,
    filter::{Comparator, Metric},
    summary::{ColumnSummary, PerColumn},
    transform::{BinningMethod, Discretization},
};

pub mod dependency;
pub mod filter;
pub mod roc;
pub mod summary;
pub mod transform;
