//! Typed tabular data and its analysis
//!
//! This crate turns raw columnar data into validated, typed columns and runs
//! statistical analyses over them.
//!
//! # Overview
//!
//! Data flows one way:
//!
//! 1. **Raw input** ([`table::Table`]): named columns of [`value::Value`]s
//! 2. **Typed columns** ([`attribute::Attribute`]): each column is classified as
//!    numerical, boolean or text; categorical columns come from conversion
//! 3. **Dataset** ([`dataset::Dataset`]): named columns of equal length with an
//!    optional class column
//! 4. **Analysis** ([`analysis`]): statistics, discretization, correlation,
//!    mutual information, ROC/AUC and metric-based filtering
//!
//! The numeric work is delegated to `tabscope-stats`; this crate adds the type
//! rules and the error contract. Every fallible operation returns
//! [`error::DatasetError`] and leaves its receiver unchanged on failure.
//!
//! # Examples
//!
//! ```
//! use tabscope_dataset::{
//!     analysis::{BinningMethod, Comparator, Metric},
//!     dataset::Dataset,
//!     table::Table,
//!     value::Value,
//! };
//!
//! let table = Table::new(vec![
//!     ("age".to_owned(), [23.0, 35.0, 47.0, 59.0].map(Value::from).to_vec()),
//!     ("city".to_owned(), ["a", "b", "a", "b"].map(Value::from).to_vec()),
//!     ("buys".to_owned(), [false, false, true, true].map(Value::from).to_vec()),
//! ])
//! .unwrap();
//! let mut dataset = Dataset::from_table(table, Some("buys")).unwrap();
//!
//! assert_eq!(dataset.roc_auc("age").unwrap(), 1.0);
//! assert_eq!(dataset.entropy("city").unwrap(), 1.0);
//!
//! // drop columns carrying less than half a bit
//! let removed = dataset.filter_by(Metric::Entropy, Comparator::Ge, 0.5).unwrap();
//! assert!(removed.is_empty());
//!
//! dataset.discretize_all(BinningMethod::Width, 2).unwrap();
//! assert!(dataset.attribute("age").unwrap().is_categorical());
//! ```

pub mod analysis;
pub mod attribute;
pub mod dataset;
pub mod error;
pub mod table;
pub mod value;
