//! JSON documents emitted by the analysis commands

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabscope_dataset::analysis::{ColumnSummary, Matrix, PerColumn};
use tabscope_stats::correlation::CorrelationMethod;

/// Envelope shared by every report.
#[derive(Debug, Clone, Serialize)]
pub struct Report<T> {
    /// Timestamp when the report was produced (ISO 8601 format)
    pub generated_at: DateTime<Utc>,
    /// Path of the analyzed table
    pub source: String,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Report<T> {
    pub fn new(source: &Path, body: T) -> Self {
        Self {
            generated_at: Utc::now(),
            source: source.display().to_string(),
            body,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DescribeReport {
    pub num_rows: usize,
    pub class: Option<String>,
    pub columns: Vec<ColumnSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorrelationReport {
    pub method: CorrelationMethod,
    #[serde(flatten)]
    pub matrix: Matrix,
}

#[derive(Debug, Clone, Serialize)]
pub struct MutualInformationReport {
    #[serde(flatten)]
    pub matrix: Matrix,
}

/// ROC curve of one predictor.
#[derive(Debug, Clone, Serialize)]
pub struct RocReport {
    pub predictor: String,
    pub class: String,
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    pub auc: f64,
}

/// AUC of every numerical column.
#[derive(Debug, Clone, Serialize)]
pub struct AucReport {
    pub class: String,
    pub auc: PerColumn<f64>,
}
