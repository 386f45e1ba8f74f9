use std::path::PathBuf;

use clap::Args;
use tabscope_dataset::analysis::{Comparator, Metric};

use super::InputArg;
use crate::util::Output;

#[derive(Debug, Clone, Args)]
pub(crate) struct FilterArg {
    #[clap(flatten)]
    pub(crate) input: InputArg,

    /// Metric to score columns by: entropy, auc, variance, mean or median
    #[arg(long)]
    pub(crate) metric: Metric,

    /// Comparison a column must satisfy to be kept: lt, gt, le, ge, eq or neq
    #[arg(long)]
    pub(crate) comparator: Comparator,

    /// Threshold the metric is compared against
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) threshold: f64,

    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &FilterArg) -> anyhow::Result<()> {
    let mut dataset = arg.input.load()?;
    let removed = dataset.filter_by(arg.metric, arg.comparator, arg.threshold)?;
    if removed.is_empty() {
        log::info!("No column removed");
    } else {
        log::info!(
            "Removed {} column(s): {}",
            removed.len(),
            removed.join(", ")
        );
    }
    Output::save_table(&dataset.to_table(), arg.input.format(), arg.output.clone())
}
