use std::path::PathBuf;

use clap::Args;
use tabscope_stats::correlation::CorrelationMethod;

use super::InputArg;
use crate::{
    report::{CorrelationReport, Report},
    util::Output,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct CorrelationArg {
    #[clap(flatten)]
    pub(crate) input: InputArg,

    /// Correlation coefficient: pearson, spearman or kendall
    #[arg(long, default_value_t = CorrelationMethod::Pearson)]
    pub(crate) method: CorrelationMethod,

    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CorrelationArg) -> anyhow::Result<()> {
    let dataset = arg.input.load()?;
    log::info!("Computing {} correlation matrix", arg.method);
    let report = Report::new(
        arg.input.path(),
        CorrelationReport {
            method: arg.method,
            matrix: dataset.correlation_matrix(arg.method),
        },
    );
    Output::save_json(&report, arg.output.clone())
}
