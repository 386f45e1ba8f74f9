use std::path::PathBuf;

use clap::Args;

use super::InputArg;
use crate::{
    report::{DescribeReport, Report},
    util::Output,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct DescribeArg {
    #[clap(flatten)]
    pub(crate) input: InputArg,

    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let dataset = arg.input.load()?;
    let report = Report::new(
        arg.input.path(),
        DescribeReport {
            num_rows: dataset.len(),
            class: dataset.class_name().map(str::to_owned),
            columns: dataset.summarize(),
        },
    );
    Output::save_json(&report, arg.output.clone())
}
