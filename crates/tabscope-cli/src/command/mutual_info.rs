use std::path::PathBuf;

use clap::Args;

use super::InputArg;
use crate::{
    report::{MutualInformationReport, Report},
    util::Output,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct MutualInfoArg {
    #[clap(flatten)]
    pub(crate) input: InputArg,

    /// Convert these text columns to categorical before the analysis
    /// (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub(crate) categorical: Vec<String>,

    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &MutualInfoArg) -> anyhow::Result<()> {
    let mut dataset = arg.input.load()?;
    for name in &arg.categorical {
        dataset.to_categorical(name, None)?;
    }
    log::info!("Computing normalized mutual information matrix");
    let report = Report::new(
        arg.input.path(),
        MutualInformationReport {
            matrix: dataset.mutual_information_matrix(),
        },
    );
    Output::save_json(&report, arg.output.clone())
}
