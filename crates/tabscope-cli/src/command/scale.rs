use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, ValueEnum};

use super::InputArg;
use crate::util::Output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Scaling {
    /// Rescale to [0, 1]
    Normalize,
    /// Rescale to zero mean and unit sample variance
    Standardize,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct ScaleArg {
    #[clap(flatten)]
    pub(crate) input: InputArg,

    /// How to rescale
    #[arg(long, value_enum, default_value_t = Scaling::Normalize)]
    pub(crate) scaling: Scaling,

    /// Columns to rescale (comma-separated); all numerical columns when omitted
    #[arg(long, value_delimiter = ',')]
    pub(crate) columns: Vec<String>,

    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ScaleArg) -> anyhow::Result<()> {
    let mut dataset = arg.input.load()?;

    if arg.columns.is_empty() {
        let names = match arg.scaling {
            Scaling::Normalize => dataset.normalize_all(),
            Scaling::Standardize => dataset.standardize_all(),
        };
        log::info!("Rescaled {} column(s): {}", names.len(), names.join(", "));
    } else {
        for name in &arg.columns {
            match arg.scaling {
                Scaling::Normalize => dataset.normalize(name),
                Scaling::Standardize => dataset.standardize(name),
            }
            .with_context(|| format!("Failed to rescale '{name}'"))?;
        }
    }

    Output::save_table(&dataset.to_table(), arg.input.format(), arg.output.clone())
}
