use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use tabscope_dataset::analysis::{BinningMethod, Discretization};

use super::InputArg;
use crate::util::Output;

#[derive(Debug, Clone, Args)]
pub(crate) struct DiscretizeArg {
    #[clap(flatten)]
    pub(crate) input: InputArg,

    /// Columns to discretize (comma-separated); all numerical columns when omitted
    #[arg(long, value_delimiter = ',')]
    pub(crate) columns: Vec<String>,

    /// Binning method: width or frequency
    #[arg(long, default_value = "width")]
    pub(crate) method: BinningMethod,

    /// Number of intervals
    #[arg(long, default_value_t = 3)]
    pub(crate) bins: usize,

    /// Explicit cut points (comma-separated), overriding --method and --bins
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub(crate) cut_points: Vec<f64>,

    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

impl DiscretizeArg {
    fn discretization(&self) -> Discretization {
        if self.cut_points.is_empty() {
            Discretization::Binned {
                method: self.method,
                num_bins: self.bins,
            }
        } else {
            Discretization::Custom {
                cut_points: self.cut_points.clone(),
            }
        }
    }
}

pub(crate) fn run(arg: &DiscretizeArg) -> anyhow::Result<()> {
    let mut dataset = arg.input.load()?;

    if arg.columns.is_empty() && arg.cut_points.is_empty() {
        let cut_points = dataset.discretize_all(arg.method, arg.bins)?;
        for (name, cuts) in cut_points.iter() {
            if let Some(cuts) = cuts {
                log::info!("Discretized '{name}' with cut points {cuts:?}");
            }
        }
    } else {
        let discretization = arg.discretization();
        let names = if arg.columns.is_empty() {
            dataset
                .attributes()
                .filter(|(_, a)| a.is_numerical())
                .map(|(name, _)| name.to_owned())
                .collect()
        } else {
            arg.columns.clone()
        };
        for name in &names {
            let cuts = dataset
                .discretize(name, &discretization)
                .with_context(|| format!("Failed to discretize '{name}'"))?;
            log::info!("Discretized '{name}' with cut points {cuts:?}");
        }
    }

    Output::save_table(&dataset.to_table(), arg.input.format(), arg.output.clone())
}
