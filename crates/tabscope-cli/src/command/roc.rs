use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;

use super::InputArg;
use crate::{
    report::{AucReport, Report, RocReport},
    util::Output,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct RocArg {
    #[clap(flatten)]
    pub(crate) input: InputArg,

    /// Numerical column to score; all numerical columns are scored when omitted
    #[arg(long)]
    pub(crate) predictor: Option<String>,

    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &RocArg) -> anyhow::Result<()> {
    let dataset = arg.input.load()?;
    let class = dataset
        .class_name()
        .map(str::to_owned)
        .context("ROC analysis needs a boolean class column (--class)")?;

    let Some(predictor) = &arg.predictor else {
        let auc = dataset.roc_auc_all()?;
        let report = Report::new(arg.input.path(), AucReport { class, auc });
        return Output::save_json(&report, arg.output.clone());
    };

    let curve = dataset
        .fpr_tpr(predictor)
        .with_context(|| format!("Failed to compute ROC curve of '{predictor}'"))?;
    let auc = curve.auc();
    log::info!("AUC of '{predictor}' against '{class}': {auc}");
    let report = Report::new(
        arg.input.path(),
        RocReport {
            predictor: predictor.clone(),
            class,
            fpr: curve.fpr,
            tpr: curve.tpr,
            auc,
        },
    );
    Output::save_json(&report, arg.output.clone())
}
