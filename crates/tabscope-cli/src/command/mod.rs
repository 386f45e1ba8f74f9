use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;
use tabscope_dataset::dataset::Dataset;

use self::{
    correlation::CorrelationArg, describe::DescribeArg, discretize::DiscretizeArg,
    filter::FilterArg, mutual_info::MutualInfoArg, roc::RocArg, scale::ScaleArg,
};
use crate::table_io::{self, CsvFormat};

mod correlation;
mod describe;
mod discretize;
mod filter;
mod mutual_info;
mod roc;
mod scale;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v: info, -vv: debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// What to do with the table
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Summarize every column
    Describe(#[clap(flatten)] DescribeArg),
    /// Correlation matrix of the numerical columns
    Correlation(#[clap(flatten)] CorrelationArg),
    /// Normalized mutual information matrix of the non-numerical columns
    MutualInfo(#[clap(flatten)] MutualInfoArg),
    /// ROC curve and AUC of numerical predictors against the boolean class
    Roc(#[clap(flatten)] RocArg),
    /// Discretize numerical columns and write the resulting table
    Discretize(#[clap(flatten)] DiscretizeArg),
    /// Normalize or standardize numerical columns and write the resulting table
    Scale(#[clap(flatten)] ScaleArg),
    /// Drop columns whose metric fails a threshold and write the resulting table
    Filter(#[clap(flatten)] FilterArg),
}

/// Where the table comes from and how it is laid out.
#[derive(Debug, Clone, Args)]
pub(crate) struct InputArg {
    /// Path to the delimited input table
    pub input: PathBuf,

    /// Column to use as the class
    #[arg(long)]
    pub class: Option<String>,

    /// Field separator (a single ASCII character)
    #[arg(long, default_value = ",", value_parser = parse_separator)]
    pub separator: u8,

    /// Treat the first row as data and name columns by position
    #[arg(long)]
    pub no_header: bool,
}

impl InputArg {
    pub fn format(&self) -> CsvFormat {
        CsvFormat {
            has_header: !self.no_header,
            separator: self.separator,
        }
    }

    pub fn path(&self) -> &Path {
        &self.input
    }

    pub fn load(&self) -> anyhow::Result<Dataset> {
        let table = table_io::read_table_file(&self.input, self.format())?;
        Dataset::from_table(table, self.class.as_deref())
            .with_context(|| format!("Failed to build dataset from {}", self.input.display()))
    }
}

fn parse_separator(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!(
            "separator must be a single ASCII character, got '{s}'"
        )),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose);
    match args.mode {
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Correlation(arg) => correlation::run(&arg)?,
        Mode::MutualInfo(arg) => mutual_info::run(&arg)?,
        Mode::Roc(arg) => roc::run(&arg)?,
        Mode::Discretize(arg) => discretize::run(&arg)?,
        Mode::Scale(arg) => scale::run(&arg)?,
        Mode::Filter(arg) => filter::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_separator_parsing() {
        assert_eq!(parse_separator(";"), Ok(b';'));
        assert_eq!(parse_separator("\t"), Ok(b'\t'));
        assert!(parse_separator("ab").is_err());
        assert!(parse_separator("é").is_err());
    }

    #[test]
    fn test_input_options() {
        let args = CommandArgs::try_parse_from([
            "tabscope",
            "-vv",
            "describe",
            "data.csv",
            "--class",
            "label",
            "--separator",
            ";",
            "--no-header",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        let Mode::Describe(arg) = args.mode else {
            panic!("expected describe");
        };
        assert_eq!(arg.input.class.as_deref(), Some("label"));
        assert_eq!(
            arg.input.format(),
            CsvFormat {
                has_header: false,
                separator: b';',
            }
        );
    }
}
