use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use roster_analysis::{Analyzer, Dataset};

use self::{
    age_division::AgeDivisionArg, demographics::DemographicsArg, family::FamilyArg,
    last_names::LastNamesArg, report::ReportArg,
};
use crate::{loader, util};

mod age_division;
mod demographics;
mod family;
mod last_names;
mod report;
mod table;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Survival rate by class, sex and age group
    Demographics(#[clap(flatten)] DemographicsArg),
    /// Fare statistics by family size and class
    Family(#[clap(flatten)] FamilyArg),
    /// Most common last names
    LastNames(#[clap(flatten)] LastNamesArg),
    /// Whether each passenger is older than their class median age
    AgeDivision(#[clap(flatten)] AgeDivisionArg),
    /// Run every analysis
    Report(#[clap(flatten)] ReportArg),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Fixed-width text tables
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Arguments shared by every analysis command
#[derive(Debug, Clone, Args)]
pub(crate) struct InputArg {
    /// Path to the passenger CSV file
    pub input: PathBuf,

    /// Path to an analysis configuration JSON file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the output to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl InputArg {
    /// Reads the configuration and the passenger file, which must contain the
    /// `required` columns.
    fn load(&self, required: &[&str]) -> anyhow::Result<(Analyzer, Dataset)> {
        let config = util::read_config_file(self.config.as_deref())?;
        let analyzer = Analyzer::new(&config)?;
        let dataset = loader::load_dataset(&self.input, required)?;
        Ok((analyzer, dataset))
    }

    fn output(&self) -> anyhow::Result<util::Output> {
        util::Output::from_output_path(self.output.as_deref())
    }

    fn source(&self) -> &Path {
        &self.input
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match &args.mode {
        Mode::Demographics(arg) => demographics::run(arg)?,
        Mode::Family(arg) => family::run(arg)?,
        Mode::LastNames(arg) => last_names::run(arg)?,
        Mode::AgeDivision(arg) => age_division::run(arg)?,
        Mode::Report(arg) => report::run(arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_last_names() {
        let args = CommandArgs::try_parse_from([
            "roster",
            "last-names",
            "titanic.csv",
            "--top",
            "5",
            "--format",
            "json",
        ])
        .unwrap();
        let Mode::LastNames(arg) = args.mode else {
            panic!("expected last-names mode");
        };
        assert_eq!(arg.top, Some(5));
        assert_eq!(arg.input.format, OutputFormat::Json);
        assert_eq!(arg.input.input, PathBuf::from("titanic.csv"));
    }
}
