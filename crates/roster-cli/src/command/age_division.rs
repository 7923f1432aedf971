//! Age division command

use clap::Args;

use super::{InputArg, OutputFormat, table};
use crate::schema::{AgeDivisionBody, AnalysisDocument};

pub(super) const REQUIRED_COLUMNS: [&str; 1] = ["age"];

#[derive(Debug, Clone, Args)]
pub(crate) struct AgeDivisionArg {
    #[command(flatten)]
    pub input: InputArg,

    /// List the flag of every passenger row in text output
    #[arg(long)]
    pub show_rows: bool,
}

pub(crate) fn run(arg: &AgeDivisionArg) -> anyhow::Result<()> {
    let (analyzer, dataset) = arg.input.load(&REQUIRED_COLUMNS)?;
    let division = analyzer.age_division(&dataset);

    let mut output = arg.input.output()?;
    match arg.input.format {
        OutputFormat::Text => {
            output.write_text(|w| table::write_age_division(w, &division, arg.show_rows))
        }
        OutputFormat::Json => output.write_json(AnalysisDocument::new(
            arg.input.source(),
            dataset.len(),
            AgeDivisionBody::new(&division),
        )),
    }
}
