//! Last-name frequency command

use clap::Args;

use super::{InputArg, OutputFormat, table};
use crate::schema::{AnalysisDocument, LastNamesBody};

pub(super) const REQUIRED_COLUMNS: [&str; 1] = ["name"];

#[derive(Debug, Clone, Args)]
pub(crate) struct LastNamesArg {
    #[command(flatten)]
    pub input: InputArg,

    /// Only show the N most common last names
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

pub(crate) fn run(arg: &LastNamesArg) -> anyhow::Result<()> {
    let (analyzer, dataset) = arg.input.load(&REQUIRED_COLUMNS)?;
    let counts = analyzer.last_names(&dataset);

    let mut output = arg.input.output()?;
    match arg.input.format {
        OutputFormat::Text => output.write_text(|w| table::write_last_names(w, &counts, arg.top)),
        OutputFormat::Json => output.write_json(AnalysisDocument::new(
            arg.input.source(),
            dataset.len(),
            LastNamesBody::new(&counts, arg.top),
        )),
    }
}
