//! Survival demographics command

use clap::Args;

use super::{InputArg, OutputFormat, table};
use crate::schema::{AnalysisDocument, DemographicsBody};

/// Columns read by the survival table
pub(super) const REQUIRED_COLUMNS: [&str; 2] = ["age", "survived"];

#[derive(Debug, Clone, Args)]
pub(crate) struct DemographicsArg {
    #[command(flatten)]
    pub input: InputArg,
}

pub(crate) fn run(arg: &DemographicsArg) -> anyhow::Result<()> {
    let (analyzer, dataset) = arg.input.load(&REQUIRED_COLUMNS)?;
    let demographics = analyzer.survival_demographics(&dataset)?;

    let mut output = arg.input.output()?;
    match arg.input.format {
        OutputFormat::Text => output.write_text(|w| table::write_demographics(w, &demographics)),
        OutputFormat::Json => output.write_json(AnalysisDocument::new(
            arg.input.source(),
            dataset.len(),
            DemographicsBody::new(&demographics),
        )),
    }
}
