//! Family fare command

use clap::Args;

use super::{InputArg, OutputFormat, table};
use crate::schema::{AnalysisDocument, FamilyBody};

/// Columns read by the family grouping
pub(super) const REQUIRED_COLUMNS: [&str; 3] = ["sibsp", "parch", "fare"];

#[derive(Debug, Clone, Args)]
pub(crate) struct FamilyArg {
    #[command(flatten)]
    pub input: InputArg,
}

pub(crate) fn run(arg: &FamilyArg) -> anyhow::Result<()> {
    let (analyzer, dataset) = arg.input.load(&REQUIRED_COLUMNS)?;
    let groups = analyzer.family_groups(&dataset);

    let mut output = arg.input.output()?;
    match arg.input.format {
        OutputFormat::Text => output.write_text(|w| table::write_family_groups(w, &groups)),
        OutputFormat::Json => output.write_json(AnalysisDocument::new(
            arg.input.source(),
            dataset.len(),
            FamilyBody::new(&groups),
        )),
    }
}
