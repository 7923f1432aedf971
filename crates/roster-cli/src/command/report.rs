//! Full report command
//!
//! Runs every analysis on one passenger file and writes the results as a
//! single document.

use std::io::{self, Write};

use clap::Args;
use roster_analysis::Report;

use super::{InputArg, OutputFormat, age_division, demographics, family, last_names, table};
use crate::schema::{AnalysisDocument, ReportBody};

#[derive(Debug, Clone, Args)]
pub(crate) struct ReportArg {
    #[command(flatten)]
    pub input: InputArg,

    /// Only include the N most common last names
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

pub(crate) fn run(arg: &ReportArg) -> anyhow::Result<()> {
    let (analyzer, dataset) = arg.input.load(&required_columns())?;
    let report = analyzer.report(&dataset)?;

    let mut output = arg.input.output()?;
    match arg.input.format {
        OutputFormat::Text => output.write_text(|w| write_report(w, &report, arg.top)),
        OutputFormat::Json => output.write_json(AnalysisDocument::new(
            arg.input.source(),
            dataset.len(),
            ReportBody::new(&report, arg.top),
        )),
    }
}

/// Returns the columns read by any of the analyses.
fn required_columns() -> Vec<&'static str> {
    let mut columns = [
        demographics::REQUIRED_COLUMNS.as_slice(),
        family::REQUIRED_COLUMNS.as_slice(),
        last_names::REQUIRED_COLUMNS.as_slice(),
        age_division::REQUIRED_COLUMNS.as_slice(),
    ]
    .concat();
    columns.sort_unstable();
    columns.dedup();
    columns
}

fn write_report<W>(w: &mut W, report: &Report, top: Option<usize>) -> io::Result<()>
where
    W: Write,
{
    table::write_demographics(w, &report.demographics)?;
    writeln!(w)?;
    table::write_family_groups(w, &report.family_groups)?;
    writeln!(w)?;
    table::write_last_names(w, &report.last_names, top)?;
    writeln!(w)?;
    table::write_age_division(w, &report.age_division, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_requires_every_analysis_column() {
        assert_eq!(
            required_columns(),
            vec!["age", "fare", "name", "parch", "sibsp", "survived"]
        );
    }
}
