//! JSON output documents
//!
//! Every document carries the time it was generated and the input it was
//! computed from. Undefined statistics (`NaN`) are written as `null`.

use std::path::Path;

use chrono::{DateTime, Utc};
use roster_analysis::{
    AgeDivision, DemographicsRow, FamilyFareRow, FamilyGroups, OlderPassenger, Report,
    SurvivalDemographics,
};
use roster_stats::frequency::ValueCounts;
use serde::Serialize;

/// An analysis result together with its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisDocument<'a, T> {
    /// Timestamp when the document was generated
    pub generated_at: DateTime<Utc>,
    /// Path of the passenger file the result was computed from
    pub source: &'a Path,
    /// Number of passenger rows in the source
    pub n_rows: usize,
    #[serde(flatten)]
    pub body: T,
}

impl<'a, T> AnalysisDocument<'a, T> {
    #[must_use]
    pub fn new(source: &'a Path, n_rows: usize, body: T) -> Self {
        Self {
            generated_at: Utc::now(),
            source,
            n_rows,
            body,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DemographicsBody<'a> {
    /// Rows left out because their age group is undefined
    pub excluded_rows: usize,
    pub demographics: &'a [DemographicsRow],
}

impl<'a> DemographicsBody<'a> {
    #[must_use]
    pub fn new(table: &'a SurvivalDemographics) -> Self {
        Self {
            excluded_rows: table.excluded(),
            demographics: table.rows(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FamilyBody<'a> {
    pub family_groups: &'a [FamilyFareRow],
}

impl<'a> FamilyBody<'a> {
    #[must_use]
    pub fn new(groups: &'a FamilyGroups) -> Self {
        Self {
            family_groups: groups.rows(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LastNameCount<'a> {
    pub last_name: &'a str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LastNamesBody<'a> {
    /// Number of distinct last names
    pub n_distinct: usize,
    /// Number of named passengers
    pub n_named: usize,
    pub last_names: Vec<LastNameCount<'a>>,
}

impl<'a> LastNamesBody<'a> {
    /// Builds the body from `counts`, keeping only the `top` most frequent
    /// names when given.
    #[must_use]
    pub fn new(counts: &'a ValueCounts<String>, top: Option<usize>) -> Self {
        let entries = counts.most_common(top.unwrap_or(counts.len()));
        Self {
            n_distinct: counts.len(),
            n_named: counts.total(),
            last_names: entries
                .iter()
                .map(|(last_name, count)| LastNameCount {
                    last_name,
                    count: *count,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassMedian {
    pub pclass: u8,
    pub median_age: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlagCounts {
    pub older: usize,
    pub not_older: usize,
    pub unknown: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgeDivisionBody<'a> {
    pub class_medians: Vec<ClassMedian>,
    pub flag_counts: FlagCounts,
    /// One flag per passenger row, in input order
    pub older_than_class_median: &'a [OlderPassenger],
}

impl<'a> AgeDivisionBody<'a> {
    #[must_use]
    pub fn new(division: &'a AgeDivision) -> Self {
        let (older, not_older, unknown) = division.counts();
        Self {
            class_medians: division
                .class_medians()
                .iter()
                .map(|(&pclass, &median_age)| ClassMedian { pclass, median_age })
                .collect(),
            flag_counts: FlagCounts {
                older,
                not_older,
                unknown,
            },
            older_than_class_median: division.flags(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportBody<'a> {
    #[serde(flatten)]
    pub demographics: DemographicsBody<'a>,
    #[serde(flatten)]
    pub family_groups: FamilyBody<'a>,
    #[serde(flatten)]
    pub last_names: LastNamesBody<'a>,
    #[serde(flatten)]
    pub age_division: AgeDivisionBody<'a>,
}

impl<'a> ReportBody<'a> {
    #[must_use]
    pub fn new(report: &'a Report, top: Option<usize>) -> Self {
        Self {
            demographics: DemographicsBody::new(&report.demographics),
            family_groups: FamilyBody::new(&report.family_groups),
            last_names: LastNamesBody::new(&report.last_names, top),
            age_division: AgeDivisionBody::new(&report.age_division),
        }
    }
}
