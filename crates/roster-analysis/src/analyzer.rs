//! Configured entry point for all analyses
//!
//! [`AnalysisConfig`] holds the tunable parameters (age group edges and the
//! last-name delimiter). It is validated once by [`Analyzer::new`]; afterwards
//! every analysis runs against an already-checked configuration.
//!
//! # Configuration File
//!
//! The configuration deserializes from JSON. Every field is optional. An
//! infinite edge is written as `null`:
//!
//! ```json
//! {
//!   "age_bin_edges": [0, 12, 19, 59, null],
//!   "name_delimiter": ","
//! }
//! ```

use roster_stats::frequency::ValueCounts;
use serde::{Deserialize, Serialize};

use crate::{
    AgeBins, AgeDivision, Dataset, FamilyGroups, GroupDomains, SurvivalDemographics,
    last_names::{self, count_last_names},
};

/// Tunable parameters of the analyses.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Edges of the Child, Teen, Adult and Senior age groups
    #[serde(with = "edges_serde")]
    pub age_bin_edges: [f64; 5],
    /// Separator between the last name and the rest of a full name
    pub name_delimiter: char,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            age_bin_edges: AgeBins::DEFAULT_EDGES,
            name_delimiter: last_names::DEFAULT_DELIMITER,
        }
    }
}

mod edges_serde {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub(super) fn serialize<S>(edges: &[f64; 5], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(edges.iter().map(|&e| e.is_finite().then_some(e)))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<[f64; 5], D::Error>
    where
        D: Deserializer<'de>,
    {
        let edges = Vec::<Option<f64>>::deserialize(deserializer)?;
        let len = edges.len();
        let edges = edges
            .into_iter()
            .map(|e| e.unwrap_or(f64::INFINITY))
            .collect::<Vec<_>>();
        edges
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"5 age group edges"))
    }
}

/// Runs the analyses of this crate with a validated configuration.
///
/// # Examples
///
/// ```
/// use roster_analysis::{AnalysisConfig, Analyzer, Dataset, Passenger};
///
/// let config = AnalysisConfig {
///     name_delimiter: ';',
///     ..AnalysisConfig::default()
/// };
/// let analyzer = Analyzer::new(&config)?;
///
/// let dataset = Dataset::new(vec![
///     Passenger::new(3, "male").with_name("Smith; John"),
///     Passenger::new(3, "male").with_name("Smith; Jack"),
/// ])?;
/// assert_eq!(analyzer.last_names(&dataset).get("Smith"), Some(2));
/// # Ok::<(), roster_analysis::AnalysisError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Analyzer {
    age_bins: AgeBins,
    name_delimiter: char,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            age_bins: AgeBins::default(),
            name_delimiter: last_names::DEFAULT_DELIMITER,
        }
    }
}

impl Analyzer {
    /// Validates `config` and creates an analyzer.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidConfig`](crate::AnalysisError::InvalidConfig)
    /// if the age group edges contain `NaN` or are not strictly increasing.
    pub fn new(config: &AnalysisConfig) -> crate::Result<Self> {
        let age_bins = AgeBins::new(config.age_bin_edges)?;
        Ok(Self {
            age_bins,
            name_delimiter: config.name_delimiter,
        })
    }

    #[must_use]
    pub fn age_bins(&self) -> &AgeBins {
        &self.age_bins
    }

    #[must_use]
    pub fn name_delimiter(&self) -> char {
        self.name_delimiter
    }

    /// Computes survival by class, sex and age group over the classes and
    /// sexes observed in `dataset`.
    ///
    /// An empty dataset yields an empty table.
    ///
    /// # Errors
    ///
    /// Never fails for observed domains; the `Result` mirrors
    /// [`survival_demographics_with_domains`](Self::survival_demographics_with_domains).
    pub fn survival_demographics(&self, dataset: &Dataset) -> crate::Result<SurvivalDemographics> {
        let domains = GroupDomains::observed(dataset);
        self.survival_demographics_with_domains(dataset, &domains)
    }

    /// Computes survival by class, sex and age group over explicit domains.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInput`](crate::AnalysisError::InvalidInput)
    /// if a row has a class or sex outside `domains`.
    pub fn survival_demographics_with_domains(
        &self,
        dataset: &Dataset,
        domains: &GroupDomains,
    ) -> crate::Result<SurvivalDemographics> {
        SurvivalDemographics::compute(dataset, &self.age_bins, domains)
    }

    #[must_use]
    pub fn family_groups(&self, dataset: &Dataset) -> FamilyGroups {
        FamilyGroups::compute(dataset)
    }

    #[must_use]
    pub fn last_names(&self, dataset: &Dataset) -> ValueCounts<String> {
        count_last_names(dataset, self.name_delimiter)
    }

    #[must_use]
    pub fn age_division(&self, dataset: &Dataset) -> AgeDivision {
        AgeDivision::compute(dataset)
    }

    /// Runs every analysis on `dataset`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`survival_demographics`](Self::survival_demographics).
    pub fn report(&self, dataset: &Dataset) -> crate::Result<Report> {
        log::info!("analyzing {} passengers", dataset.len());
        Ok(Report {
            demographics: self.survival_demographics(dataset)?,
            family_groups: self.family_groups(dataset),
            last_names: self.last_names(dataset),
            age_division: self.age_division(dataset),
        })
    }
}

/// The results of every analysis over one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub demographics: SurvivalDemographics,
    pub family_groups: FamilyGroups,
    pub last_names: ValueCounts<String>,
    pub age_division: AgeDivision,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnalysisError, Passenger};

    #[test]
    fn test_default_config_round_trips_infinity_as_null() {
        let config = AnalysisConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"age_bin_edges":[0.0,12.0,19.0,59.0,null],"name_delimiter":","}"#
        );
        let parsed: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"name_delimiter": ";"}"#).unwrap();
        assert_eq!(config.name_delimiter, ';');
        assert_eq!(config.age_bin_edges, AgeBins::DEFAULT_EDGES);
    }

    #[test]
    fn test_config_rejects_wrong_edge_count() {
        let result = serde_json::from_str::<AnalysisConfig>(r#"{"age_bin_edges": [0, 12, 19]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_edges_rejected_by_analyzer() {
        let config = AnalysisConfig {
            age_bin_edges: [0.0, 12.0, 12.0, 59.0, f64::INFINITY],
            ..AnalysisConfig::default()
        };
        let err = Analyzer::new(&config).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidConfig(_)));
    }

    #[test]
    fn test_report_runs_every_analysis() {
        let dataset = Dataset::new(vec![
            Passenger::new(1, "female")
                .with_age(30.0)
                .with_survived(true)
                .with_fare(80.0)
                .with_name("Smith, Mrs. Jane"),
            Passenger::new(3, "male")
                .with_age(20.0)
                .with_survived(false)
                .with_family(1, 0)
                .with_fare(7.25)
                .with_name("Smith, Mr. John"),
        ])
        .unwrap();
        let report = Analyzer::default().report(&dataset).unwrap();
        assert_eq!(report.demographics.len(), 2 * 2 * 4);
        assert_eq!(report.family_groups.len(), 2);
        assert_eq!(report.last_names.get("Smith"), Some(2));
        assert_eq!(report.age_division.flags().len(), 2);
    }

    #[test]
    fn test_empty_dataset_report() {
        let report = Analyzer::default().report(&Dataset::default()).unwrap();
        assert!(report.demographics.is_empty());
        assert!(report.family_groups.is_empty());
        assert!(report.last_names.is_empty());
        assert!(report.age_division.flags().is_empty());
    }
}
