//! Descriptive statistics over a passenger roster
//!
//! This crate is the aggregation engine behind the `roster` tool. It consumes an
//! already-loaded, validated [`Dataset`] of [`Passenger`] rows and produces
//! tables or counted mappings; it never reads files or renders output itself.
//!
//! # Overview
//!
//! Every analysis follows the same shape: derive a key from each row, group the
//! rows by that key, aggregate each group, and derive a metric from the
//! aggregates. The analyses differ in their completeness contract:
//!
//! | Analysis | Grouping key | Missing combinations |
//! |----------|--------------|----------------------|
//! | [`demographics`] | (class, sex, age group) | emitted with zero counts |
//! | [`family`] | (family size, class) | absent |
//! | [`last_names`] | last name | absent |
//! | [`age_division`] | class | n/a (one flag per row) |
//!
//! Undefined statistics are reported inline rather than as errors: a ratio or
//! mean over an empty group is `NaN`, and a comparison against a missing age is
//! [`OlderPassenger::Unknown`]. Only structural problems (invalid rows, empty
//! grouping domains, invalid configuration) produce an [`AnalysisError`].
//!
//! # Examples
//!
//! ```
//! use roster_analysis::{AgeGroup, Analyzer, Dataset, Passenger};
//!
//! let dataset = Dataset::new(vec![
//!     Passenger::new(1, "female").with_age(30.0).with_survived(true),
//!     Passenger::new(1, "female").with_age(8.0).with_survived(false),
//! ])?;
//!
//! let analyzer = Analyzer::default();
//! let demographics = analyzer.survival_demographics(&dataset)?;
//!
//! // 1 class x 1 sex x 4 age groups
//! assert_eq!(demographics.len(), 4);
//!
//! let adults = demographics.get(1, "female", AgeGroup::Adult).unwrap();
//! assert_eq!(adults.n_passengers, 1);
//! assert_eq!(adults.survival_rate, 1.0);
//!
//! let seniors = demographics.get(1, "female", AgeGroup::Senior).unwrap();
//! assert_eq!(seniors.n_passengers, 0);
//! assert!(seniors.survival_rate.is_nan());
//! # Ok::<(), roster_analysis::AnalysisError>(())
//! ```

use roster_stats::binning::BinningError;

pub use self::{
    age_division::{AgeDivision, OlderPassenger},
    age_group::{AgeBins, AgeGroup},
    analyzer::{AnalysisConfig, Analyzer, Report},
    demographics::{DemographicsRow, GroupDomains, GroupKey, SurvivalDemographics},
    family::{FamilyFareRow, FamilyGroups},
    passenger::{Dataset, Passenger},
};

pub mod age_division;
pub mod age_group;
pub mod analyzer;
pub mod demographics;
pub mod family;
pub mod last_names;
pub mod passenger;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AnalysisError {
    /// A row is missing a required attribute or holds a value of the wrong kind.
    #[display("invalid input: {reason}")]
    InvalidInput { reason: String },
    /// A grouping dimension has no values, so the group grid would be empty.
    #[display("grouping dimension '{dimension}' has no values")]
    EmptyDomain { dimension: &'static str },
    #[display("invalid age group configuration: {_0}")]
    #[from]
    InvalidConfig(BinningError),
}

impl AnalysisError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;
