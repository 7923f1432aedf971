//! Whether each passenger is older than the median of their class
//!
//! The median age is computed per class over the known ages only. Each row is
//! then flagged by comparing its age with its class median. The comparison is
//! tri-state: a row with an unknown age, or in a class where no age is known,
//! is [`OlderPassenger::Unknown`] rather than silently "not older".

use std::{collections::BTreeMap, fmt};

use roster_stats::percentiles::median;
use serde::Serialize;

use crate::Dataset;

/// Result of comparing a passenger's age with their class median.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum OlderPassenger {
    /// Age is strictly greater than the class median
    Older,
    /// Age is less than or equal to the class median
    NotOlder,
    /// Age or class median is unknown
    Unknown,
}

impl fmt::Display for OlderPassenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_str(), f)
    }
}

impl OlderPassenger {
    /// Compares `age` with `median`.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_analysis::OlderPassenger;
    ///
    /// assert_eq!(OlderPassenger::from_comparison(Some(50.0), 40.0), OlderPassenger::Older);
    /// assert_eq!(OlderPassenger::from_comparison(Some(40.0), 40.0), OlderPassenger::NotOlder);
    /// assert_eq!(OlderPassenger::from_comparison(None, 40.0), OlderPassenger::Unknown);
    /// assert_eq!(OlderPassenger::from_comparison(Some(50.0), f64::NAN), OlderPassenger::Unknown);
    /// ```
    #[must_use]
    pub fn from_comparison(age: Option<f64>, median: f64) -> Self {
        match age {
            Some(age) if !age.is_nan() && !median.is_nan() => {
                if age > median {
                    Self::Older
                } else {
                    Self::NotOlder
                }
            }
            _ => Self::Unknown,
        }
    }

    /// Converts the flag into a nullable boolean.
    #[must_use]
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Older => Some(true),
            Self::NotOlder => Some(false),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Older => "older",
            Self::NotOlder => "not_older",
            Self::Unknown => "unknown",
        }
    }
}

/// Per-class median ages and the per-row flags derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeDivision {
    class_medians: BTreeMap<u8, f64>,
    flags: Vec<OlderPassenger>,
}

impl AgeDivision {
    /// Computes the median age of every class and flags each row of `dataset`.
    ///
    /// Every class present in the data gets a median; it is `NaN` when no
    /// passenger of the class has a known age. `flags()[i]` belongs to row `i`.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_analysis::{AgeDivision, Dataset, OlderPassenger, Passenger};
    ///
    /// let dataset = Dataset::new(vec![
    ///     Passenger::new(1, "male").with_age(20.0),
    ///     Passenger::new(1, "male").with_age(40.0),
    ///     Passenger::new(1, "female").with_age(60.0),
    ///     Passenger::new(1, "female").with_age(25.0),
    ///     Passenger::new(1, "female").with_age(50.0),
    ///     Passenger::new(1, "female"),
    /// ])?;
    /// let division = AgeDivision::compute(&dataset);
    ///
    /// assert_eq!(division.class_median(1), Some(40.0));
    /// assert_eq!(division.flag(3), Some(OlderPassenger::NotOlder));
    /// assert_eq!(division.flag(4), Some(OlderPassenger::Older));
    /// assert_eq!(division.flag(5), Some(OlderPassenger::Unknown));
    /// # Ok::<(), roster_analysis::AnalysisError>(())
    /// ```
    #[must_use]
    pub fn compute(dataset: &Dataset) -> Self {
        let mut ages_by_class: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
        for row in dataset {
            let ages = ages_by_class.entry(row.pclass).or_default();
            if let Some(age) = row.age {
                ages.push(age);
            }
        }

        let class_medians = ages_by_class
            .into_iter()
            .map(|(pclass, ages)| (pclass, median(ages)))
            .collect::<BTreeMap<_, _>>();
        for (pclass, median) in &class_medians {
            log::debug!("class {pclass}: median age {median}");
        }

        let flags = dataset
            .iter()
            .map(|row| {
                let median = class_medians.get(&row.pclass).copied().unwrap_or(f64::NAN);
                OlderPassenger::from_comparison(row.age, median)
            })
            .collect();

        Self {
            class_medians,
            flags,
        }
    }

    #[must_use]
    pub fn class_medians(&self) -> &BTreeMap<u8, f64> {
        &self.class_medians
    }

    /// Returns the median age of `pclass`, or `None` if the class never occurs.
    #[must_use]
    pub fn class_median(&self, pclass: u8) -> Option<f64> {
        self.class_medians.get(&pclass).copied()
    }

    #[must_use]
    pub fn flags(&self) -> &[OlderPassenger] {
        &self.flags
    }

    #[must_use]
    pub fn flag(&self, row: usize) -> Option<OlderPassenger> {
        self.flags.get(row).copied()
    }

    /// Returns the number of rows flagged `Older`, `NotOlder` and `Unknown`.
    #[must_use]
    pub fn counts(&self) -> (usize, usize, usize) {
        self.flags
            .iter()
            .fold((0, 0, 0), |(older, not_older, unknown), flag| match flag {
                OlderPassenger::Older => (older + 1, not_older, unknown),
                OlderPassenger::NotOlder => (older, not_older + 1, unknown),
                OlderPassenger::Unknown => (older, not_older, unknown + 1),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Passenger;

    #[test]
    fn test_medians_per_class() {
        let dataset = Dataset::new(vec![
            Passenger::new(1, "male").with_age(30.0),
            Passenger::new(1, "male").with_age(50.0),
            Passenger::new(3, "male").with_age(20.0),
            Passenger::new(3, "male").with_age(22.0),
            Passenger::new(3, "male").with_age(40.0),
        ])
        .unwrap();
        let division = AgeDivision::compute(&dataset);
        assert_eq!(division.class_median(1), Some(40.0));
        assert_eq!(division.class_median(3), Some(22.0));
        assert_eq!(division.class_median(2), None);
        assert_eq!(
            division.flags(),
            &[
                OlderPassenger::NotOlder,
                OlderPassenger::Older,
                OlderPassenger::NotOlder,
                OlderPassenger::NotOlder,
                OlderPassenger::Older,
            ]
        );
    }

    #[test]
    fn test_class_without_known_ages() {
        let dataset = Dataset::new(vec![
            Passenger::new(2, "female"),
            Passenger::new(2, "male"),
            Passenger::new(1, "male").with_age(30.0),
        ])
        .unwrap();
        let division = AgeDivision::compute(&dataset);
        assert!(division.class_median(2).unwrap().is_nan());
        assert_eq!(division.flag(0), Some(OlderPassenger::Unknown));
        assert_eq!(division.flag(1), Some(OlderPassenger::Unknown));
        assert_eq!(division.flag(2), Some(OlderPassenger::NotOlder));
    }

    #[test]
    fn test_flags_aligned_with_rows() {
        let dataset = Dataset::new(vec![
            Passenger::new(1, "male").with_age(10.0),
            Passenger::new(1, "male"),
            Passenger::new(1, "male").with_age(90.0),
        ])
        .unwrap();
        let division = AgeDivision::compute(&dataset);
        assert_eq!(division.flags().len(), dataset.len());
        assert_eq!(division.counts(), (1, 1, 1));
        assert_eq!(division.flag(3), None);
    }

    #[test]
    fn test_as_bool() {
        assert_eq!(OlderPassenger::Older.as_bool(), Some(true));
        assert_eq!(OlderPassenger::NotOlder.as_bool(), Some(false));
        assert_eq!(OlderPassenger::Unknown.as_bool(), None);
        assert!(OlderPassenger::Unknown.is_unknown());
    }

    #[test]
    fn test_display_matches_serialization() {
        for flag in [
            OlderPassenger::Older,
            OlderPassenger::NotOlder,
            OlderPassenger::Unknown,
        ] {
            let json = serde_json::to_string(&flag).unwrap();
            assert_eq!(json, format!("\"{flag}\""));
        }
    }
}
