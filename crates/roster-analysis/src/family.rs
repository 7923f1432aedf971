//! Fare statistics by family size and class
//!
//! Rows are grouped by `(family size, class)` where the family size counts the
//! passenger plus their siblings, spouses, parents and children aboard. Each
//! group reports the mean, minimum and maximum of its known fares.
//!
//! Unlike [`demographics`](crate::demographics), this grouping is not
//! densified: only `(family size, class)` pairs that occur in the data appear
//! in the output. A pair whose passengers all have an unknown fare still
//! appears, with zero valid fares and `NaN` statistics.

use std::collections::BTreeMap;

use roster_stats::descriptive::DescriptiveStats;
use serde::Serialize;

use crate::Dataset;

/// Fare statistics for one `(family size, class)` group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyFareRow {
    pub family_size: u32,
    pub pclass: u8,
    /// Number of passengers in the group with a known fare
    pub n_passengers: usize,
    pub avg_fare: f64,
    pub min_fare: f64,
    pub max_fare: f64,
}

impl FamilyFareRow {
    fn new(family_size: u32, pclass: u8, fares: &[f64]) -> Self {
        let stats = DescriptiveStats::new(fares.iter().copied());
        Self {
            family_size,
            pclass,
            n_passengers: fares.len(),
            avg_fare: stats.map_or(f64::NAN, |s| s.mean),
            min_fare: stats.map_or(f64::NAN, |s| s.min),
            max_fare: stats.map_or(f64::NAN, |s| s.max),
        }
    }
}

/// Observed `(family size, class)` groups, sorted by family size then class.
///
/// # Examples
///
/// ```
/// use roster_analysis::{Dataset, FamilyGroups, Passenger};
///
/// let dataset = Dataset::new(vec![
///     Passenger::new(3, "male").with_family(1, 2).with_fare(20.0),
///     Passenger::new(3, "female").with_family(2, 1).with_fare(30.0),
///     Passenger::new(1, "female"),
/// ])?;
/// let groups = FamilyGroups::compute(&dataset);
///
/// assert_eq!(groups.len(), 2);
/// let family = groups.get(4, 3).unwrap();
/// assert_eq!(family.n_passengers, 2);
/// assert_eq!(family.avg_fare, 25.0);
///
/// let alone = groups.get(1, 1).unwrap();
/// assert_eq!(alone.n_passengers, 0);
/// assert!(alone.avg_fare.is_nan());
///
/// // never observed, so not emitted
/// assert!(groups.get(1, 2).is_none());
/// # Ok::<(), roster_analysis::AnalysisError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyGroups {
    rows: Vec<FamilyFareRow>,
}

impl FamilyGroups {
    #[must_use]
    pub fn compute(dataset: &Dataset) -> Self {
        let mut groups: BTreeMap<(u32, u8), Vec<f64>> = BTreeMap::new();
        for row in dataset {
            let fares = groups.entry((row.family_size(), row.pclass)).or_default();
            if let Some(fare) = row.fare {
                fares.push(fare);
            }
        }

        log::debug!(
            "grouped {} rows into {} family groups",
            dataset.len(),
            groups.len()
        );

        let rows = groups
            .into_iter()
            .map(|((family_size, pclass), fares)| FamilyFareRow::new(family_size, pclass, &fares))
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[FamilyFareRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FamilyFareRow> + '_ {
        self.rows.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn get(&self, family_size: u32, pclass: u8) -> Option<&FamilyFareRow> {
        self.rows
            .binary_search_by(|row| (row.family_size, row.pclass).cmp(&(family_size, pclass)))
            .ok()
            .map(|idx| &self.rows[idx])
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<FamilyFareRow> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Passenger;

    #[test]
    fn test_family_size_includes_self() {
        let dataset = Dataset::new(vec![
            Passenger::new(3, "male").with_family(1, 2).with_fare(21.0),
        ])
        .unwrap();
        let groups = FamilyGroups::compute(&dataset);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.rows()[0].family_size, 4);
    }

    #[test]
    fn test_fare_statistics() {
        let dataset = Dataset::new(vec![
            Passenger::new(1, "female").with_family(1, 0).with_fare(50.0),
            Passenger::new(1, "male").with_family(0, 1).with_fare(70.0),
            Passenger::new(1, "male").with_family(1, 0).with_fare(90.0),
            Passenger::new(1, "male").with_family(1, 0),
        ])
        .unwrap();
        let groups = FamilyGroups::compute(&dataset);
        let row = groups.get(2, 1).unwrap();
        assert_eq!(row.n_passengers, 3);
        assert_eq!(row.avg_fare, 70.0);
        assert_eq!(row.min_fare, 50.0);
        assert_eq!(row.max_fare, 90.0);
    }

    #[test]
    fn test_no_densification() {
        let dataset = Dataset::new(vec![
            Passenger::new(1, "female").with_fare(10.0),
            Passenger::new(3, "male").with_family(4, 1).with_fare(8.0),
        ])
        .unwrap();
        let groups = FamilyGroups::compute(&dataset);
        let keys = groups
            .iter()
            .map(|row| (row.family_size, row.pclass))
            .collect::<Vec<_>>();
        assert_eq!(keys, vec![(1, 1), (6, 3)]);
    }

    #[test]
    fn test_group_with_only_unknown_fares() {
        let dataset = Dataset::new(vec![
            Passenger::new(2, "female").with_age(30.0),
            Passenger::new(2, "male"),
        ])
        .unwrap();
        let groups = FamilyGroups::compute(&dataset);
        assert_eq!(groups.len(), 1);
        let row = groups.get(1, 2).unwrap();
        assert_eq!(row.n_passengers, 0);
        assert!(row.avg_fare.is_nan());
        assert!(row.min_fare.is_nan());
        assert!(row.max_fare.is_nan());
    }

    #[test]
    fn test_sorted_by_family_size_then_class() {
        let dataset = Dataset::new(vec![
            Passenger::new(3, "male").with_family(2, 0),
            Passenger::new(1, "male").with_family(2, 0),
            Passenger::new(2, "male"),
            Passenger::new(1, "male").with_family(0, 1),
        ])
        .unwrap();
        let keys = FamilyGroups::compute(&dataset)
            .iter()
            .map(|row| (row.family_size, row.pclass))
            .collect::<Vec<_>>();
        assert_eq!(keys, vec![(1, 2), (2, 1), (3, 1), (3, 3)]);
    }

    #[test]
    fn test_empty_dataset() {
        assert!(FamilyGroups::compute(&Dataset::default()).is_empty());
    }
}
