//! Survival by class, sex and age group
//!
//! This module groups passengers by `(class, sex, age group)` and reports, for
//! each group, how many passengers it holds, how many of them survived, and the
//! resulting survival rate.
//!
//! # Dense Output
//!
//! Consumers of this table (cross-tabulations, faceted charts) expect one row
//! for every combination of key values. The grouping therefore runs in two
//! steps:
//!
//! 1. **Group**: Tally the rows that actually occur into a sparse map
//! 2. **Densify**: Walk the cartesian product of the declared domains and emit
//!    every key, filling keys without rows with zero counts
//!
//! ```text
//! classes {1, 2, 3} x sexes {female, male} x age groups {Child, Teen, Adult, Senior}
//!   => exactly 3 x 2 x 4 = 24 rows, however sparse the input
//! ```
//!
//! A group with no passengers has a `NaN` survival rate: zero survivors out of
//! zero passengers is undefined, not a rate of zero.
//!
//! # Domains
//!
//! The class and sex domains are either observed from the data
//! ([`GroupDomains::observed`]) or supplied by the caller
//! ([`GroupDomains::new`]). The age-group domain is always the four fixed
//! [`AgeGroup`]s. Rows without an age group (unknown age) are excluded.

use std::collections::BTreeMap;

use roster_stats::descriptive::ratio;
use serde::Serialize;

use crate::{AgeBins, AgeGroup, AnalysisError, Dataset};

/// The class and sex values that span the group grid.
///
/// Both lists are sorted and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDomains {
    classes: Vec<u8>,
    sexes: Vec<String>,
}

impl GroupDomains {
    /// Creates domains from explicit class and sex values.
    ///
    /// The values are sorted and de-duplicated.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyDomain`] if either list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use roster_analysis::GroupDomains;
    /// let domains = GroupDomains::new([3, 1, 2, 1], ["male", "female"]).unwrap();
    /// assert_eq!(domains.classes(), &[1, 2, 3]);
    /// assert_eq!(domains.sexes(), &["female", "male"]);
    /// assert_eq!(domains.len(), 24);
    /// ```
    pub fn new<C, S>(classes: C, sexes: S) -> crate::Result<Self>
    where
        C: IntoIterator<Item = u8>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let mut classes = classes.into_iter().collect::<Vec<_>>();
        classes.sort_unstable();
        classes.dedup();
        let mut sexes = sexes.into_iter().map(Into::into).collect::<Vec<_>>();
        sexes.sort_unstable();
        sexes.dedup();

        if classes.is_empty() {
            return Err(AnalysisError::EmptyDomain { dimension: "pclass" });
        }
        if sexes.is_empty() {
            return Err(AnalysisError::EmptyDomain { dimension: "sex" });
        }
        Ok(Self { classes, sexes })
    }

    /// Derives the domains from the distinct values present in `dataset`.
    ///
    /// The domains of an empty dataset are empty, which yields an empty grid.
    #[must_use]
    pub fn observed(dataset: &Dataset) -> Self {
        Self {
            classes: dataset.observed_classes(),
            sexes: dataset.observed_sexes(),
        }
    }

    #[must_use]
    pub fn classes(&self) -> &[u8] {
        &self.classes
    }

    #[must_use]
    pub fn sexes(&self) -> &[String] {
        &self.sexes
    }

    /// Returns the number of keys in the grid: `|classes| x |sexes| x 4`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len() * self.sexes.len() * AgeGroup::ALL.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, pclass: u8, sex: &str) -> bool {
        self.classes.binary_search(&pclass).is_ok()
            && self
                .sexes
                .binary_search_by(|s| s.as_str().cmp(sex))
                .is_ok()
    }

    /// Iterates over every key of the grid in output order.
    pub fn keys(&self) -> impl Iterator<Item = GroupKey> + '_ {
        self.classes.iter().flat_map(move |&pclass| {
            self.sexes.iter().flat_map(move |sex| {
                AgeGroup::ALL.into_iter().map(move |age_group| GroupKey {
                    pclass,
                    sex: sex.clone(),
                    age_group,
                })
            })
        })
    }
}

/// A `(class, sex, age group)` grouping key.
///
/// Keys order lexicographically by class, then sex, then age group in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub pclass: u8,
    pub sex: String,
    pub age_group: AgeGroup,
}

/// Survival statistics for one `(class, sex, age group)` combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemographicsRow {
    pub pclass: u8,
    pub sex: String,
    pub age_group: AgeGroup,
    /// Number of passengers in the group
    pub n_passengers: usize,
    /// Number of passengers known to have survived
    pub n_survivors: usize,
    /// `n_survivors / n_passengers`; `NaN` for an empty group
    pub survival_rate: f64,
}

impl DemographicsRow {
    fn new(key: GroupKey, tally: Tally) -> Self {
        #[expect(clippy::cast_precision_loss)]
        let survival_rate = ratio(tally.survivors as f64, tally.passengers);
        Self {
            pclass: key.pclass,
            sex: key.sex,
            age_group: key.age_group,
            n_passengers: tally.passengers,
            n_survivors: tally.survivors,
            survival_rate,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n_passengers == 0
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    passengers: usize,
    survivors: usize,
}

/// The dense survival table: one row per key of the group grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SurvivalDemographics {
    rows: Vec<DemographicsRow>,
    excluded: usize,
}

impl SurvivalDemographics {
    /// Groups `dataset` over the grid spanned by `domains` and the age groups
    /// of `bins`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidInput`] if a row with a defined age
    /// group has a class or sex outside `domains`.
    pub fn compute(
        dataset: &Dataset,
        bins: &AgeBins,
        domains: &GroupDomains,
    ) -> crate::Result<Self> {
        let mut groups: BTreeMap<GroupKey, Tally> = BTreeMap::new();
        let mut excluded = 0;

        for (idx, row) in dataset.iter().enumerate() {
            let Some(age_group) = bins.classify(row.age) else {
                excluded += 1;
                continue;
            };
            if !domains.contains(row.pclass, &row.sex) {
                return Err(AnalysisError::invalid_input(format!(
                    "row {idx}: (pclass {}, sex {:?}) is outside the declared domains",
                    row.pclass, row.sex
                )));
            }

            let tally = groups
                .entry(GroupKey {
                    pclass: row.pclass,
                    sex: row.sex.clone(),
                    age_group,
                })
                .or_default();
            tally.passengers += 1;
            if row.survived == Some(true) {
                tally.survivors += 1;
            }
        }

        log::debug!(
            "grouped {} rows into {} non-empty groups ({excluded} rows without age group)",
            dataset.len() - excluded,
            groups.len(),
        );

        let rows = densify(groups, domains);
        Ok(Self { rows, excluded })
    }

    #[must_use]
    pub fn rows(&self) -> &[DemographicsRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DemographicsRow> + '_ {
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

    /// Returns the row for the given key, or `None` if the key is not in the grid.
    #[must_use]
    pub fn get(&self, pclass: u8, sex: &str, age_group: AgeGroup) -> Option<&DemographicsRow> {
        self.rows
            .iter()
            .find(|row| row.pclass == pclass && row.sex == sex && row.age_group == age_group)
    }

    /// Returns the number of rows that were excluded because their age group
    /// is undefined.
    #[must_use]
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// Returns the total number of passengers over all groups.
    #[must_use]
    pub fn total_passengers(&self) -> usize {
        self.rows.iter().map(|row| row.n_passengers).sum()
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<DemographicsRow> {
        self.rows
    }
}

/// Expands the sparse `groups` to one row per key of `domains`, in key order.
///
/// Keys without a tally get zero counts.
fn densify(mut groups: BTreeMap<GroupKey, Tally>, domains: &GroupDomains) -> Vec<DemographicsRow> {
    let rows = domains
        .keys()
        .map(|key| {
            let tally = groups.remove(&key).unwrap_or_default();
            DemographicsRow::new(key, tally)
        })
        .collect::<Vec<_>>();
    debug_assert!(groups.is_empty(), "tallied keys outside the domains");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Passenger;

    fn compute(rows: Vec<Passenger>) -> SurvivalDemographics {
        let dataset = Dataset::new(rows).unwrap();
        let domains = GroupDomains::observed(&dataset);
        SurvivalDemographics::compute(&dataset, &AgeBins::default(), &domains).unwrap()
    }

    #[test]
    fn test_two_passengers_one_class_one_sex() {
        let table = compute(vec![
            Passenger::new(1, "female").with_age(30.0).with_survived(true),
            Passenger::new(1, "female").with_age(8.0).with_survived(false),
        ]);

        assert_eq!(table.len(), 4);

        let adult = table.get(1, "female", AgeGroup::Adult).unwrap();
        assert_eq!((adult.n_passengers, adult.n_survivors), (1, 1));
        assert_eq!(adult.survival_rate, 1.0);

        let child = table.get(1, "female", AgeGroup::Child).unwrap();
        assert_eq!((child.n_passengers, child.n_survivors), (1, 0));
        assert_eq!(child.survival_rate, 0.0);

        for group in [AgeGroup::Teen, AgeGroup::Senior] {
            let row = table.get(1, "female", group).unwrap();
            assert_eq!((row.n_passengers, row.n_survivors), (0, 0));
            assert!(row.survival_rate.is_nan());
        }
    }

    #[test]
    fn test_twenty_four_rows_with_supplied_domains() {
        let dataset = Dataset::new(vec![
            Passenger::new(1, "female").with_age(30.0).with_survived(true),
            Passenger::new(1, "female").with_age(8.0).with_survived(false),
        ])
        .unwrap();
        let domains = GroupDomains::new([1, 2, 3], ["female", "male"]).unwrap();
        let table = SurvivalDemographics::compute(&dataset, &AgeBins::default(), &domains).unwrap();

        assert_eq!(table.len(), 24);
        let empty = table.iter().filter(|row| row.is_empty()).count();
        assert_eq!(empty, 22);
        assert!(
            table
                .iter()
                .filter(|row| row.is_empty())
                .all(|row| row.n_survivors == 0 && row.survival_rate.is_nan())
        );
    }

    #[test]
    fn test_rows_sorted_by_class_sex_age_group() {
        let table = compute(vec![
            Passenger::new(3, "male").with_age(70.0),
            Passenger::new(1, "female").with_age(5.0),
        ]);
        let keys = table
            .iter()
            .map(|row| (row.pclass, row.sex.clone(), row.age_group))
            .collect::<Vec<_>>();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys[0], (1, "female".to_owned(), AgeGroup::Child));
        assert_eq!(keys[1], (1, "female".to_owned(), AgeGroup::Teen));
        assert_eq!(keys[4], (1, "male".to_owned(), AgeGroup::Child));
        assert_eq!(table.len(), 16);
    }

    #[test]
    fn test_unknown_age_is_excluded() {
        let table = compute(vec![
            Passenger::new(2, "male").with_survived(true),
            Passenger::new(2, "male").with_age(0.0).with_survived(true),
            Passenger::new(2, "male").with_age(40.0).with_survived(true),
        ]);
        assert_eq!(table.len(), 4);
        assert_eq!(table.total_passengers(), 1);
        assert_eq!(table.excluded(), 2);
    }

    #[test]
    fn test_unknown_outcome_counts_as_passenger_only() {
        let table = compute(vec![
            Passenger::new(2, "male").with_age(40.0),
            Passenger::new(2, "male").with_age(41.0).with_survived(true),
        ]);
        let adult = table.get(2, "male", AgeGroup::Adult).unwrap();
        assert_eq!(adult.n_passengers, 2);
        assert_eq!(adult.n_survivors, 1);
        assert_eq!(adult.survival_rate, 0.5);
    }

    #[test]
    fn test_empty_dataset_observed_domains() {
        let table = compute(vec![]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_dataset_supplied_domains_is_all_zero() {
        let dataset = Dataset::default();
        let domains = GroupDomains::new([1, 2], ["female", "male"]).unwrap();
        let table = SurvivalDemographics::compute(&dataset, &AgeBins::default(), &domains).unwrap();
        assert_eq!(table.len(), 16);
        assert!(table.iter().all(DemographicsRow::is_empty));
    }

    #[test]
    fn test_row_outside_supplied_domains_is_rejected() {
        let dataset = Dataset::new(vec![Passenger::new(4, "female").with_age(30.0)]).unwrap();
        let domains = GroupDomains::new([1, 2, 3], ["female", "male"]).unwrap();
        let err =
            SurvivalDemographics::compute(&dataset, &AgeBins::default(), &domains).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput { .. }));
    }

    #[test]
    fn test_empty_supplied_domain_is_rejected() {
        let err = GroupDomains::new([], ["female"]).unwrap_err();
        assert_eq!(err, AnalysisError::EmptyDomain { dimension: "pclass" });
        let err = GroupDomains::new([1], Vec::<String>::new()).unwrap_err();
        assert_eq!(err, AnalysisError::EmptyDomain { dimension: "sex" });
    }

    #[test]
    fn test_compute_is_repeatable() {
        let dataset = Dataset::new(vec![
            Passenger::new(1, "female").with_age(30.0).with_survived(true),
            Passenger::new(3, "male").with_age(22.0).with_survived(false),
        ])
        .unwrap();
        let domains = GroupDomains::observed(&dataset);
        let bins = AgeBins::default();
        let first = SurvivalDemographics::compute(&dataset, &bins, &domains).unwrap();
        let second = SurvivalDemographics::compute(&dataset, &bins, &domains).unwrap();
        // NaN != NaN, so compare the keys and counts
        let summary = |table: &SurvivalDemographics| {
            table
                .iter()
                .map(|row| (row.pclass, row.sex.clone(), row.age_group, row.n_passengers, row.n_survivors))
                .collect::<Vec<_>>()
        };
        assert_eq!(summary(&first), summary(&second));
    }
}
