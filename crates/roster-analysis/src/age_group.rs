//! Age groups derived from a passenger's age
//!
//! Ages are bucketed into four ordered groups using fixed, upper-inclusive
//! boundaries:
//!
//! ```text
//! Child   (0, 12]
//! Teen    (12, 19]
//! Adult   (19, 59]
//! Senior  (59, inf)
//! ```
//!
//! A passenger whose age is unknown, zero or otherwise outside the first
//! interval has no age group. Such rows are excluded from age-grouped
//! aggregations instead of forming an implicit extra group.

use std::fmt;

use roster_stats::binning::{BinningError, FixedBins};
use serde::{Deserialize, Serialize};

/// One of the four age groups, ordered from youngest to oldest.
///
/// The ordering follows the declaration order, not the label text, so
/// `Child < Teen < Adult < Senior`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum AgeGroup {
    Child,
    Teen,
    Adult,
    Senior,
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_str(), f)
    }
}

impl AgeGroup {
    /// All age groups in order.
    pub const ALL: [Self; 4] = [Self::Child, Self::Teen, Self::Adult, Self::Senior];

    #[must_use]
    pub fn to_str(self) -> &'static str {
        match self {
            AgeGroup::Child => "Child",
            AgeGroup::Teen => "Teen",
            AgeGroup::Adult => "Adult",
            AgeGroup::Senior => "Senior",
        }
    }
}

/// Boundaries mapping ages onto [`AgeGroup`]s.
///
/// # Examples
///
/// ```
/// use roster_analysis::{AgeBins, AgeGroup};
///
/// let bins = AgeBins::default();
/// assert_eq!(bins.classify(Some(12.0)), Some(AgeGroup::Child));
/// assert_eq!(bins.classify(Some(19.0)), Some(AgeGroup::Teen));
/// assert_eq!(bins.classify(Some(42.0)), Some(AgeGroup::Adult));
/// assert_eq!(bins.classify(Some(60.0)), Some(AgeGroup::Senior));
/// assert_eq!(bins.classify(None), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AgeBins {
    bins: FixedBins<AgeGroup>,
}

impl AgeBins {
    /// Edges of the standard age groups.
    pub const DEFAULT_EDGES: [f64; 5] = [0.0, 12.0, 19.0, 59.0, f64::INFINITY];

    /// Creates age bins from five strictly increasing edges, one more than the
    /// number of age groups.
    ///
    /// # Errors
    ///
    /// Returns [`BinningError`] if an edge is `NaN` or the edges are not
    /// strictly increasing.
    pub fn new(edges: [f64; 5]) -> Result<Self, BinningError> {
        let bins = FixedBins::new(edges.to_vec(), AgeGroup::ALL.to_vec())?;
        Ok(Self { bins })
    }

    /// Returns the age group of `age`, or `None` if the age is unknown or
    /// falls outside every group.
    #[must_use]
    pub fn classify(&self, age: Option<f64>) -> Option<AgeGroup> {
        age.and_then(|age| self.bins.classify(age)).copied()
    }

    #[must_use]
    pub fn edges(&self) -> &[f64] {
        self.bins.edges()
    }

    /// Returns the `(lower, upper]` age interval of `group`.
    #[must_use]
    pub fn interval(&self, group: AgeGroup) -> Option<(f64, f64)> {
        self.bins.interval(group as usize)
    }
}

impl Default for AgeBins {
    // the default edges are a constant that always validates
    fn default() -> Self {
        Self::new(Self::DEFAULT_EDGES).expect("default age edges are strictly increasing")
    }
}
