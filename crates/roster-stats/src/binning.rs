//! Fixed-boundary binning
//!
//! This module maps continuous values onto an ordered list of labels using a
//! fixed, strictly increasing list of edges. Bin `i` covers the half-open
//! interval `(edges[i], edges[i + 1]]`: the lower edge is excluded and the
//! upper edge is included.
//!
//! ```text
//! edges:   0        12        19        59        inf
//!          (--------](--------](--------](---------]
//! labels:    Child      Teen      Adult     Senior
//! ```
//!
//! The edges and labels are validated once, when the bins are constructed, so
//! classification itself cannot fail. Values that fall outside every interval
//! (at or below the first edge, above the last edge, or `NaN`) have no bin.
//!
//! # Examples
//!
//! ```
//! use roster_stats::binning::FixedBins;
//!
//! let bins = FixedBins::new(
//!     vec![0.0, 12.0, 19.0, 59.0, f64::INFINITY],
//!     vec!["Child", "Teen", "Adult", "Senior"],
//! )
//! .unwrap();
//!
//! assert_eq!(bins.classify(12.0), Some(&"Child"));
//! assert_eq!(bins.classify(19.0), Some(&"Teen"));
//! assert_eq!(bins.classify(80.0), Some(&"Senior"));
//! assert_eq!(bins.classify(0.0), None);
//! assert_eq!(bins.classify(f64::NAN), None);
//! ```

/// Error returned when bin edges and labels do not describe a valid partition.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum BinningError {
    #[display("at least one bin label is required")]
    NoLabels,
    #[display("expected {expected} bin edges for {labels} labels, got {actual}")]
    EdgeCountMismatch {
        labels: usize,
        expected: usize,
        actual: usize,
    },
    #[display("bin edge {index} is NaN")]
    NanEdge { index: usize },
    #[display("bin edges must be strictly increasing, but edge {index} ({value}) <= {previous}")]
    NotIncreasing {
        index: usize,
        previous: f64,
        value: f64,
    },
}

/// An ordered partition of the real line into labelled, upper-inclusive intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedBins<L> {
    edges: Vec<f64>,
    labels: Vec<L>,
}

impl<L> FixedBins<L> {
    /// Creates bins from `labels.len() + 1` strictly increasing edges.
    ///
    /// The last edge may be `f64::INFINITY` to leave the final bin unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`BinningError`] if there are no labels, the number of edges does
    /// not match the number of labels, an edge is `NaN`, or the edges are not
    /// strictly increasing.
    pub fn new(edges: Vec<f64>, labels: Vec<L>) -> Result<Self, BinningError> {
        if labels.is_empty() {
            return Err(BinningError::NoLabels);
        }
        if edges.len() != labels.len() + 1 {
            return Err(BinningError::EdgeCountMismatch {
                labels: labels.len(),
                expected: labels.len() + 1,
                actual: edges.len(),
            });
        }
        if let Some(index) = edges.iter().position(|e| e.is_nan()) {
            return Err(BinningError::NanEdge { index });
        }
        for (index, pair) in edges.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(BinningError::NotIncreasing {
                    index: index + 1,
                    previous: pair[0],
                    value: pair[1],
                });
            }
        }
        Ok(Self { edges, labels })
    }

    /// Returns the label of the bin containing `value`.
    ///
    /// Returns `None` if `value` is `NaN`, at or below the first edge, or above
    /// the last edge.
    #[must_use]
    pub fn classify(&self, value: f64) -> Option<&L> {
        self.position(value).map(|idx| &self.labels[idx])
    }

    /// Returns the index of the bin containing `value`.
    #[must_use]
    pub fn position(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        // first edge >= value; the bin is the one ending at that edge
        let upper = self.edges.partition_point(|&edge| edge < value);
        if upper == 0 || upper == self.edges.len() {
            return None;
        }
        Some(upper - 1)
    }

    /// Returns the `(lower, upper]` interval of the bin at `index`.
    #[must_use]
    pub fn interval(&self, index: usize) -> Option<(f64, f64)> {
        let lower = *self.edges.get(index)?;
        let upper = *self.edges.get(index + 1)?;
        Some((lower, upper))
    }

    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    #[must_use]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn age_bins() -> FixedBins<&'static str> {
        FixedBins::new(
            vec![0.0, 12.0, 19.0, 59.0, f64::INFINITY],
            vec!["Child", "Teen", "Adult", "Senior"],
        )
        .unwrap()
    }

    #[test]
    fn test_upper_edges_are_inclusive() {
        let bins = age_bins();
        assert_eq!(bins.classify(12.0), Some(&"Child"));
        assert_eq!(bins.classify(19.0), Some(&"Teen"));
        assert_eq!(bins.classify(59.0), Some(&"Adult"));
    }

    #[test]
    fn test_lower_edges_are_exclusive() {
        let bins = age_bins();
        assert_eq!(bins.classify(12.01), Some(&"Teen"));
        assert_eq!(bins.classify(19.5), Some(&"Adult"));
        assert_eq!(bins.classify(59.5), Some(&"Senior"));
        assert_eq!(bins.classify(0.42), Some(&"Child"));
    }

    #[test]
    fn test_out_of_domain_values() {
        let bins = age_bins();
        assert_eq!(bins.classify(0.0), None);
        assert_eq!(bins.classify(-3.0), None);
        assert_eq!(bins.classify(f64::NAN), None);
    }

    #[test]
    fn test_bounded_last_edge() {
        let bins = FixedBins::new(vec![0.0, 1.0, 2.0], vec!['a', 'b']).unwrap();
        assert_eq!(bins.classify(2.0), Some(&'b'));
        assert_eq!(bins.classify(2.5), None);
        assert_eq!(bins.classify(f64::INFINITY), None);
    }

    #[test]
    fn test_unbounded_last_edge_accepts_infinity() {
        let bins = age_bins();
        assert_eq!(bins.classify(f64::INFINITY), Some(&"Senior"));
    }

    #[test]
    fn test_interval() {
        let bins = age_bins();
        assert_eq!(bins.interval(1), Some((12.0, 19.0)));
        assert_eq!(bins.interval(3), Some((59.0, f64::INFINITY)));
        assert_eq!(bins.interval(4), None);
    }

    #[test]
    fn test_rejects_no_labels() {
        let result = FixedBins::<&str>::new(vec![0.0], vec![]);
        assert_eq!(result, Err(BinningError::NoLabels));
    }

    #[test]
    fn test_rejects_edge_count_mismatch() {
        let result = FixedBins::new(vec![0.0, 1.0], vec!["a", "b"]);
        assert_eq!(
            result,
            Err(BinningError::EdgeCountMismatch {
                labels: 2,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_rejects_nan_edge() {
        let result = FixedBins::new(vec![0.0, f64::NAN, 2.0], vec!["a", "b"]);
        assert_eq!(result, Err(BinningError::NanEdge { index: 1 }));
    }

    #[test]
    fn test_rejects_non_increasing_edges() {
        let result = FixedBins::new(vec![0.0, 19.0, 12.0], vec!["a", "b"]);
        assert!(matches!(
            result,
            Err(BinningError::NotIncreasing { index: 2, .. })
        ));

        let result = FixedBins::new(vec![0.0, 5.0, 5.0], vec!["a", "b"]);
        assert!(matches!(
            result,
            Err(BinningError::NotIncreasing { index: 2, .. })
        ));
    }
}
