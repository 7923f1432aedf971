//! Ordered value counts
//!
//! [`ValueCounts`] counts how often each distinct value occurs and keeps the
//! result ordered by descending count. Values with equal counts keep the order
//! in which they were first observed, so the result is fully determined by the
//! input sequence.

use std::{collections::HashMap, hash::Hash};

/// Occurrence counts of distinct values, ordered by descending count.
///
/// Ties are broken by first-observed order.
///
/// # Examples
///
/// ```
/// use roster_stats::frequency::ValueCounts;
///
/// let counts = ValueCounts::from_values(["Smith", "Brown", "Smith", "Allen", "Brown"]);
/// assert_eq!(
///     counts.as_slice(),
///     &[("Smith", 2), ("Brown", 2), ("Allen", 1)],
/// );
/// assert_eq!(counts.get(&"Brown"), Some(2));
/// assert_eq!(counts.total(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCounts<K> {
    counts: Vec<(K, usize)>,
}

impl<K> ValueCounts<K>
where
    K: Eq + Hash + Clone,
{
    /// Counts the occurrences of each value yielded by `values`.
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut counts: Vec<(K, usize)> = Vec::new();

        for value in values {
            if let Some(&idx) = index.get(&value) {
                counts[idx].1 += 1;
            } else {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }

        // stable: equal counts stay in first-observed order
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        Self { counts }
    }
}

impl<K> ValueCounts<K> {
    /// Returns the count of `value`, or `None` if it never occurred.
    #[must_use]
    pub fn get<Q>(&self, value: &Q) -> Option<usize>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.counts
            .iter()
            .find_map(|(k, count)| (k == value).then_some(*count))
    }

    /// Returns the `n` most frequent values.
    #[must_use]
    pub fn most_common(&self, n: usize) -> &[(K, usize)] {
        &self.counts[..n.min(self.counts.len())]
    }

    /// Returns the sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Returns the number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> + '_ {
        self.counts.iter().map(|(k, count)| (k, *count))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(K, usize)] {
        &self.counts
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<(K, usize)> {
        self.counts
    }
}

impl<K> Default for ValueCounts<K> {
    fn default() -> Self {
        Self { counts: Vec::new() }
    }
}

impl<K> IntoIterator for ValueCounts<K> {
    type Item = (K, usize);
    type IntoIter = std::vec::IntoIter<(K, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        let counts = ValueCounts::<String>::from_values(Vec::new());
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_orders_by_descending_count() {
        let counts = ValueCounts::from_values(["a", "b", "b", "c", "c", "c"]);
        assert_eq!(counts.as_slice(), &[("c", 3), ("b", 2), ("a", 1)]);
    }

    #[test]
    fn test_ties_keep_first_observed_order() {
        let counts = ValueCounts::from_values(["z", "y", "x", "y", "z", "x"]);
        assert_eq!(counts.as_slice(), &[("z", 2), ("y", 2), ("x", 2)]);
    }

    #[test]
    fn test_total_matches_input_length() {
        let values = ["a", "b", "a", "d", "e", "a"];
        let counts = ValueCounts::from_values(values);
        assert_eq!(counts.total(), values.len());
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn test_most_common() {
        let counts = ValueCounts::from_values(["a", "b", "b"]);
        assert_eq!(counts.most_common(1), &[("b", 2)]);
        assert_eq!(counts.most_common(10).len(), 2);
    }

    #[test]
    fn test_get_with_borrowed_key() {
        let counts = ValueCounts::from_values(["Smith".to_owned(), "Smith".to_owned()]);
        assert_eq!(counts.get("Smith"), Some(2));
        assert_eq!(counts.get("Jones"), None);
    }
}
