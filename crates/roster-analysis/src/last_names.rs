//! Last-name frequencies
//!
//! Names are expected in `"Last, Title. First"` form. The last name is the
//! text before the first delimiter, taken verbatim; a name without the
//! delimiter is its own last name.

use roster_stats::frequency::ValueCounts;

use crate::Dataset;

/// The delimiter separating the last name from the rest of a full name.
pub const DEFAULT_DELIMITER: char = ',';

/// Extracts the last name from `name`.
///
/// No whitespace is trimmed, so `" Smith, John"` yields `" Smith"`.
///
/// # Examples
///
/// ```
/// use roster_analysis::last_names::last_name;
///
/// assert_eq!(last_name("Smith, Mr. John", ','), "Smith");
/// assert_eq!(last_name("Cher", ','), "Cher");
/// assert_eq!(last_name(", Anonymous", ','), "");
/// ```
#[must_use]
pub fn last_name(name: &str, delimiter: char) -> &str {
    name.split_once(delimiter).map_or(name, |(last, _)| last)
}

/// Counts how many passengers share each last name.
///
/// Rows without a name are skipped. The result is ordered by descending count,
/// with ties in the order the names first appear.
///
/// # Examples
///
/// ```
/// use roster_analysis::{Dataset, Passenger, last_names::count_last_names};
///
/// let dataset = Dataset::new(vec![
///     Passenger::new(1, "male").with_name("Smith, Mr. John"),
///     Passenger::new(1, "female").with_name("Brown, Mrs. Ann"),
///     Passenger::new(1, "female").with_name("Smith, Mrs. Jane"),
///     Passenger::new(3, "male"),
/// ])?;
/// let counts = count_last_names(&dataset, ',');
/// assert_eq!(counts.get("Smith"), Some(2));
/// assert_eq!(counts.get("Brown"), Some(1));
/// assert_eq!(counts.total(), 3);
/// # Ok::<(), roster_analysis::AnalysisError>(())
/// ```
#[must_use]
pub fn count_last_names(dataset: &Dataset, delimiter: char) -> ValueCounts<String> {
    let counts = ValueCounts::from_values(
        dataset
            .iter()
            .filter_map(|row| row.name.as_deref())
            .map(|name| last_name(name, delimiter).to_owned()),
    );
    log::debug!("counted {} distinct last names", counts.len());
    counts
}
