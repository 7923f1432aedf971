/// Descriptive statistics summarizing a set of values.
///
/// This structure contains the aggregates a group-by over a numeric attribute
/// reports: how many values there were, their total, and their mean and range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values.
    pub count: usize,
    /// The sum of all values.
    pub sum: f64,
    /// The arithmetic mean (average) of the values.
    pub mean: f64,
    /// The minimum value.
    pub min: f64,
    /// The maximum value.
    pub max: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics in a single pass over `values`.
    ///
    /// Callers are expected to filter out missing values before calling this;
    /// a `NaN` in the input propagates into `sum` and `mean`.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if `values` yields at least one value
    /// * `None` - if `values` is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use roster_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.count, 5);
    /// assert_eq!(stats.sum, 15.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    ///
    /// assert!(DescriptiveStats::new([]).is_none());
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter();
        let first = values.next()?;

        let mut count = 1;
        let mut sum = first;
        let mut min = first;
        let mut max = first;
        for value in values {
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }

        Some(Self {
            count,
            sum,
            mean: ratio(sum, count),
            min,
            max,
        })
    }
}

/// Divides `numerator` by a count, returning `NaN` when the count is zero.
///
/// An empty group has no meaningful rate; `NaN` lets callers detect and filter
/// it instead of mistaking it for a rate of zero.
///
/// # Examples
///
/// ```
/// # use roster_stats::descriptive::ratio;
/// assert_eq!(ratio(1.0, 4), 0.25);
/// assert!(ratio(0.0, 0).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        return f64::NAN;
    }
    numerator / denominator as f64
}
