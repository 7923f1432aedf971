/// Computes a quantile from sorted data using linear interpolation.
///
/// For a dataset with `n` values, the quantile `q` lies at fractional position
/// `(n - 1) * q`; the result interpolates linearly between the two values on
/// either side of that position.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `q` - The quantile to compute (0.0 to 1.0); values outside are clamped
///
/// # Returns
///
/// The value at the specified quantile. Returns `f64::NAN` if the input is empty.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
///
/// # Examples
///
/// ```
/// use roster_stats::percentiles::quantile_sorted;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(quantile_sorted(&values, 0.5), 3.0);
/// assert_eq!(quantile_sorted(&values, 0.25), 2.0);
/// assert_eq!(quantile_sorted(&values, 0.75), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn quantile_sorted(sorted_values: &[f64], q: f64) -> f64 {
    assert!(
        sorted_values.is_sorted_by(|a, b| a <= b),
        "values must be sorted in ascending order"
    );

    let Some(&last) = sorted_values.last() else {
        return f64::NAN;
    };
    let q = q.clamp(0.0, 1.0);
    let position = (sorted_values.len() - 1) as f64 * q;
    let lower = position.floor() as usize;
    let fraction = position - position.floor();

    let lower_value = sorted_values[lower];
    if fraction == 0.0 {
        return lower_value;
    }
    let upper_value = sorted_values.get(lower + 1).copied().unwrap_or(last);
    lower_value + (upper_value - lower_value) * fraction
}

/// Computes a quantile from unsorted values.
///
/// This function will sort the values internally before computing the quantile.
///
/// # Examples
///
/// ```
/// use roster_stats::percentiles::quantile;
///
/// assert_eq!(quantile([4.0, 1.0, 3.0, 2.0], 0.5), 2.5);
/// ```
#[must_use]
pub fn quantile<I>(values: I, q: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sorted = values.into_iter().collect::<Vec<_>>();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, q)
}

/// Computes the median of unsorted values.
///
/// For an even number of values this is the mean of the two middle values.
/// Returns `f64::NAN` if `values` is empty.
///
/// # Examples
///
/// ```
/// use roster_stats::percentiles::median;
///
/// assert_eq!(median([20.0, 40.0, 60.0]), 40.0);
/// assert_eq!(median([22.0, 38.0]), 30.0);
/// assert!(median([]).is_nan());
/// ```
#[must_use]
pub fn median<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    quantile(values, 0.5)
}
