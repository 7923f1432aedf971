//! Statistical primitives for the roster analysis tools.
//!
//! This crate provides the small building blocks the aggregation engine is
//! composed of:
//!
//! - **Binning**: Map a continuous value onto an ordered set of labels using fixed boundaries
//! - **Descriptive statistics**: Count, sum, mean, min and max of a set of values
//! - **Percentiles**: Interpolated quantiles and the median
//! - **Frequency counting**: Occurrence counts ordered by descending frequency
//!
//! None of the functions here know about passengers or datasets; they operate on
//! plain values and return `NaN` where a statistic is undefined (e.g. the mean of
//! nothing, or a ratio with a zero denominator).
//!
//! # Modules
//!
//! - [`binning`]: Fixed-boundary binning with closed upper bounds
//! - [`descriptive`]: Descriptive statistics and ratios
//! - [`percentiles`]: Quantile and median computation
//! - [`frequency`]: Ordered value counts
//!
//! # Examples
//!
//! ## Classifying values into bins
//!
//! ```
//! use roster_stats::binning::FixedBins;
//!
//! let bins = FixedBins::new(vec![0.0, 10.0, f64::INFINITY], vec!["low", "high"]).unwrap();
//! assert_eq!(bins.classify(10.0), Some(&"low"));
//! assert_eq!(bins.classify(10.5), Some(&"high"));
//! assert_eq!(bins.classify(0.0), None);
//! ```
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use roster_stats::descriptive::DescriptiveStats;
//!
//! let stats = DescriptiveStats::new([7.25, 71.28, 8.05]).unwrap();
//! assert_eq!(stats.count, 3);
//! assert_eq!(stats.min, 7.25);
//! assert_eq!(stats.max, 71.28);
//! ```
//!
//! ## Computing the median
//!
//! ```
//! use roster_stats::percentiles::median;
//!
//! assert_eq!(median([60.0, 20.0, 40.0]), 40.0);
//! assert_eq!(median([1.0, 2.0, 3.0, 4.0]), 2.5);
//! assert!(median([]).is_nan());
//! ```
//!
//! ## Counting values
//!
//! ```
//! use roster_stats::frequency::ValueCounts;
//!
//! let counts = ValueCounts::from_values(["b", "a", "b"]);
//! assert_eq!(counts.as_slice(), &[("b", 2), ("a", 1)]);
//! ```

pub mod binning;
pub mod descriptive;
pub mod frequency;
pub mod percentiles;
