//! Numeric support for the chartshift analysis engine.
//!
//! This crate provides the small set of statistical kernels the engine needs:
//!
//! - **Descriptive statistics**: Summarize a sample of `f64` values (min, max,
//!   mean, median, variance, standard deviation)
//! - **Equal-width binning**: Partition a value range into a fixed number of
//!   equal-width bins and map values to bin indices
//! - **Pearson chi-square**: Test independence of two categorical variables
//!   from an observed count matrix, including the upper-tail p-value of the
//!   chi-square distribution
//!
//! Everything here is deterministic, `f64`-only, and free of I/O. Empty or
//! degenerate inputs are reported through `Option`/`None` rather than NaN, so
//! callers never mistake "no answer" for a numeric result.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing samples
//! - [`binning`]: Equal-width bins over a closed value range
//! - [`chi_square`]: Pearson's chi-square test and distribution tail
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use chartshift_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Binning values into equal-width intervals
//!
//! ```
//! use chartshift_stats::binning::EqualWidthBins;
//!
//! let bins = EqualWidthBins::from_values([2.0, 3.5, 5.0], 3).unwrap();
//! assert_eq!(bins.index_of(2.0), Some(0));
//! assert_eq!(bins.index_of(5.0), Some(2));
//! ```
//!
//! ## Testing independence with Pearson's chi-square
//!
//! ```
//! use chartshift_stats::chi_square::PearsonChiSquare;
//!
//! let observed = vec![vec![2, 1], vec![1, 2], vec![3, 0]];
//! let test = PearsonChiSquare::from_counts(&observed).unwrap();
//! assert_eq!(test.degrees_of_freedom, 2);
//! assert!((test.statistic - 3.0).abs() < 1e-12);
//! ```

pub mod binning;
pub mod chi_square;
pub mod descriptive;
