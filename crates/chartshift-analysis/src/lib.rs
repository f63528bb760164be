//! Era-bucketed statistical analysis of number-one chart records
//!
//! This crate is the aggregation and comparison engine behind the
//! chartshift reports. It takes already-parsed chart records, enriches
//! them with derived indicators, and reduces them into era/year/decade
//! summaries, independence tests, and era-to-era change magnitudes. It
//! performs no I/O and holds no state between calls: every operation is a
//! pure function of its inputs.
//!
//! # Overview
//!
//! The engine supports three workflows, all starting from the same
//! enrichment pass:
//!
//! ## Aggregation Workflow
//!
//! 1. **Derive** ([`collection::DerivedCollection`]): classify each record
//!    into its consumption era and decode its raw coded fields
//! 2. **Aggregate** ([`aggregate::aggregate`]): group by era, year, or
//!    decade and reduce each requested [`metric::Metric`]
//!
//! ## Independence Workflow
//!
//! 1. **Cross-tabulate** ([`contingency::ContingencyTable`]): count records
//!    over two categorical dimensions
//! 2. **Test** ([`contingency::chi_square`]): Pearson's chi-square with an
//!    explicit error for degenerate tables
//!
//! ## Change-Magnitude Workflow
//!
//! 1. **Aggregate by era** ([`aggregate::aggregate`])
//! 2. **Diff** ([`magnitude::magnitude`]): the three era-to-era deltas per
//!    metric
//!
//! # Missing data
//!
//! Unknown values never silently bias a result. A record with a missing
//! or invalid coded field stays in its group (so group sizes are honest)
//! but contributes to no numerator or denominator of that dimension's
//! shares, and an unmeasured group reports `None` rather than a zero.
//! Validation anomalies are counted in
//! [`collection::ValidationSummary`], never fatal.
//!
//! # Examples
//!
//! ## Era summary
//!
//! ```no_run
//! use chartshift_analysis::{
//!     aggregate::{self, GroupBy},
//!     collection::DerivedCollection,
//!     era::EraBoundaries,
//!     metric::Metric,
//!     record::ChartRecord,
//! };
//!
//! let records: Vec<ChartRecord> = vec![]; // Load from file
//! let collection = DerivedCollection::derive(records, &EraBoundaries::default());
//! let table = aggregate::aggregate(
//!     &collection,
//!     GroupBy::Era,
//!     &[Metric::LengthMinutes, Metric::SoloArtist],
//! );
//! for row in &table.rows {
//!     println!(
//!         "{}: n={} solo={:?}",
//!         row.key,
//!         row.record_count,
//!         row.value(Metric::SoloArtist),
//!     );
//! }
//! ```
//!
//! ## Independence test
//!
//! ```no_run
//! use chartshift_analysis::{
//!     collection::DerivedCollection,
//!     contingency::{self, ContingencyTable, Dimension},
//!     era::EraBoundaries,
//!     record::ChartRecord,
//! };
//!
//! let records: Vec<ChartRecord> = vec![]; // Load from file
//! let collection = DerivedCollection::derive(records, &EraBoundaries::default());
//! let table = ContingencyTable::build(&collection, Dimension::Era, Dimension::LengthTercile);
//! match contingency::chi_square(&table) {
//!     Ok(test) => println!("p = {:.4}", test.p_value),
//!     Err(err) => println!("not testable: {err}"),
//! }
//! ```

pub mod aggregate;
pub mod collection;
pub mod contingency;
pub mod era;
pub mod indicator;
pub mod magnitude;
pub mod metric;
pub mod record;
