//! Contingency tables and independence testing
//!
//! A [`ContingencyTable`] cross-tabulates record counts over two
//! categorical dimensions. Categories come from observed data only: a
//! category no record projects to gets no row or column. Records with an
//! unknown value on either dimension are excluded from the table (they
//! remain in every other computation).
//!
//! [`chi_square`] runs Pearson's test on the table. A degenerate table —
//! fewer than two observed categories on a dimension, or a zero expected
//! cell — is an explicit [`DegenerateTableError`], never a NaN p-value
//! that could be mistaken for a null-hypothesis result.

use std::collections::BTreeSet;

use chartshift_stats::binning::EqualWidthBins;
pub use chartshift_stats::chi_square::PearsonChiSquare;

use serde::{Deserialize, Serialize};

use crate::{
    collection::DerivedCollection,
    era::Era,
    indicator::{ArtistStructure, DerivedRecord, GenderComposition, Role},
    metric::Metric,
};

/// Labels for the three equal-width song-length bins, shortest first.
pub const LENGTH_TERCILE_LABELS: [&str; 3] = ["Short", "Medium", "Long"];

/// A categorical projection of records usable as a contingency dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    /// The record's consumption era.
    Era,
    /// Song length bucketed into three equal-width bins spanning the full
    /// dataset's `[min, max]` length, labeled Short/Medium/Long.
    LengthTercile,
    /// Artist lineup structure.
    Structure,
    /// Gender composition of a credited role.
    Gender(Role),
    /// Primary genre.
    Genre,
    /// Yes/no projection of a share metric.
    Share(Metric),
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Era => f.write_str("Era"),
            Dimension::LengthTercile => f.write_str("Song Length"),
            Dimension::Structure => f.write_str("Artist Structure"),
            Dimension::Gender(role) => write!(f, "{role} Gender"),
            Dimension::Genre => f.write_str("Genre"),
            Dimension::Share(metric) => write!(f, "{metric}"),
        }
    }
}

impl Dimension {
    fn project(self, record: &DerivedRecord, bins: Option<&EqualWidthBins>) -> Option<String> {
        match self {
            Dimension::Era => Some(record.era.label().to_string()),
            Dimension::LengthTercile => {
                let index = bins?.index_of(record.length_minutes?)?;
                Some(LENGTH_TERCILE_LABELS[index].to_string())
            }
            Dimension::Structure => record.structure.map(|s| s.label().to_string()),
            Dimension::Gender(role) => record.gender(role).map(|g| g.label().to_string()),
            Dimension::Genre => record.record.genre.clone(),
            Dimension::Share(metric) => {
                let sample = metric.sample(record)?;
                Some(if sample > 0.0 { "Yes" } else { "No" }.to_string())
            }
        }
    }

    /// Canonical label order for dimensions with a fixed category set;
    /// `None` for open-ended dimensions, which sort alphabetically.
    fn canonical_order(self) -> Option<Vec<&'static str>> {
        match self {
            Dimension::Era => Some(Era::ALL.iter().map(|era| era.label()).collect()),
            Dimension::LengthTercile => Some(LENGTH_TERCILE_LABELS.to_vec()),
            Dimension::Structure => Some(
                [
                    ArtistStructure::Solo,
                    ArtistStructure::Duo,
                    ArtistStructure::Group,
                ]
                .iter()
                .map(|s| s.label())
                .collect(),
            ),
            Dimension::Gender(_) => Some(
                [
                    GenderComposition::AllFemale,
                    GenderComposition::AllMale,
                    GenderComposition::Mixed,
                ]
                .iter()
                .map(|g| g.label())
                .collect(),
            ),
            Dimension::Share(_) => Some(vec!["No", "Yes"]),
            Dimension::Genre => None,
        }
    }
}

fn ordered_labels(dimension: Dimension, observed: &BTreeSet<String>) -> Vec<String> {
    match dimension.canonical_order() {
        Some(order) => order
            .into_iter()
            .filter(|label| observed.contains(*label))
            .map(str::to_string)
            .collect(),
        None => observed.iter().cloned().collect(),
    }
}

/// A two-dimensional count matrix over observed categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContingencyTable {
    /// The dimension projected onto rows.
    pub row_dimension: Dimension,
    /// The dimension projected onto columns.
    pub col_dimension: Dimension,
    /// Row category labels, in canonical or alphabetical order.
    pub row_labels: Vec<String>,
    /// Column category labels, in canonical or alphabetical order.
    pub col_labels: Vec<String>,
    /// Observed counts, `counts[row][col]`.
    pub counts: Vec<Vec<u64>>,
}

impl ContingencyTable {
    /// Cross-tabulates the collection over two dimensions.
    ///
    /// Length terciles are computed over the full dataset's length range,
    /// not per group, so the buckets are comparable across rows.
    #[must_use]
    pub fn build(
        collection: &DerivedCollection,
        row_dimension: Dimension,
        col_dimension: Dimension,
    ) -> Self {
        let needs_bins = row_dimension == Dimension::LengthTercile
            || col_dimension == Dimension::LengthTercile;
        let bins = if needs_bins {
            EqualWidthBins::from_values(
                collection
                    .records()
                    .iter()
                    .filter_map(|record| record.length_minutes),
                LENGTH_TERCILE_LABELS.len(),
            )
        } else {
            None
        };

        let pairs = collection
            .records()
            .iter()
            .filter_map(|record| {
                let row = row_dimension.project(record, bins.as_ref())?;
                let col = col_dimension.project(record, bins.as_ref())?;
                Some((row, col))
            })
            .collect::<Vec<_>>();

        let observed_rows = pairs.iter().map(|(row, _)| row.clone()).collect();
        let observed_cols = pairs.iter().map(|(_, col)| col.clone()).collect();
        let row_labels = ordered_labels(row_dimension, &observed_rows);
        let col_labels = ordered_labels(col_dimension, &observed_cols);

        let mut counts = vec![vec![0u64; col_labels.len()]; row_labels.len()];
        for (row, col) in &pairs {
            let i = row_labels.iter().position(|label| label == row).unwrap();
            let j = col_labels.iter().position(|label| label == col).unwrap();
            counts[i][j] += 1;
        }

        Self {
            row_dimension,
            col_dimension,
            row_labels,
            col_labels,
            counts,
        }
    }

    /// Per-row count totals.
    #[must_use]
    pub fn row_totals(&self) -> Vec<u64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    /// Per-column count totals.
    #[must_use]
    pub fn col_totals(&self) -> Vec<u64> {
        (0..self.col_labels.len())
            .map(|j| self.counts.iter().map(|row| row[j]).sum())
            .collect()
    }

    /// Total count across all cells.
    #[must_use]
    pub fn grand_total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Row-normalized percentages. A cell is `None` when its row has no
    /// counts at all (possible after trimming columns).
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn row_shares(&self) -> Vec<Vec<Option<f64>>> {
        self.counts
            .iter()
            .map(|row| {
                let total = row.iter().sum::<u64>();
                row.iter()
                    .map(|&count| {
                        (total > 0).then(|| count as f64 / total as f64 * 100.0)
                    })
                    .collect()
            })
            .collect()
    }

    /// Keeps only the `n` columns with the largest totals, reordered by
    /// descending total (ties keep their original relative order).
    pub fn retain_top_columns(&mut self, n: usize) {
        let totals = self.col_totals();
        let mut order = (0..self.col_labels.len()).collect::<Vec<_>>();
        order.sort_by_key(|&j| std::cmp::Reverse(totals[j]));
        order.truncate(n);

        self.col_labels = order
            .iter()
            .map(|&j| self.col_labels[j].clone())
            .collect();
        self.counts = self
            .counts
            .iter()
            .map(|row| order.iter().map(|&j| row[j]).collect())
            .collect();
    }
}

/// Pearson's chi-square test was undefined for the table.
///
/// Raised when a dimension has fewer than two observed categories or a
/// row/column total is zero (which would zero an expected frequency).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("chi-square test undefined: table has a zero expected cell or fewer than two categories per dimension")]
pub struct DegenerateTableError;

/// Runs Pearson's chi-square test of independence on a contingency table.
///
/// # Examples
///
/// ```no_run
/// use chartshift_analysis::{
///     collection::DerivedCollection,
///     contingency::{self, ContingencyTable, Dimension},
///     era::EraBoundaries,
///     metric::Metric,
/// };
///
/// let collection = DerivedCollection::derive(vec![], &EraBoundaries::default());
/// let table = ContingencyTable::build(
///     &collection,
///     Dimension::Era,
///     Dimension::Share(Metric::SoloArtist),
/// );
/// match contingency::chi_square(&table) {
///     Ok(test) => println!("chi2 = {:.3}, p = {:.4}", test.statistic, test.p_value),
///     Err(err) => println!("{err}"),
/// }
/// ```
pub fn chi_square(table: &ContingencyTable) -> Result<PearsonChiSquare, DegenerateTableError> {
    PearsonChiSquare::from_counts(&table.counts).ok_or(DegenerateTableError)
}
