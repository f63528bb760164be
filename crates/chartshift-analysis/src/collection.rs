//! Derived record collections
//!
//! [`DerivedCollection`] owns the enriched dataset: records sorted
//! ascending by chart date plus a [`ValidationSummary`] counting every
//! flag the deriver raised. Downstream components (aggregation,
//! contingency, magnitude) are pure projections of a collection and are
//! recomputed, never patched, when inputs change.

use serde::{Deserialize, Serialize};

use crate::{
    era::EraBoundaries,
    indicator::{DerivedRecord, RecordFlags},
    record::ChartRecord,
};

/// Counts of validation flags raised across a dataset.
///
/// Flagged records are excluded only from the derivations their flags
/// name; they still count toward group sizes everywhere else, so these
/// counts are reporting, not an exclusion list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Records whose structure code was present but undefined.
    pub invalid_structure_codes: usize,
    /// Records whose artist gender code was present but undefined.
    pub invalid_artist_gender_codes: usize,
    /// Records whose songwriter gender code was present but undefined.
    pub invalid_songwriter_gender_codes: usize,
    /// Records whose producer gender code was present but undefined.
    pub invalid_producer_gender_codes: usize,
    /// Records with both artist race flags set.
    pub conflicting_race_flags: usize,
    /// Records claiming sole songwriting without a songwriting credit.
    pub inconsistent_songwriter_flags: usize,
    /// Records claiming sole production without a production credit.
    pub inconsistent_producer_flags: usize,
    /// Records with at least one flag raised.
    pub flagged_records: usize,
}

impl ValidationSummary {
    fn observe(&mut self, flags: &RecordFlags) {
        self.invalid_structure_codes += usize::from(flags.invalid_structure_code);
        self.invalid_artist_gender_codes += usize::from(flags.invalid_artist_gender_code);
        self.invalid_songwriter_gender_codes += usize::from(flags.invalid_songwriter_gender_code);
        self.invalid_producer_gender_codes += usize::from(flags.invalid_producer_gender_code);
        self.conflicting_race_flags += usize::from(flags.conflicting_race_flags);
        self.inconsistent_songwriter_flags += usize::from(flags.inconsistent_songwriter_flags);
        self.inconsistent_producer_flags += usize::from(flags.inconsistent_producer_flags);
        self.flagged_records += usize::from(flags.any());
    }

    /// Whether no record raised any flag.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.flagged_records == 0
    }
}

/// A dataset of derived records, sorted ascending by chart date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedCollection {
    records: Vec<DerivedRecord>,
    validation: ValidationSummary,
}

impl DerivedCollection {
    /// Derives every record and assembles the sorted collection.
    ///
    /// Input order does not matter; records are sorted ascending by date
    /// before any time-series derivation depends on chronology.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chartshift_analysis::{collection::DerivedCollection, era::EraBoundaries, record::ChartRecord};
    ///
    /// let records: Vec<ChartRecord> = vec![]; // Load from file
    /// let collection = DerivedCollection::derive(records, &EraBoundaries::default());
    /// println!("{} records, {} flagged", collection.len(), collection.validation().flagged_records);
    /// ```
    #[must_use]
    pub fn derive(records: Vec<ChartRecord>, boundaries: &EraBoundaries) -> Self {
        let mut records = records
            .into_iter()
            .map(|record| DerivedRecord::derive(record, boundaries))
            .collect::<Vec<_>>();
        records.sort_by_key(|derived| derived.record.date);

        let mut validation = ValidationSummary::default();
        for derived in &records {
            validation.observe(&derived.flags);
        }

        Self {
            records,
            validation,
        }
    }

    /// The derived records in ascending date order.
    #[must_use]
    pub fn records(&self) -> &[DerivedRecord] {
        &self.records
    }

    /// Validation flag counts for the dataset.
    #[must_use]
    pub fn validation(&self) -> &ValidationSummary {
        &self.validation
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
