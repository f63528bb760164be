//! Grouped aggregation
//!
//! The aggregation engine reduces a [`DerivedCollection`] into an
//! [`AggregateTable`]: one row per group (era, year, or decade), one value
//! per requested metric. A value is the mean of the metric's available
//! samples — scaled to a percentage for share metrics — and `None` when the
//! group has no sample for that metric. `None` ("no data") is deliberately
//! distinct from `Some(0.0)` ("measured, zero incidence"); callers must not
//! conflate the two.
//!
//! Era-grouped tables always contain all three eras in their fixed order,
//! including empty ones. Year and decade tables contain observed keys in
//! ascending order.

use std::collections::BTreeMap;

use chartshift_stats::descriptive::DescriptiveStats;
use serde::{Deserialize, Serialize};

use crate::{
    collection::DerivedCollection,
    era::Era,
    indicator::DerivedRecord,
    metric::{Metric, MetricKind},
};

/// Grouping dimension for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupBy {
    /// The three fixed consumption eras.
    Era,
    /// Calendar year of the chart date.
    Year,
    /// Decade of the chart date.
    Decade,
}

/// Key identifying one aggregate row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum GroupKey {
    Era(Era),
    Year(i32),
    Decade(i32),
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKey::Era(era) => write!(f, "{era}"),
            GroupKey::Year(year) => write!(f, "{year}"),
            GroupKey::Decade(decade) => write!(f, "{decade}s"),
        }
    }
}

/// One row of an aggregate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    /// The group this row summarizes.
    pub key: GroupKey,
    /// Number of records in the group, independent of any metric's
    /// missing-value exclusions.
    pub record_count: usize,
    /// Metric values. `None` marks "no data", never a zero.
    pub values: BTreeMap<Metric, Option<f64>>,
}

impl AggregateRow {
    /// The value of one metric in this row, `None` when unmeasured.
    #[must_use]
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied().flatten()
    }
}

/// Output of the aggregation engine: ordered rows of grouped metric values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateTable {
    /// The grouping dimension the table was built with.
    pub group_by: GroupBy,
    /// Rows in presentation order: the fixed era sequence for era tables,
    /// ascending keys otherwise.
    pub rows: Vec<AggregateRow>,
}

impl AggregateTable {
    /// Finds the row for a group key.
    #[must_use]
    pub fn row(&self, key: GroupKey) -> Option<&AggregateRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    /// The value of one metric in one group, `None` when the group is
    /// absent or unmeasured.
    #[must_use]
    pub fn value(&self, key: GroupKey, metric: Metric) -> Option<f64> {
        self.row(key).and_then(|row| row.value(metric))
    }
}

fn reduce(records: &[&DerivedRecord], metric: Metric) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for record in records {
        if let Some(sample) = metric.sample(record) {
            sum += sample;
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    #[expect(clippy::cast_precision_loss)]
    let mean = sum / count as f64;
    match metric.kind() {
        MetricKind::RawMean => Some(mean),
        MetricKind::Share => Some(mean * 100.0),
    }
}

fn build_row(key: GroupKey, records: &[&DerivedRecord], metrics: &[Metric]) -> AggregateRow {
    let values = metrics
        .iter()
        .map(|&metric| (metric, reduce(records, metric)))
        .collect();
    AggregateRow {
        key,
        record_count: records.len(),
        values,
    }
}

/// Groups the collection and reduces each requested metric per group.
///
/// # Examples
///
/// ```no_run
/// use chartshift_analysis::{
///     aggregate::{self, GroupBy},
///     collection::DerivedCollection,
///     era::EraBoundaries,
///     metric::Metric,
/// };
///
/// let collection = DerivedCollection::derive(vec![], &EraBoundaries::default());
/// let table = aggregate::aggregate(&collection, GroupBy::Era, &[Metric::SoloArtist]);
/// for row in &table.rows {
///     println!("{}: {:?}", row.key, row.value(Metric::SoloArtist));
/// }
/// ```
#[must_use]
pub fn aggregate(
    collection: &DerivedCollection,
    group_by: GroupBy,
    metrics: &[Metric],
) -> AggregateTable {
    let mut groups: BTreeMap<GroupKey, Vec<&DerivedRecord>> = BTreeMap::new();
    for record in collection.records() {
        let key = match group_by {
            GroupBy::Era => GroupKey::Era(record.era),
            GroupBy::Year => GroupKey::Year(record.year()),
            GroupBy::Decade => GroupKey::Decade(record.decade()),
        };
        groups.entry(key).or_default().push(record);
    }

    let rows = match group_by {
        // Era tables are reindexed to the fixed sequence, empty eras included.
        GroupBy::Era => Era::ALL
            .iter()
            .map(|&era| {
                let key = GroupKey::Era(era);
                let records = groups.get(&key).map_or(&[][..], Vec::as_slice);
                build_row(key, records, metrics)
            })
            .collect(),
        GroupBy::Year | GroupBy::Decade => groups
            .iter()
            .map(|(&key, records)| build_row(key, records, metrics))
            .collect(),
    };

    AggregateTable { group_by, rows }
}

/// Per-era distribution summary of song length in minutes.
///
/// `None` for an era with no known lengths.
#[must_use]
pub fn length_summary(collection: &DerivedCollection) -> Vec<(Era, Option<DescriptiveStats>)> {
    Era::ALL
        .iter()
        .map(|&era| {
            let lengths = collection
                .records()
                .iter()
                .filter(|record| record.era == era)
                .filter_map(|record| record.length_minutes);
            (era, DescriptiveStats::new(lengths))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{era::EraBoundaries, record::ChartRecord};

    use super::*;

    fn record(year: i32, mutate: impl FnOnce(&mut ChartRecord)) -> ChartRecord {
        let mut record = ChartRecord {
            date: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
            weeks_at_number_one: 1,
            length_seconds: Some(180.0),
            artist_structure_code: Some(1),
            artist_gender_code: Some(1),
            songwriter_gender_code: None,
            producer_gender_code: None,
            artist_all_white: false,
            artist_all_black: false,
            songwriter_all_white: false,
            producer_all_white: false,
            is_artist_songwriter: false,
            is_artist_only_songwriter: false,
            is_artist_producer: false,
            is_artist_only_producer: false,
            front_person_age: None,
            genre: None,
            label: None,
            parent_label: None,
        };
        mutate(&mut record);
        record
    }

    fn six_record_collection() -> DerivedCollection {
        // Two records per era; one Streaming record has no gender code.
        let records = vec![
            record(1990, |r| r.artist_gender_code = Some(1)),
            record(1995, |r| r.artist_gender_code = Some(0)),
            record(2010, |r| r.artist_gender_code = Some(1)),
            record(2015, |r| r.artist_gender_code = None),
            record(2021, |r| r.artist_gender_code = Some(2)),
            record(2023, |r| r.artist_gender_code = Some(1)),
        ];
        DerivedCollection::derive(records, &EraBoundaries::default())
    }

    #[test]
    fn test_missing_gender_excluded_from_denominator() {
        let collection = six_record_collection();
        let table = aggregate(&collection, GroupBy::Era, &[Metric::AllMaleArtist]);

        // Streaming has 2 records but only 1 with a known gender code:
        // the share is 100%, not 50%
        let streaming = table
            .value(GroupKey::Era(Era::Streaming), Metric::AllMaleArtist)
            .unwrap();
        assert!((streaming - 100.0).abs() < 1e-12);
        // The excluded record still counts toward the group size
        assert_eq!(
            table.row(GroupKey::Era(Era::Streaming)).unwrap().record_count,
            2
        );
    }

    #[test]
    fn test_era_rows_follow_fixed_order_with_empty_groups() {
        // No Streaming records at all
        let records = vec![record(1990, |_| {}), record(2021, |_| {})];
        let collection = DerivedCollection::derive(records, &EraBoundaries::default());
        let table = aggregate(&collection, GroupBy::Era, &[Metric::SoloArtist]);

        let keys = table.rows.iter().map(|row| row.key).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                GroupKey::Era(Era::PreDigital),
                GroupKey::Era(Era::Streaming),
                GroupKey::Era(Era::PostShortForm),
            ]
        );
        let streaming = table.row(GroupKey::Era(Era::Streaming)).unwrap();
        assert_eq!(streaming.record_count, 0);
        // Empty group is "no data", not zero
        assert_eq!(streaming.value(Metric::SoloArtist), None);
    }

    #[test]
    fn test_no_data_is_distinct_from_zero_share() {
        // One record, known gender, not all-female: measured zero
        let records = vec![record(2010, |r| r.artist_gender_code = Some(1))];
        let collection = DerivedCollection::derive(records, &EraBoundaries::default());
        let table = aggregate(&collection, GroupBy::Era, &[Metric::AllFemaleArtist]);
        assert_eq!(
            table.value(GroupKey::Era(Era::Streaming), Metric::AllFemaleArtist),
            Some(0.0)
        );

        // One record, unknown gender: unmeasured
        let records = vec![record(2010, |r| r.artist_gender_code = None)];
        let collection = DerivedCollection::derive(records, &EraBoundaries::default());
        let table = aggregate(&collection, GroupBy::Era, &[Metric::AllFemaleArtist]);
        assert_eq!(
            table.value(GroupKey::Era(Era::Streaming), Metric::AllFemaleArtist),
            None
        );
    }

    #[test]
    fn test_missing_length_excluded_from_mean() {
        let records = vec![
            record(2010, |r| r.length_seconds = Some(120.0)),
            record(2011, |r| r.length_seconds = None),
            record(2012, |r| r.length_seconds = Some(240.0)),
        ];
        let collection = DerivedCollection::derive(records, &EraBoundaries::default());
        let table = aggregate(&collection, GroupBy::Era, &[Metric::LengthMinutes]);
        // Mean of 2 and 4 minutes; the missing length is not a zero
        assert_eq!(
            table.value(GroupKey::Era(Era::Streaming), Metric::LengthMinutes),
            Some(3.0)
        );
    }

    #[test]
    fn test_year_and_decade_grouping() {
        let records = vec![
            record(1992, |_| {}),
            record(1997, |_| {}),
            record(1997, |_| {}),
            record(2003, |_| {}),
        ];
        let collection = DerivedCollection::derive(records, &EraBoundaries::default());

        let by_year = aggregate(&collection, GroupBy::Year, &[]);
        let keys = by_year.rows.iter().map(|row| row.key).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![GroupKey::Year(1992), GroupKey::Year(1997), GroupKey::Year(2003)]
        );
        assert_eq!(by_year.row(GroupKey::Year(1997)).unwrap().record_count, 2);

        let by_decade = aggregate(&collection, GroupBy::Decade, &[]);
        let keys = by_decade.rows.iter().map(|row| row.key).collect::<Vec<_>>();
        assert_eq!(keys, vec![GroupKey::Decade(1990), GroupKey::Decade(2000)]);
        assert_eq!(
            by_decade.row(GroupKey::Decade(1990)).unwrap().record_count,
            3
        );
    }

    #[test]
    fn test_era_counts_sum_to_total() {
        let collection = six_record_collection();
        let table = aggregate(&collection, GroupBy::Era, &[]);
        let total = table.rows.iter().map(|row| row.record_count).sum::<usize>();
        assert_eq!(total, collection.len());
    }

    #[test]
    fn test_length_summary_per_era() {
        let collection = six_record_collection();
        let summary = length_summary(&collection);
        assert_eq!(summary.len(), 3);
        for (_, stats) in &summary {
            let stats = stats.as_ref().unwrap();
            assert_eq!(stats.count, 2);
            assert!((stats.mean - 3.0).abs() < 1e-12);
        }
    }
}
