//! Change magnitude between eras
//!
//! Given an era-grouped [`AggregateTable`], the calculator reports three
//! deltas per metric: Pre-Digital to Streaming, Streaming to
//! Post-Short-Form, and the Pre-Digital to Post-Short-Form total. Share
//! metrics are differences of two percentages, i.e. percentage points;
//! raw metrics are plain differences in their own unit. An era without
//! data for a metric propagates `None` into the deltas that touch it.

use serde::{Deserialize, Serialize};

use crate::{
    aggregate::{AggregateTable, GroupBy, GroupKey},
    era::Era,
    metric::{Metric, MetricKind},
};

/// The three era-to-era deltas for one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricChange {
    /// The metric the deltas describe.
    pub metric: Metric,
    /// Whether the deltas are percentage points rather than raw units.
    pub percentage_points: bool,
    /// Pre-Digital era to Streaming era.
    pub pre_digital_to_streaming: Option<f64>,
    /// Streaming era to Post-Short-Form era.
    pub streaming_to_post_short_form: Option<f64>,
    /// Pre-Digital era to Post-Short-Form era. Always the sum of the two
    /// incremental deltas up to floating-point epsilon.
    pub total: Option<f64>,
}

fn delta(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    Some(to? - from?)
}

/// Computes era-to-era deltas for each metric from an era-grouped table.
///
/// # Panics
///
/// Panics if the table was not grouped by era.
#[must_use]
pub fn magnitude(era_table: &AggregateTable, metrics: &[Metric]) -> Vec<MetricChange> {
    assert!(
        era_table.group_by == GroupBy::Era,
        "change magnitude requires an era-grouped table"
    );

    metrics
        .iter()
        .map(|&metric| {
            let pre = era_table.value(GroupKey::Era(Era::PreDigital), metric);
            let streaming = era_table.value(GroupKey::Era(Era::Streaming), metric);
            let post = era_table.value(GroupKey::Era(Era::PostShortForm), metric);

            MetricChange {
                metric,
                percentage_points: metric.kind() == MetricKind::Share,
                pre_digital_to_streaming: delta(pre, streaming),
                streaming_to_post_short_form: delta(streaming, post),
                total: delta(pre, post),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        aggregate::{self, GroupBy},
        collection::DerivedCollection,
        era::EraBoundaries,
        record::ChartRecord,
    };

    use super::*;

    fn record(year: i32, weeks: u32, gender_code: Option<u8>) -> ChartRecord {
        ChartRecord {
            date: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
            weeks_at_number_one: weeks,
            length_seconds: None,
            artist_structure_code: None,
            artist_gender_code: gender_code,
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
        }
    }

    #[test]
    fn test_raw_metric_deltas() {
        // Era means: 10, 15, 20 weeks
        let records = vec![
            record(1990, 10, None),
            record(2010, 15, None),
            record(2021, 20, None),
        ];
        let collection = DerivedCollection::derive(records, &EraBoundaries::default());
        let table = aggregate::aggregate(&collection, GroupBy::Era, &[Metric::WeeksAtNumberOne]);
        let changes = magnitude(&table, &[Metric::WeeksAtNumberOne]);

        let change = &changes[0];
        assert!(!change.percentage_points);
        assert_eq!(change.pre_digital_to_streaming, Some(5.0));
        assert_eq!(change.streaming_to_post_short_form, Some(5.0));
        assert_eq!(change.total, Some(10.0));
    }

    #[test]
    fn test_total_equals_sum_of_increments() {
        let records = vec![
            record(1990, 3, Some(1)),
            record(1995, 7, Some(0)),
            record(2010, 4, Some(1)),
            record(2015, 9, Some(1)),
            record(2021, 2, Some(2)),
            record(2023, 5, Some(0)),
        ];
        let collection = DerivedCollection::derive(records, &EraBoundaries::default());
        let metrics = [
            Metric::WeeksAtNumberOne,
            Metric::AllMaleArtist,
            Metric::AllFemaleArtist,
        ];
        let table = aggregate::aggregate(&collection, GroupBy::Era, &metrics);

        for change in magnitude(&table, &metrics) {
            let first = change.pre_digital_to_streaming.unwrap();
            let second = change.streaming_to_post_short_form.unwrap();
            let total = change.total.unwrap();
            assert!(
                (total - (first + second)).abs() < 1e-9,
                "{}: {total} != {first} + {second}",
                change.metric
            );
        }
    }

    #[test]
    fn test_share_metric_is_percentage_points() {
        // All-male share: 100% pre-digital, 50% streaming, 0% post
        let records = vec![
            record(1990, 1, Some(1)),
            record(2010, 1, Some(1)),
            record(2011, 1, Some(0)),
            record(2021, 1, Some(0)),
        ];
        let collection = DerivedCollection::derive(records, &EraBoundaries::default());
        let table = aggregate::aggregate(&collection, GroupBy::Era, &[Metric::AllMaleArtist]);
        let changes = magnitude(&table, &[Metric::AllMaleArtist]);

        let change = &changes[0];
        assert!(change.percentage_points);
        assert_eq!(change.pre_digital_to_streaming, Some(-50.0));
        assert_eq!(change.streaming_to_post_short_form, Some(-50.0));
        assert_eq!(change.total, Some(-100.0));
    }

    #[test]
    fn test_missing_era_propagates_none() {
        // No post-short-form records
        let records = vec![record(1990, 10, None), record(2010, 15, None)];
        let collection = DerivedCollection::derive(records, &EraBoundaries::default());
        let table = aggregate::aggregate(&collection, GroupBy::Era, &[Metric::WeeksAtNumberOne]);
        let changes = magnitude(&table, &[Metric::WeeksAtNumberOne]);

        let change = &changes[0];
        assert_eq!(change.pre_digital_to_streaming, Some(5.0));
        assert_eq!(change.streaming_to_post_short_form, None);
        assert_eq!(change.total, None);
    }
}
