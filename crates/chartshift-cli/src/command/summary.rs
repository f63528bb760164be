//! Summary command
//!
//! Prints the era comparison the engine was built for: per-era record
//! counts, song-length distributions, artist structure, demographics,
//! and creative-control shares. Year and decade groupings print the
//! trend table instead.

use std::path::PathBuf;

use chartshift_analysis::{
    aggregate::{self, AggregateTable, GroupBy},
    collection::DerivedCollection,
    metric::Metric,
};
use clap::Args;

use crate::{
    command::table::{cell, print_table},
    util,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SummaryArg {
    /// Path to the records JSON file
    pub dataset: PathBuf,

    /// Grouping for the summary (defaults to era)
    #[arg(long, value_enum)]
    pub group_by: Option<GroupByArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum GroupByArg {
    Era,
    Year,
    Decade,
}

pub(crate) fn run(arg: &SummaryArg) -> anyhow::Result<()> {
    let collection = util::load_collection(&arg.dataset)?;

    match arg.group_by.unwrap_or(GroupByArg::Era) {
        GroupByArg::Era => print_era_summary(&collection),
        GroupByArg::Year => print_trend_summary(&collection, GroupBy::Year, "Year"),
        GroupByArg::Decade => print_trend_summary(&collection, GroupBy::Decade, "Decade"),
    }

    Ok(())
}

fn metric_section(title: &str, table: &AggregateTable, metrics: &[Metric]) {
    println!("{title}");
    let mut headers = vec!["Era".to_string()];
    headers.extend(metrics.iter().map(|metric| metric.label().to_string()));

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.key.to_string()];
            cells.extend(metrics.iter().map(|&metric| cell(row.value(metric))));
            cells
        })
        .collect::<Vec<_>>();
    print_table(&headers, &rows);
    println!();
}

fn print_era_summary(collection: &DerivedCollection) {
    let table = aggregate::aggregate(collection, GroupBy::Era, &Metric::ALL);

    println!("Record Counts");
    let rows = table
        .rows
        .iter()
        .map(|row| vec![row.key.to_string(), row.record_count.to_string()])
        .collect::<Vec<_>>();
    print_table(&["Era".to_string(), "Songs".to_string()], &rows);
    println!();

    println!("Song Length Distribution (min)");
    let rows = aggregate::length_summary(collection)
        .iter()
        .map(|(era, stats)| {
            let mut cells = vec![era.to_string()];
            match stats {
                Some(stats) => {
                    cells.push(format!("{:.2}", stats.min));
                    cells.push(format!("{:.2}", stats.median));
                    cells.push(format!("{:.2}", stats.mean));
                    cells.push(format!("{:.2}", stats.max));
                    cells.push(format!("{:.2}", stats.std_dev));
                }
                None => cells.extend(std::iter::repeat_n("n/a".to_string(), 5)),
            }
            cells
        })
        .collect::<Vec<_>>();
    let headers = ["Era", "Min", "Median", "Mean", "Max", "StdDev"]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    print_table(&headers, &rows);
    println!();

    metric_section(
        "Artist Structure",
        &table,
        &[Metric::SoloArtist, Metric::Duo, Metric::Group],
    );
    metric_section(
        "Artist Gender",
        &table,
        &[
            Metric::AllMaleArtist,
            Metric::AllFemaleArtist,
            Metric::MixedGenderArtist,
        ],
    );
    metric_section(
        "Songwriter Gender",
        &table,
        &[
            Metric::AllMaleSongwriter,
            Metric::AllFemaleSongwriter,
            Metric::MixedGenderSongwriter,
        ],
    );
    metric_section(
        "Producer Gender",
        &table,
        &[
            Metric::AllMaleProducer,
            Metric::AllFemaleProducer,
            Metric::MixedGenderProducer,
        ],
    );
    metric_section(
        "Race Composition",
        &table,
        &[
            Metric::AllWhiteArtist,
            Metric::AllBlackArtist,
            Metric::AllWhiteSongwriter,
            Metric::AllWhiteProducer,
        ],
    );
    metric_section(
        "Creative Control",
        &table,
        &[
            Metric::ArtistIsSongwriter,
            Metric::ArtistIsOnlySongwriter,
            Metric::ArtistIsProducer,
            Metric::ArtistIsOnlyProducer,
        ],
    );
    metric_section(
        "Tenure and Age",
        &table,
        &[Metric::WeeksAtNumberOne, Metric::FrontPersonAge],
    );
}

/// Trend metrics: the measures the era comparison tracks over time.
const TREND_METRICS: [Metric; 5] = [
    Metric::LengthMinutes,
    Metric::SoloArtist,
    Metric::AllFemaleArtist,
    Metric::AllBlackArtist,
    Metric::ArtistIsSongwriter,
];

fn print_trend_summary(collection: &DerivedCollection, group_by: GroupBy, key_label: &str) {
    let table = aggregate::aggregate(collection, group_by, &TREND_METRICS);

    let mut headers = vec![key_label.to_string(), "Songs".to_string()];
    headers.extend(TREND_METRICS.iter().map(|metric| metric.label().to_string()));

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.key.to_string(), row.record_count.to_string()];
            cells.extend(TREND_METRICS.iter().map(|&metric| cell(row.value(metric))));
            cells
        })
        .collect::<Vec<_>>();
    print_table(&headers, &rows);
}
