//! Change-magnitude command
//!
//! Prints the era-to-era delta table for the standard metric battery:
//! how much each measure moved from Pre-Digital to Streaming, from
//! Streaming to Post-Short-Form, and in total.

use std::path::PathBuf;

use chartshift_analysis::{
    aggregate::{self, GroupBy},
    magnitude,
    metric::Metric,
};
use clap::Args;

use crate::{
    command::table::{print_table, signed_cell},
    util,
};

/// The standard change-magnitude battery.
const CHANGE_METRICS: [Metric; 8] = [
    Metric::LengthMinutes,
    Metric::WeeksAtNumberOne,
    Metric::FrontPersonAge,
    Metric::SoloArtist,
    Metric::AllMaleArtist,
    Metric::AllFemaleArtist,
    Metric::ArtistIsSongwriter,
    Metric::ArtistIsOnlySongwriter,
];

#[derive(Debug, Clone, Args)]
pub(crate) struct ChangesArg {
    /// Path to the records JSON file
    pub dataset: PathBuf,
}

pub(crate) fn run(arg: &ChangesArg) -> anyhow::Result<()> {
    let collection = util::load_collection(&arg.dataset)?;
    let era_table = aggregate::aggregate(&collection, GroupBy::Era, &CHANGE_METRICS);
    let changes = magnitude::magnitude(&era_table, &CHANGE_METRICS);

    println!("Magnitude of Change Between Eras");
    println!("(share metrics in percentage points, others in their own unit)\n");

    let headers = [
        "Metric",
        "Pre-Digital \u{2192} Streaming",
        "Streaming \u{2192} Post-Short-Form",
        "Total",
    ]
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>();

    let rows = changes
        .iter()
        .map(|change| {
            vec![
                change.metric.to_string(),
                signed_cell(change.pre_digital_to_streaming),
                signed_cell(change.streaming_to_post_short_form),
                signed_cell(change.total),
            ]
        })
        .collect::<Vec<_>>();
    print_table(&headers, &rows);

    Ok(())
}
