//! Independence command
//!
//! Runs the standard chi-square battery against era: song-length
//! terciles, solo-artist share, songwriting credit, and production
//! credit. Each test prints its observed contingency table and either
//! the test result or an explicit degenerate-table note.

use std::path::PathBuf;

use chartshift_analysis::{
    collection::DerivedCollection,
    contingency::{self, ContingencyTable, Dimension},
    metric::Metric,
};
use clap::Args;

use crate::{command::table::print_table, util};

/// Column dimensions tested against era.
const BATTERY: [Dimension; 4] = [
    Dimension::LengthTercile,
    Dimension::Share(Metric::SoloArtist),
    Dimension::Share(Metric::ArtistIsSongwriter),
    Dimension::Share(Metric::ArtistIsProducer),
];

#[derive(Debug, Clone, Args)]
pub(crate) struct IndependenceArg {
    /// Path to the records JSON file
    pub dataset: PathBuf,
}

pub(crate) fn run(arg: &IndependenceArg) -> anyhow::Result<()> {
    let collection = util::load_collection(&arg.dataset)?;

    for dimension in BATTERY {
        print_test(&collection, dimension);
        println!();
    }

    Ok(())
}

fn print_test(collection: &DerivedCollection, col_dimension: Dimension) {
    let table = ContingencyTable::build(collection, Dimension::Era, col_dimension);
    println!("Era \u{d7} {col_dimension}");

    let mut headers = vec!["Era".to_string()];
    headers.extend(table.col_labels.iter().cloned());
    let rows = table
        .row_labels
        .iter()
        .zip(&table.counts)
        .map(|(label, counts)| {
            let mut cells = vec![label.clone()];
            cells.extend(counts.iter().map(ToString::to_string));
            cells
        })
        .collect::<Vec<_>>();
    print_table(&headers, &rows);

    match contingency::chi_square(&table) {
        Ok(test) => println!(
            "  chi2 = {:.4}, dof = {}, p = {:.4}",
            test.statistic, test.degrees_of_freedom, test.p_value
        ),
        Err(err) => println!("  {err}"),
    }
}
