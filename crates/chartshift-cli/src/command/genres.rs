//! Genre-distribution command
//!
//! Prints the share of each era's number-one hits by genre, restricted
//! to the most common genres overall.

use std::path::PathBuf;

use chartshift_analysis::contingency::{ContingencyTable, Dimension};
use clap::Args;

use crate::{
    command::table::{cell, print_table},
    util,
};

#[derive(Debug, Clone, Args)]
pub(crate) struct GenresArg {
    /// Path to the records JSON file
    pub dataset: PathBuf,

    /// Number of top genres to keep
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

pub(crate) fn run(arg: &GenresArg) -> anyhow::Result<()> {
    let collection = util::load_collection(&arg.dataset)?;

    let mut table = ContingencyTable::build(&collection, Dimension::Era, Dimension::Genre);
    table.retain_top_columns(arg.top);

    println!("Genre Distribution Across Eras (% of era's hits)");

    let mut headers = vec!["Era".to_string()];
    headers.extend(table.col_labels.iter().cloned());

    let shares = table.row_shares();
    let rows = table
        .row_labels
        .iter()
        .zip(&shares)
        .map(|(label, row)| {
            let mut cells = vec![label.clone()];
            cells.extend(row.iter().map(|&share| cell(share)));
            cells
        })
        .collect::<Vec<_>>();
    print_table(&headers, &rows);

    Ok(())
}
