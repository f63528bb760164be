use clap::{Parser, Subcommand};

use self::{
    changes::ChangesArg, genres::GenresArg, independence::IndependenceArg, summary::SummaryArg,
};

mod changes;
mod genres;
mod independence;
mod summary;
mod table;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What report to produce
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Era, year, or decade summary tables
    Summary(#[clap(flatten)] SummaryArg),
    /// Magnitude of change between eras
    Changes(#[clap(flatten)] ChangesArg),
    /// Chi-square independence tests against era
    Independence(#[clap(flatten)] IndependenceArg),
    /// Genre distribution across eras
    Genres(#[clap(flatten)] GenresArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Summary(arg) => summary::run(&arg)?,
        Mode::Changes(arg) => changes::run(&arg)?,
        Mode::Independence(arg) => independence::run(&arg)?,
        Mode::Genres(arg) => genres::run(&arg)?,
    }
    Ok(())
}
