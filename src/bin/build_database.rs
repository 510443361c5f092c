use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use cribbage_solver::cards::Deck;
use cribbage_solver::strategy::StrategyTable;
use cribbage_solver::{enumerate, matrix, snapshot};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(name = "build-database", about = "Builds the Cribbage CFR strategy database")]
struct Args {
    /// Directory snapshots are written to.
    #[arg(long, default_value = "snapshots")]
    snapshot_dir: PathBuf,
}

fn run(args: Args) -> anyhow::Result<()> {
    log::info!("{}", "enumerating canonical hands".bold());
    let deck = Deck::new();
    let counts = enumerate::count_all(&deck);
    log::info!("found {} canonical hand classes", counts.len());

    log::info!("{}", "building strategy table".bold());
    let table = StrategyTable::build(&counts).context("building strategy table")?;
    log::info!(
        "strategy table has {} rows, {} play-hand classes",
        table.rows().len(),
        table.all_big_h().len()
    );

    log::info!("{}", "building game-tree matrix".bold());
    let game_matrix = matrix::build(&table);
    log::info!("matrix built: {0}x{0}", game_matrix.size());

    log::info!("{}", "writing snapshot".bold());
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string());
    let n = snapshot::write_snapshot(&table, &args.snapshot_dir, &timestamp)
        .context("writing snapshot")?;
    log::info!("wrote snapshot {n}");

    let (ddeals, dmin, dmax, dcoverage, pdeals, pmin, pmax, pcoverage) = snapshot::coverage(&table);
    log::info!(
        "coverage: dealer(deals={ddeals}, min={dmin}, max={dmax}, coverage={dcoverage:.4}) \
         pone(deals={pdeals}, min={pmin}, max={pmax}, coverage={pcoverage:.4})"
    );

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    run(Args::parse())
}
