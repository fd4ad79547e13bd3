use anyhow::Context;
use clap::Parser;
use rand::Rng;
use std::io::{self, BufRead, Write};
use sweeper_core::{Board, CellCount, Coord, GameConfig};

use command::{Command, USAGE};
use session::{Flow, Session};

mod command;
mod session;
mod view;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of columns
    #[arg(long, default_value_t = GameConfig::classic().cols())]
    cols: Coord,

    /// Number of rows
    #[arg(long, default_value_t = GameConfig::classic().rows())]
    rows: Coord,

    /// Number of mines
    #[arg(short, long, default_value_t = GameConfig::classic().mines())]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::new((args.cols, args.rows), args.mines)
        .context("Invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("seed: {}", seed);

    let session = Session::new(Board::seeded(config, seed)?);
    run(session, io::stdin().lock(), io::stdout().lock())
}

fn run<P, R, W>(mut session: Session<P>, input: R, mut out: W) -> anyhow::Result<()>
where
    P: sweeper_core::MinePlacer,
    R: BufRead,
    W: Write,
{
    write!(out, "{session}")?;
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>().and_then(|command| {
            let flow = session.apply(command)?;
            Ok((command, flow))
        }) {
            Ok((_, Flow::Quit)) => break,
            Ok((Command::Help, _)) => writeln!(out, "{USAGE}")?,
            Ok(_) => write!(out, "{session}")?,
            Err(err) => writeln!(out, "error: {err}")?,
        }
        out.flush()?;
    }
    Ok(())
}
