use std::str::{FromStr, SplitWhitespace};
use sweeper_core::{Coord, Coord2, GameError};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Primary action, coordinates already zero-based.
    Reveal(Coord2),
    /// Secondary action, coordinates already zero-based.
    Flag(Coord2),
    New,
    Help,
    Quit,
}

pub const USAGE: &str = "\
USAGE:
    r, reveal <col> <row>   Reveal a cell
    f, flag <col> <row>     Flag or unflag a cell
    n, new                  Start a new game
    h, help                 Print this help
    q, quit                 Leave the game";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` expects a column and a row")]
    MissingCoords(&'static str),
    #[error("could not parse {axis} `{value}`, expected a number from 1")]
    BadCoord { axis: &'static str, value: String },
    #[error("column {col} row {row} is not on the {cols}x{rows} board")]
    OffBoard {
        col: usize,
        row: usize,
        cols: Coord,
        rows: Coord,
    },
    #[error(transparent)]
    Game(#[from] GameError),
}

fn parse_axis(axis: &'static str, value: &str) -> Result<Coord, CommandError> {
    match value.parse::<Coord>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(CommandError::BadCoord {
            axis,
            value: value.to_owned(),
        }),
    }
}

fn parse_coords(
    name: &'static str,
    words: &mut SplitWhitespace<'_>,
) -> Result<Coord2, CommandError> {
    match (words.next(), words.next(), words.next()) {
        (Some(col), Some(row), None) => Ok((parse_axis("column", col)?, parse_axis("row", row)?)),
        _ => Err(CommandError::MissingCoords(name)),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;

        Ok(match name {
            "r" | "reveal" => Command::Reveal(parse_coords("reveal", &mut words)?),
            "f" | "flag" => Command::Flag(parse_coords("flag", &mut words)?),
            "n" | "new" => Command::New,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_owned())),
        })
    }
}
