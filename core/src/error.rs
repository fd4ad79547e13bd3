use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates {coords:?} are outside of a {size:?} board")]
    InvalidCoordinate { coords: Coord2, size: Coord2 },
    #[error("Board of {size:?} cannot hold {mines} mines")]
    InvalidConfiguration { size: Coord2, mines: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
