//! Game-state engine for Minesweeper.
//!
//! [`Board`] owns the grid and enforces the rules, mines are placed by an injected
//! [`MinePlacer`] and renderers read a [`Snapshot`] of front-facing [`FieldState`]s.

#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use placer::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod placer;
mod snapshot;
mod types;

/// Board dimensions and mine count, validated on construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct GameConfig {
    size: Coord2,
    mines: CellCount,
}

/// Unchecked wire form of [`GameConfig`].
#[derive(Deserialize)]
struct RawConfig {
    size: Coord2,
    mines: CellCount,
}

impl TryFrom<RawConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        Self::new(raw.size, raw.mines)
    }
}

impl GameConfig {
    /// Small portrait board: 5 columns, 7 rows, 6 mines.
    pub const fn classic() -> Self {
        Self {
            size: (5, 7),
            mines: 6,
        }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 || mines > mult(size.0, size.1) {
            return Err(GameError::InvalidConfiguration { size, mines });
        }
        Ok(Self { size, mines })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn cols(&self) -> Coord {
        self.size.0
    }

    pub const fn rows(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoordinate {
                coords,
                size: self.size,
            })
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Where the mines are, as produced by a [`MinePlacer`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLayout")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

/// Wire form of [`MineLayout`], the count is always recomputed from the mask.
#[derive(Deserialize)]
struct RawLayout {
    mine_mask: Array2<bool>,
}

impl From<RawLayout> for MineLayout {
    fn from(raw: RawLayout) -> Self {
        Self::from_mine_mask(raw.mine_mask)
    }
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Layout with mines at the given coordinates, duplicates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoordinate { coords, size });
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        self.mine_mask.grid_size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_mask
            .neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Safe cell revealed, the game goes on.
    Valid,
    /// A mine was revealed, the game is lost.
    Hit,
    /// The last safe cell was revealed.
    Win,
    /// Nothing changed: the cell was not covered or the game is over.
    Ignored,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Valid,
    Ignored,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Valid)
    }
}
