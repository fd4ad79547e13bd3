use alloc::collections::VecDeque;
use ndarray::Array2;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
/// - any -> InProgress, only through a reset
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game session: the grid, its counters and the placer used on reset.
#[derive(Clone, Debug)]
pub struct Board<P = RandomPlacer<SmallRng>> {
    config: GameConfig,
    placer: P,
    grid: Array2<Cell>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Board with random mines from a seeded RNG.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomPlacer::from_seed(seed))
    }
}

impl<P: MinePlacer> Board<P> {
    pub fn new(config: GameConfig, placer: P) -> Result<Self> {
        let mut board = Self {
            config,
            placer,
            grid: Array2::default(config.size().to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
            state: GameState::InProgress,
            triggered_mine: None,
        };
        board.reset()?;
        Ok(board)
    }

    /// Start over with a fresh layout and the same configuration.
    pub fn reset(&mut self) -> Result<()> {
        self.reconfigure(self.config)
    }

    /// Start over with a fresh layout for a new configuration.
    ///
    /// The board is left untouched when no layout can be placed.
    pub fn reconfigure(&mut self, config: GameConfig) -> Result<()> {
        let layout = self.placer.place(config)?;
        if layout.size() != config.size() || layout.mine_count() != config.mines() {
            return Err(GameError::InvalidConfiguration {
                size: config.size(),
                mines: config.mines(),
            });
        }

        self.grid = Array2::from_shape_fn(config.size().to_nd_index(), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            Cell {
                is_mine: layout.contains_mine(coords),
                adjacent_mines: layout.adjacent_mine_count(coords),
                visibility: Visibility::Covered,
            }
        });
        self.config = config;
        self.revealed_count = 0;
        self.flagged_count = 0;
        self.triggered_mine = None;
        // nothing left to reveal on a board full of mines
        self.state = if config.safe_cells() == 0 {
            GameState::Won
        } else {
            GameState::InProgress
        };
        log::debug!(
            "New game on {:?} with {} mines, state {:?}",
            config.size(),
            config.mines(),
            self.state
        );
        Ok(())
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.config.validate_coords(coords)?;

        if self.state.is_finished() || !self.grid[coords.to_nd_index()].is_covered() {
            return Ok(RevealOutcome::Ignored);
        }

        if self.grid[coords.to_nd_index()].is_mine {
            self.grid[coords.to_nd_index()].visibility = Visibility::Revealed;
            self.triggered_mine = Some(coords);
            self.end_game(GameState::Lost);
            return Ok(RevealOutcome::Hit);
        }

        self.flood_reveal(coords);

        if self.revealed_count == self.config.safe_cells() {
            self.end_game(GameState::Won);
            Ok(RevealOutcome::Win)
        } else {
            Ok(RevealOutcome::Valid)
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.config.validate_coords(coords)?;

        if self.state.is_finished() {
            return Ok(FlagOutcome::Ignored);
        }

        let cell = &mut self.grid[coords.to_nd_index()];
        Ok(match cell.visibility {
            Visibility::Covered => {
                cell.visibility = Visibility::Flagged;
                self.flagged_count += 1;
                FlagOutcome::Valid
            }
            Visibility::Flagged => {
                cell.visibility = Visibility::Covered;
                self.flagged_count -= 1;
                FlagOutcome::Valid
            }
            Visibility::Revealed => FlagOutcome::Ignored,
        })
    }

    /// Reveals `start` and, from zero cells, every covered unflagged neighbour.
    fn flood_reveal(&mut self, start: Coord2) {
        self.uncover(start);
        log::debug!(
            "Revealed {:?}, adjacent mines: {}",
            start,
            self.grid[start.to_nd_index()].adjacent_mines
        );

        let mut to_visit = VecDeque::from([start]);
        while let Some(coords) = to_visit.pop_front() {
            if self.grid[coords.to_nd_index()].adjacent_mines != 0 {
                continue;
            }

            for next in self.grid.neighbors(coords) {
                let cell = self.grid[next.to_nd_index()];
                // covered doubles as the visited guard, flags are left alone
                if !cell.is_covered() || cell.is_mine {
                    continue;
                }
                self.uncover(next);
                log::trace!(
                    "Flood revealed {:?}, adjacent mines: {}",
                    next,
                    cell.adjacent_mines
                );
                to_visit.push_back(next);
            }
        }
    }

    fn uncover(&mut self, coords: Coord2) {
        self.grid[coords.to_nd_index()].visibility = Visibility::Revealed;
        self.revealed_count += 1;
    }

    fn end_game(&mut self, state: GameState) {
        debug_assert!(state.is_finished());
        self.state = state;
        log::debug!(
            "Game ended {:?} with {} of {} safe cells revealed",
            state,
            self.revealed_count,
            self.config.safe_cells()
        );
    }
}

impl<P> Board<P> {
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Mines minus flags, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.config.mines() as isize) - (self.flagged_count as isize)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.config.validate_coords(coords)?;
        Ok(self.grid[coords.to_nd_index()])
    }

    pub fn field_at(&self, coords: Coord2) -> Result<FieldState> {
        self.cell_at(coords).map(Cell::field_state)
    }

    /// Positions of every mine, column by column.
    pub fn mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.grid
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine)
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::project(self.state, self.mines_left(), &self.grid, Cell::field_state)
    }

    /// Like [`Board::snapshot`], but once the game is lost every covered mine shows as a bomb.
    pub fn exposed_snapshot(&self) -> Snapshot {
        if self.state != GameState::Lost {
            return self.snapshot();
        }
        Snapshot::project(self.state, self.mines_left(), &self.grid, |cell| {
            if cell.is_mine {
                FieldState::Bomb
            } else {
                cell.field_state()
            }
        })
    }
}
