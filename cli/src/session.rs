use std::fmt;
use sweeper_core::{Board, Coord2, GameState, MinePlacer, RevealOutcome};

use crate::command::{Command, CommandError};
use crate::view::BoardView;

/// Line shown above the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Welcome,
    KeepGoing,
    Won,
    GameOver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Welcome => "Welcome!",
            Status::KeepGoing => "Keep Going!",
            Status::Won => "You Win!",
            Status::GameOver => "Game Over!",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Presentation state around one board: routes commands and keeps the status line.
pub struct Session<P> {
    board: Board<P>,
    status: Status,
}

impl<P: MinePlacer> Session<P> {
    pub fn new(board: Board<P>) -> Self {
        Self {
            board,
            status: Status::Welcome,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn board(&self) -> &Board<P> {
        &self.board
    }

    pub fn apply(&mut self, command: Command) -> Result<Flow, CommandError> {
        match command {
            Command::Reveal(coords) => {
                let coords = self.check_bounds(coords)?;
                let outcome = self.board.reveal(coords)?;
                log::debug!("reveal {:?}: {:?}", coords, outcome);
                self.status = match outcome {
                    RevealOutcome::Valid => Status::KeepGoing,
                    RevealOutcome::Hit => Status::GameOver,
                    RevealOutcome::Win => Status::Won,
                    RevealOutcome::Ignored => self.status,
                };
            }
            Command::Flag(coords) => {
                let coords = self.check_bounds(coords)?;
                let outcome = self.board.toggle_flag(coords)?;
                log::debug!("flag {:?}: {:?}", coords, outcome);
                if outcome.has_update() {
                    self.status = Status::KeepGoing;
                }
            }
            Command::New => {
                self.board.reset()?;
                self.status = Status::Welcome;
                log::info!("new game");
            }
            Command::Help => {}
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn check_bounds(&self, (col, row): Coord2) -> Result<Coord2, CommandError> {
        let (cols, rows) = self.board.size();
        if col < cols && row < rows {
            Ok((col, row))
        } else {
            Err(CommandError::OffBoard {
                col: usize::from(col) + 1,
                row: usize::from(row) + 1,
                cols,
                rows,
            })
        }
    }
}

impl<P> fmt::Display for Session<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the whole minefield is shown once the game is lost
        let snapshot = match self.board.state() {
            GameState::Lost => self.board.exposed_snapshot(),
            _ => self.board.snapshot(),
        };
        writeln!(f, "Mines left: {:<4} {}", snapshot.mines_left(), self.status)?;
        write!(f, "{}", BoardView(&snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::{GameConfig, PresetPlacer};

    fn session() -> Session<PresetPlacer> {
        let config = GameConfig::new((3, 2), 1).unwrap();
        Session::new(Board::new(config, PresetPlacer::new([(0, 0)])).unwrap())
    }

    #[test]
    fn status_follows_outcomes() {
        let mut session = session();
        assert_eq!(session.status(), Status::Welcome);

        session.apply(Command::Reveal((2, 1))).unwrap();
        assert_eq!(session.status(), Status::KeepGoing);

        session.apply(Command::Reveal((0, 1))).unwrap();
        assert_eq!(session.status(), Status::Won);
    }

    #[test]
    fn flag_moves_the_status_along() {
        let mut session = session();

        session.apply(Command::Flag((0, 0))).unwrap();

        assert_eq!(session.status(), Status::KeepGoing);
        assert_eq!(session.board().mines_left(), 0);
    }

    #[test]
    fn ignored_moves_keep_status() {
        let mut session = session();
        session.apply(Command::Reveal((0, 0))).unwrap();
        assert_eq!(session.status(), Status::GameOver);

        session.apply(Command::Flag((1, 1))).unwrap();
        session.apply(Command::Reveal((1, 1))).unwrap();
        assert_eq!(session.status(), Status::GameOver);
    }

    #[test]
    fn new_game_resets_board_and_status() {
        let mut session = session();
        session.apply(Command::Reveal((0, 0))).unwrap();

        assert_eq!(session.apply(Command::New), Ok(Flow::Continue));
        assert_eq!(session.status(), Status::Welcome);
        assert_eq!(session.board().state(), GameState::InProgress);
    }

    #[test]
    fn off_board_moves_are_rejected_before_the_engine() {
        let mut session = session();

        assert_eq!(
            session.apply(Command::Reveal((3, 0))),
            Err(CommandError::OffBoard {
                col: 4,
                row: 1,
                cols: 3,
                rows: 2
            })
        );
        assert_eq!(session.board().revealed_count(), 0);
    }

    #[test]
    fn quit_stops_the_loop() {
        assert_eq!(session().apply(Command::Quit), Ok(Flow::Quit));
    }

    #[test]
    fn lost_game_renders_every_mine() {
        let config = GameConfig::new((3, 1), 2).unwrap();
        let board = Board::new(config, PresetPlacer::new([(0, 0), (2, 0)])).unwrap();
        let mut session = Session::new(board);

        session.apply(Command::Reveal((2, 0))).unwrap();

        assert_eq!(
            session.to_string(),
            "Mines left: 2    Game Over!\n     1  2  3\n  1  *  #  *\n"
        );
    }
}
