use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// Point-in-time copy of everything a renderer needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    state: GameState,
    mines_left: isize,
    cells: Array2<FieldState>,
}

impl Snapshot {
    pub(crate) fn project(
        state: GameState,
        mines_left: isize,
        grid: &Array2<Cell>,
        project: impl Fn(Cell) -> FieldState,
    ) -> Self {
        Self {
            state,
            mines_left,
            cells: grid.map(|&cell| project(cell)),
        }
    }

    /// Size as `(cols, rows)`.
    pub fn size(&self) -> Coord2 {
        self.cells.grid_size()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn mines_left(&self) -> isize {
        self.mines_left
    }

    pub fn get(&self, (x, y): Coord2) -> Option<FieldState> {
        self.cells.get([usize::from(x), usize::from(y)]).copied()
    }

    /// All cells indexed by `[col, row]`.
    pub fn cells(&self) -> &Array2<FieldState> {
        &self.cells
    }

    /// Rows from top to bottom, each from left to right.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, FieldState>> {
        self.cells.columns().into_iter()
    }

    pub fn count(&self, pred: impl Fn(FieldState) -> bool) -> usize {
        self.cells.iter().filter(|&&field| pred(field)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board<PresetPlacer> {
        let config = GameConfig::new((3, 2), 1).unwrap();
        Board::new(config, PresetPlacer::new([(0, 0)])).unwrap()
    }

    #[test]
    fn rows_are_laid_out_top_to_bottom() {
        let mut board = board();
        board.reveal((2, 1)).unwrap();
        board.toggle_flag((0, 0)).unwrap();

        let snapshot = board.snapshot();
        let rows: alloc::vec::Vec<alloc::vec::Vec<FieldState>> =
            snapshot.rows().map(|row| row.to_vec()).collect();

        use FieldState::*;
        assert_eq!(
            rows,
            [
                [Flagged, Visible(1), Visible(0)],
                [Hidden, Visible(1), Visible(0)],
            ]
        );
        assert_eq!(snapshot.size(), (3, 2));
        assert_eq!(snapshot.mines_left(), 0);
        assert_eq!(snapshot.state(), GameState::InProgress);
    }

    #[test]
    fn snapshot_does_not_follow_later_moves() {
        let mut board = board();
        let snapshot = board.snapshot();

        board.reveal((2, 1)).unwrap();

        assert_eq!(snapshot.count(|field| field == FieldState::Hidden), 6);
        assert_eq!(snapshot.get((2, 1)), Some(FieldState::Hidden));
        assert_eq!(snapshot.get((3, 0)), None);
    }

    #[test]
    fn snapshot_serializes_front_states() {
        let mut board = board();
        board.reveal((0, 0)).unwrap();

        let json = serde_json::to_value(board.snapshot()).unwrap();

        assert_eq!(json["state"], "Lost");
        assert_eq!(json["mines_left"], 1);
        assert_eq!(json["cells"]["dim"][0], 3);
        assert_eq!(json["cells"]["dim"][1], 2);
        assert_eq!(json["cells"]["data"][0], "Bomb");
        assert_eq!(json["cells"]["data"][1], "Hidden");
    }
}
