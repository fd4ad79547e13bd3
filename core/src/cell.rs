use serde::{Deserialize, Serialize};

/// What the player has done to a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Covered,
    Flagged,
    Revealed,
}

/// Internal truth of one board position, both hidden and visible parts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub is_mine: bool,
    /// Mines among the 8 neighbours, unused for mine cells.
    pub adjacent_mines: u8,
    pub visibility: Visibility,
}

impl Cell {
    pub const fn is_covered(self) -> bool {
        matches!(self.visibility, Visibility::Covered)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self.visibility, Visibility::Revealed)
    }

    /// Player-visible projection of this cell.
    pub const fn field_state(self) -> FieldState {
        match (self.visibility, self.is_mine) {
            (Visibility::Covered, _) => FieldState::Hidden,
            (Visibility::Flagged, _) => FieldState::Flagged,
            (Visibility::Revealed, true) => FieldState::Bomb,
            (Visibility::Revealed, false) => FieldState::Visible(self.adjacent_mines),
        }
    }
}

/// Front-facing state of a cell as handed to renderers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldState {
    #[default]
    Hidden,
    Flagged,
    /// Revealed safe cell with its adjacent mine count, `0` is an empty cell.
    Visible(u8),
    Bomb,
}

impl FieldState {
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible(_))
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Visible(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(is_mine: bool, adjacent_mines: u8, visibility: Visibility) -> Cell {
        Cell {
            is_mine,
            adjacent_mines,
            visibility,
        }
    }

    #[test]
    fn covered_cells_hide_their_contents() {
        assert_eq!(cell(true, 0, Visibility::Covered).field_state(), FieldState::Hidden);
        assert_eq!(cell(false, 3, Visibility::Covered).field_state(), FieldState::Hidden);
        assert_eq!(cell(true, 0, Visibility::Flagged).field_state(), FieldState::Flagged);
    }

    #[test]
    fn revealed_cells_show_count_or_bomb() {
        assert_eq!(
            cell(false, 3, Visibility::Revealed).field_state(),
            FieldState::Visible(3)
        );
        assert!(cell(false, 0, Visibility::Revealed).field_state().is_empty());
        assert_eq!(cell(true, 2, Visibility::Revealed).field_state(), FieldState::Bomb);
    }
}
