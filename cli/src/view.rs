use std::fmt;
use sweeper_core::{FieldState, Snapshot};

pub fn glyph(field: FieldState) -> char {
    match field {
        FieldState::Hidden => '#',
        FieldState::Flagged => 'F',
        FieldState::Visible(0) => '.',
        FieldState::Visible(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        FieldState::Bomb => '*',
    }
}

/// Text rendering of a snapshot with 1-based column and row labels.
pub struct BoardView<'a>(pub &'a Snapshot);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (cols, _) = self.0.size();
        write!(f, "   ")?;
        for col in 1..=cols {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;
        for (row, fields) in self.0.rows().enumerate() {
            write!(f, "{:>3}", row + 1)?;
            for &field in fields {
                write!(f, "{:>3}", glyph(field))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
