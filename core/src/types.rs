use ndarray::Array2;

/// Single axis of the board: a column, a row, or the width/height.
pub type Coord = u8;

/// Count type for mines, flags and cells.
pub type CellCount = u16;

/// Board coordinates as `(col, row)`; also used for the size as `(cols, rows)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Offsets of the 8-neighbourhood, row by row.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterator over the in-bounds neighbours of a cell.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    size: Coord2,
    next: usize,
}

impl Neighbors {
    pub fn new(center: Coord2, size: Coord2) -> Self {
        Self {
            center,
            size,
            next: 0,
        }
    }

    fn shift(&self, (dx, dy): (i8, i8)) -> Option<Coord2> {
        let x = self.center.0.checked_add_signed(dx)?;
        let y = self.center.1.checked_add_signed(dy)?;
        (x < self.size.0 && y < self.size.1).then_some((x, y))
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(coords) = self.shift(offset) {
                return Some(coords);
            }
        }
        None
    }
}

pub trait NeighborsExt {
    /// Size of the grid as `(cols, rows)`.
    fn grid_size(&self) -> Coord2;

    fn neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.grid_size())
    }
}

impl<T> NeighborsExt for Array2<T> {
    fn grid_size(&self) -> Coord2 {
        let (cols, rows) = self.dim();
        // grids are only ever built from a `Coord2`
        (cols as Coord, rows as Coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let around: Vec<_> = Neighbors::new((0, 0), (5, 7)).collect();
        assert_eq!(around, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn inner_cell_has_eight_neighbors() {
        assert_eq!(Neighbors::new((2, 3), (5, 7)).count(), 8);
    }

    #[test]
    fn far_edge_is_clipped() {
        let around: Vec<_> = Neighbors::new((4, 6), (5, 7)).collect();
        assert_eq!(around, [(3, 5), (4, 5), (3, 6)]);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        assert_eq!(Neighbors::new((0, 0), (1, 1)).next(), None);
    }

    #[test]
    fn mult_saturates() {
        assert_eq!(mult(5, 7), 35);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
