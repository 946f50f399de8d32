/// A cell position, 0-indexed by row then column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// The 8 king-move offsets, in the order every search visits them.
pub const OFFSETS_8: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed offset, `None` if that would go negative
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Self { row, col })
    }

    /// Check if two positions touch (including diagonals)
    pub fn is_adjacent8(self, other: Coord) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }

    /// Check if two positions share an edge
    pub fn is_adjacent4(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_positions() {
        let a = Coord::new(0, 0);
        let b = Coord::new(0, 1);
        let c = Coord::new(1, 1);
        let d = Coord::new(2, 2);

        assert!(a.is_adjacent8(b));
        assert!(b.is_adjacent8(c));
        assert!(a.is_adjacent8(c));
        assert!(!a.is_adjacent8(d));
        assert!(!a.is_adjacent8(a));
    }

    #[test]
    fn test_orthogonal_adjacency() {
        let a = Coord::new(3, 3);
        assert!(a.is_adjacent4(Coord::new(2, 3)));
        assert!(a.is_adjacent4(Coord::new(3, 4)));
        assert!(!a.is_adjacent4(Coord::new(4, 4)));
        assert!(!a.is_adjacent4(a));
    }

    #[test]
    fn test_offset_underflow() {
        assert_eq!(Coord::new(0, 0).offset(-1, 0), None);
        assert_eq!(Coord::new(1, 0).offset(-1, 1), Some(Coord::new(0, 1)));
    }
}
