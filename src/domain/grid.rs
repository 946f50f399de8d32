use std::ops::{Index, IndexMut};

use super::coord::{Coord, OFFSETS_8};
use super::error::{Error, Result};

/// Grid is a fixed-size 2D array of cells addressed by (row, col).
/// Dimensions are set once at construction; cells are mutated in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Create a new grid with every cell at its default value
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::default())
    }
}

impl<T: Clone> Grid<T> {
    /// Create a new grid with every cell set to `value`
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from row vectors; every row must have the same length
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_cols) {
            return Err(Error::InvalidInput(format!(
                "row {} has {} cells, expected {}",
                idx,
                row.len(),
                num_cols
            )));
        }

        Ok(Self {
            rows: num_rows,
            cols: num_cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn num_rows(&self) -> usize {
        self.rows
    }

    pub const fn num_cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub const fn in_bounds(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    /// Convert 2D coordinates to 1D index
    pub const fn index_of(&self, at: Coord) -> usize {
        at.row * self.cols + at.col
    }

    fn check(&self, at: Coord) -> Result<usize> {
        if self.in_bounds(at) {
            Ok(self.index_of(at))
        } else {
            Err(Error::OutOfBounds {
                row: at.row,
                col: at.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, at: Coord) -> Result<&T> {
        let idx = self.check(at)?;
        Ok(&self.cells[idx])
    }

    pub fn get_mut(&mut self, at: Coord) -> Result<&mut T> {
        let idx = self.check(at)?;
        Ok(&mut self.cells[idx])
    }

    /// Overwrite the cell at a position
    pub fn set(&mut self, at: Coord, value: T) -> Result<()> {
        *self.get_mut(at)? = value;
        Ok(())
    }

    /// Cell at `at` shifted by an offset, if it lands inside the grid
    pub fn shifted(&self, at: Coord, d_row: isize, d_col: isize) -> Option<Coord> {
        at.offset(d_row, d_col).filter(|&c| self.in_bounds(c))
    }

    /// In-bounds 8-neighbors of a cell, in `OFFSETS_8` order
    pub fn neighbors8(&self, at: Coord) -> impl Iterator<Item = Coord> + '_ {
        OFFSETS_8
            .iter()
            .filter_map(move |&(dr, dc)| self.shifted(at, dr, dc))
    }

    /// All positions in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<T> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord { row, col }))
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.coords().zip(self.cells.iter())
    }

    /// Build a new grid of the same shape by mapping every cell
    pub fn map<U>(&self, mut f: impl FnMut(Coord, &T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.iter_cells().map(|(at, cell)| f(at, cell)).collect(),
        }
    }
}

/// Unchecked access for positions already known to be in bounds.
/// Panics otherwise; use [`Grid::get`] when the position is untrusted.
impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, at: Coord) -> &T {
        assert!(self.in_bounds(at), "{at:?} outside {}x{} grid", self.rows, self.cols);
        &self.cells[self.index_of(at)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, at: Coord) -> &mut T {
        assert!(self.in_bounds(at), "{at:?} outside {}x{} grid", self.rows, self.cols);
        let idx = self.index_of(at);
        &mut self.cells[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let grid: Grid<u8> = Grid::new(3, 5);
        assert_eq!(grid.dimensions(), (3, 5));
        assert_eq!(grid.len(), 15);
    }

    #[test]
    fn test_get_set() {
        let mut grid: Grid<char> = Grid::filled(2, 2, '.');
        grid.set(Coord::new(1, 0), 'X').unwrap();
        assert_eq!(*grid.get(Coord::new(1, 0)).unwrap(), 'X');
        assert_eq!(grid[Coord::new(0, 0)], '.');
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid: Grid<u8> = Grid::new(2, 3);
        assert!(matches!(
            grid.get(Coord::new(2, 0)),
            Err(Error::OutOfBounds { row: 2, col: 0, rows: 2, cols: 3 })
        ));
        assert!(grid.set(Coord::new(0, 3), 1).is_err());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let ragged = vec![vec![1, 2], vec![3]];
        assert!(matches!(Grid::from_rows(ragged), Err(Error::InvalidInput(_))));

        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(grid[Coord::new(1, 0)], 3);
    }

    #[test]
    fn test_neighbors_corner_and_center() {
        let grid: Grid<u8> = Grid::new(3, 3);
        let corner: Vec<_> = grid.neighbors8(Coord::new(0, 0)).collect();
        assert_eq!(corner, vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]);

        let center: Vec<_> = grid.neighbors8(Coord::new(1, 1)).collect();
        assert_eq!(center.len(), 8);
        assert!(!center.contains(&Coord::new(1, 1)));
        assert_eq!(center[0], Coord::new(0, 0));
    }

    #[test]
    fn test_coords_row_major() {
        let grid: Grid<u8> = Grid::new(2, 2);
        let coords: Vec<_> = grid.coords().collect();
        assert_eq!(
            coords,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]
        );
    }
}
