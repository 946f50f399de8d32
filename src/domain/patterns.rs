use std::fs;
use std::path::Path;

use super::coord::Coord;
use super::error::{Error, Result};
use super::grid::Grid;
use super::Cell;

/// Marker for live cells in the text format
const LIVE_MARK: char = 'X';
/// Lines starting with this are comments
const COMMENT_MARK: char = '#';
/// Largest board a file may declare
pub const MAX_BOARD_CELLS: usize = 1 << 20;

/// Represents a pattern that can be placed on a Life board
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Coord>, // Relative positions of live cells
}

impl Pattern {
    /// Create a new pattern from live (row, col) offsets
    pub fn new(name: &'static str, description: &'static str, cells: &[(usize, usize)]) -> Self {
        let cells: Vec<Coord> = cells.iter().copied().map(Coord::from).collect();
        let rows = cells.iter().map(|c| c.row).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|c| c.col).max().unwrap_or(0) + 1;
        Self { name, description, rows, cols, cells }
    }

    /// Place pattern with its top-left corner at `origin` as newborn cells.
    /// Cells falling outside the board are dropped.
    pub fn place_on(&self, board: &mut Grid<Cell>, origin: Coord) {
        for cell in &self.cells {
            let at = Coord::new(origin.row + cell.row, origin.col + cell.col);
            if board.in_bounds(at) {
                board[at] = Cell::NEWBORN;
            }
        }
    }

    /// A board just large enough for the pattern plus `margin` dead cells
    /// on every side
    pub fn to_board(&self, margin: usize) -> Grid<Cell> {
        let mut board = Grid::new(self.rows + 2 * margin, self.cols + 2 * margin);
        self.place_on(&mut board, Coord::new(margin, margin));
        board
    }
}

/// Parse an initial Life configuration.
///
/// Comment lines start with `#`. Then come the row count and the column
/// count on their own lines, then one line per row where `X` marks a live
/// cell. Rows shorter than the column count are padded with dead cells.
pub fn parse_board(text: &str) -> Result<Grid<Cell>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end()))
        .skip_while(|(_, line)| line.is_empty() || line.starts_with(COMMENT_MARK));

    let (_, rows) = parse_dimension(lines.next(), "row count")?;
    let (cols_line, cols) = parse_dimension(lines.next(), "column count")?;
    if !rows.checked_mul(cols).is_some_and(|cells| cells <= MAX_BOARD_CELLS) {
        return Err(Error::Parse {
            line: cols_line,
            reason: format!("{}x{} board exceeds {} cells", rows, cols, MAX_BOARD_CELLS),
        });
    }

    let mut board = Grid::new(rows, cols);
    for row in 0..rows {
        let Some((_, line)) = lines.next() else {
            return Err(Error::Parse {
                line: text.lines().count() + 1,
                reason: format!("expected {} rows, found {}", rows, row),
            });
        };

        for (col, mark) in line.chars().take(cols).enumerate() {
            if mark == LIVE_MARK {
                board[Coord::new(row, col)] = Cell::NEWBORN;
            }
        }
    }

    Ok(board)
}

/// Load an initial Life configuration from a file
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Grid<Cell>> {
    let text = fs::read_to_string(path.as_ref())?;
    let board = parse_board(&text)?;

    tracing::info!(
        "Loaded {}x{} board from {}",
        board.num_rows(),
        board.num_cols(),
        path.as_ref().display()
    );

    Ok(board)
}

/// Header value with the line it was read from
fn parse_dimension(line: Option<(usize, &str)>, what: &str) -> Result<(usize, usize)> {
    let (number, text) = line.ok_or_else(|| Error::Parse {
        line: 0,
        reason: format!("missing {}", what),
    })?;

    match text.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok((number, n)),
        _ => Err(Error::Parse {
            line: number,
            reason: format!("{} must be a positive integer, got {:?}", what, text),
        }),
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            &[
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", &[(1, 0), (1, 1), (1, 2)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            &[
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            &[
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            &[
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            &[
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", &[(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), blinker(), toad(), beacon(), lwss(), r_pentomino(), block()]
    }
}
