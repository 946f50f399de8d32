//! Letter boards rolled from Boggle cube sets.

use super::coord::Coord;
use super::error::{Error, Result};
use super::grid::Grid;
use super::random::RandomSource;

/// Sixteen dice of the classic 4x4 game
pub const STANDARD_CUBES: [&str; 16] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS",
    "AOOTTW", "CIMOTU", "DEILRX", "DELRVY",
    "DISTTY", "EEGHNW", "EEINSU", "EHRTVW",
    "EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ",
];

/// Twenty-five dice of the 5x5 Big Boggle game
pub const BIG_CUBES: [&str; 25] = [
    "AAAFRS", "AAEEEE", "AAFIRS", "ADENNN", "AEEEEM",
    "AEEGMU", "AEGMNN", "AFIRSY", "BJKQXZ", "CCNSTW",
    "CEIILT", "CEILPT", "CEIPST", "DDLNOR", "DDHNOT",
    "DHHLOR", "DHLNOR", "EIIITT", "EMOTTT", "ENSSSU",
    "FIPRSY", "GORRVW", "HIPRRY", "NOOTUW", "OOOTTU",
];

/// An immutable set of dice for a square board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeSet {
    dim: usize,
    cubes: &'static [&'static str],
}

impl CubeSet {
    pub const STANDARD: CubeSet = CubeSet { dim: 4, cubes: &STANDARD_CUBES };
    pub const BIG: CubeSet = CubeSet { dim: 5, cubes: &BIG_CUBES };

    pub const fn for_board(big: bool) -> Self {
        if big { Self::BIG } else { Self::STANDARD }
    }

    /// Board side length
    pub const fn dim(&self) -> usize {
        self.dim
    }

    pub const fn cubes(&self) -> &'static [&'static str] {
        self.cubes
    }

    /// Shuffle the dice onto the board and roll each one.
    ///
    /// Position `i` swaps with a uniform pick from `i..n`, then every die
    /// shows a uniform face.
    pub fn roll<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Grid<char> {
        let mut cubes: Vec<&str> = self.cubes.to_vec();
        let n = cubes.len();
        for i in 0..n {
            let j = rng.uniform_int(i, n - 1);
            cubes.swap(i, j);
        }

        let letters: Vec<char> = cubes
            .iter()
            .map(|cube| {
                let faces: Vec<char> = cube.chars().collect();
                faces[rng.uniform_int(0, faces.len() - 1)]
            })
            .collect();

        fill_board(self.dim, &letters)
    }

    /// Board from a forced configuration: exactly `dim * dim` letters,
    /// row by row from the top left.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] for the wrong length or a non-letter.
    pub fn from_letters(&self, letters: &str) -> Result<Grid<char>> {
        let letters: Vec<char> = letters.trim().chars().collect();
        let expected = self.dim * self.dim;

        if letters.len() != expected {
            return Err(Error::InvalidInput(format!(
                "board needs {} letters, got {}",
                expected,
                letters.len()
            )));
        }
        if let Some(bad) = letters.iter().find(|c| !c.is_ascii_alphabetic()) {
            return Err(Error::InvalidInput(format!("{:?} is not a letter", bad)));
        }

        let upper: Vec<char> = letters.iter().map(char::to_ascii_uppercase).collect();
        Ok(fill_board(self.dim, &upper))
    }
}

fn fill_board(dim: usize, letters: &[char]) -> Grid<char> {
    let mut board = Grid::filled(dim, dim, ' ');
    for (idx, &letter) in letters.iter().enumerate().take(dim * dim) {
        board[Coord::new(idx / dim, idx % dim)] = letter;
    }
    board
}

/// Points for a found word: one for the minimum length, one more per
/// extra letter
pub fn word_score(word: &str, min_len: usize) -> usize {
    (word.chars().count() + 1).saturating_sub(min_len)
}
