//! Backtracking word search over a letter grid.
//!
//! A word is spelled by a simple path: each cell 8-adjacent to the next and
//! no cell used twice. Traversal keeps an explicit stack of frames instead
//! of recursing, so board size never grows the call stack.

use std::collections::{BTreeSet, HashSet};

use super::coord::{Coord, OFFSETS_8};
use super::dictionary::Dictionary;
use super::error::{Error, Result};
use super::grid::Grid;

/// Shortest word that counts, in letters
pub const DEFAULT_MIN_WORD_LEN: usize = 4;

/// A dictionary word located on the board, with one path that spells it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Coord>,
}

/// What the walker should do after entering a cell.
enum Step {
    Descend,
    Prune,
    Stop,
}

/// Searches one letter board for words.
pub struct BoardSearch<'a> {
    board: &'a Grid<char>,
    min_len: usize,
}

impl<'a> BoardSearch<'a> {
    pub fn new(board: &'a Grid<char>, min_len: usize) -> Self {
        Self { board, min_len }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Find one path spelling `target`, trying start cells in row-major order.
    ///
    /// Only positional matching against the target is used to prune; the
    /// dictionary is not consulted. Returns `Ok(None)` when the word is not
    /// on the board.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] when `target` is empty or shorter than the
    /// minimum word length.
    pub fn find_path(&self, target: &str) -> Result<Option<Vec<Coord>>> {
        let target = target.trim().to_uppercase();
        let len = target.chars().count();
        if target.is_empty() || len < self.min_len {
            return Err(Error::InvalidInput(format!(
                "\"{}\" is shorter than {} letters",
                target, self.min_len
            )));
        }

        let mut found = None;
        for start in self.board.coords() {
            let stopped = self.walk_from(start, |prefix, path| {
                if !target.starts_with(prefix) {
                    Step::Prune
                } else if prefix.len() == target.len() {
                    found = Some(path.to_vec());
                    Step::Stop
                } else {
                    Step::Descend
                }
            });
            if stopped {
                break;
            }
        }

        Ok(found)
    }

    /// Every dictionary word of at least the minimum length spellable on
    /// the board, each reported once.
    pub fn find_all_words<D: Dictionary>(&self, dictionary: &D) -> BTreeSet<String> {
        self.find_all_words_excluding(dictionary, &HashSet::new())
            .into_iter()
            .map(|found| found.word)
            .collect()
    }

    /// Exhaustive enumeration skipping words already claimed, in discovery
    /// order. Each word carries the first path that spelled it.
    pub fn find_all_words_excluding<D: Dictionary>(
        &self,
        dictionary: &D,
        already_found: &HashSet<String>,
    ) -> Vec<FoundWord> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut words = Vec::new();

        for start in self.board.coords() {
            self.walk_from(start, |prefix, path| {
                if path.len() >= self.min_len
                    && !already_found.contains(prefix)
                    && !seen.contains(prefix)
                    && dictionary.contains(prefix)
                {
                    seen.insert(prefix.to_owned());
                    words.push(FoundWord {
                        word: prefix.to_owned(),
                        path: path.to_vec(),
                    });
                }
                if dictionary.contains_prefix(prefix) {
                    Step::Descend
                } else {
                    Step::Prune
                }
            });
        }

        tracing::debug!(
            "Enumerated {} words on a {}x{} board",
            words.len(),
            self.board.num_rows(),
            self.board.num_cols()
        );

        words
    }

    /// Depth-first walk over simple paths from `start`.
    ///
    /// `visit` sees the accumulated prefix and path after each cell is
    /// entered. Returns true if `visit` asked to stop.
    fn walk_from(&self, start: Coord, mut visit: impl FnMut(&str, &[Coord]) -> Step) -> bool {
        let board = self.board;
        let mut visited = vec![false; board.len()];
        let mut path: Vec<Coord> = Vec::new();
        // Per frame: index into OFFSETS_8 of the next neighbor to try.
        let mut next_offset: Vec<usize> = Vec::new();
        let mut prefix = String::new();

        let backtrack = |visited: &mut Vec<bool>,
                         path: &mut Vec<Coord>,
                         next_offset: &mut Vec<usize>,
                         prefix: &mut String| {
            if let Some(at) = path.pop() {
                visited[board.index_of(at)] = false;
                next_offset.pop();
                prefix.pop();
            }
        };

        let mut entering = Some(start);
        loop {
            if let Some(at) = entering.take() {
                visited[board.index_of(at)] = true;
                path.push(at);
                next_offset.push(0);
                prefix.push(board[at]);

                match visit(&prefix, &path) {
                    Step::Stop => return true,
                    Step::Prune => backtrack(&mut visited, &mut path, &mut next_offset, &mut prefix),
                    Step::Descend => {}
                }
            }

            let (Some(&at), Some(cursor)) = (path.last(), next_offset.last_mut()) else {
                return false;
            };

            while *cursor < OFFSETS_8.len() && entering.is_none() {
                let (dr, dc) = OFFSETS_8[*cursor];
                *cursor += 1;
                entering = board
                    .shifted(at, dr, dc)
                    .filter(|next| !visited[board.index_of(*next)]);
            }

            if entering.is_none() {
                backtrack(&mut visited, &mut path, &mut next_offset, &mut prefix);
            }
        }
    }
}

/// Check that positions form a legal simple path on the grid
pub fn validate_path<T>(grid: &Grid<T>, path: &[Coord]) -> bool {
    if path.is_empty() {
        return false;
    }

    if !path.iter().all(|&at| grid.in_bounds(at)) {
        return false;
    }

    if !path.windows(2).all(|pair| pair[0].is_adjacent8(pair[1])) {
        return false;
    }

    let unique: HashSet<_> = path.iter().collect();
    unique.len() == path.len()
}

/// Extract word from grid positions
pub fn spell(grid: &Grid<char>, path: &[Coord]) -> String {
    path.iter().map(|&at| grid[at]).collect()
}
