use std::collections::HashSet;

use crate::domain::word_search::FoundWord;
use crate::domain::{BoardSearch, Coord, Dictionary, Grid, GridObserver, word_score};

/// Verdict on one player guess, checked in this order
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    RoundOver,
    TooShort,
    NotAWord,
    AlreadyGuessed,
    NotOnBoard,
    Accepted { path: Vec<Coord>, points: usize },
}

impl GuessOutcome {
    pub fn message(&self) -> String {
        match self {
            GuessOutcome::RoundOver => "Round is over".to_string(),
            GuessOutcome::TooShort => "Too short".to_string(),
            GuessOutcome::NotAWord => "Not in the dictionary".to_string(),
            GuessOutcome::AlreadyGuessed => "Already found".to_string(),
            GuessOutcome::NotOnBoard => "Not on the board".to_string(),
            GuessOutcome::Accepted { points, .. } => format!("+{} points", points),
        }
    }
}

/// WordRound holds one game of Boggle: the human guesses first, then the
/// computer takes every word left on the board.
pub struct WordRound<D: Dictionary> {
    board: Grid<char>,
    dictionary: D,
    min_len: usize,
    player_words: Vec<String>,
    pub player_score: usize,
    computer_words: Vec<FoundWord>,
    pub computer_score: usize,
    computer_done: bool,
    highlighted: Vec<Coord>,
}

impl<D: Dictionary> WordRound<D> {
    /// Start a round and label the board on the display
    pub fn new(board: Grid<char>, dictionary: D, min_len: usize, observer: &mut dyn GridObserver) -> Self {
        let (rows, cols) = board.dimensions();
        observer.set_dimensions(rows, cols);
        for (at, &letter) in board.iter_cells() {
            observer.label_cell(at, letter);
        }

        Self {
            board,
            dictionary,
            min_len: min_len.max(1),
            player_words: Vec::new(),
            player_score: 0,
            computer_words: Vec::new(),
            computer_score: 0,
            computer_done: false,
            highlighted: Vec::new(),
        }
    }

    pub fn board(&self) -> &Grid<char> {
        &self.board
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn player_words(&self) -> &[String] {
        &self.player_words
    }

    pub fn computer_words(&self) -> &[FoundWord] {
        &self.computer_words
    }

    /// The human's turn is over once the computer has played
    pub fn is_over(&self) -> bool {
        self.computer_done
    }

    /// Check a player guess, record it if valid and light up its path.
    pub fn guess(&mut self, word: &str, observer: &mut dyn GridObserver) -> GuessOutcome {
        let word = word.trim().to_uppercase();
        self.clear_highlight(observer);

        if self.computer_done {
            return GuessOutcome::RoundOver;
        }
        if word.chars().count() < self.min_len {
            return GuessOutcome::TooShort;
        }
        if !self.dictionary.contains(&word) {
            return GuessOutcome::NotAWord;
        }
        if self.player_words.contains(&word) {
            return GuessOutcome::AlreadyGuessed;
        }

        let search = BoardSearch::new(&self.board, self.min_len);
        let Ok(Some(path)) = search.find_path(&word) else {
            return GuessOutcome::NotOnBoard;
        };

        let points = word_score(&word, self.min_len);
        self.player_score += points;
        self.player_words.push(word);

        for &at in &path {
            observer.highlight_cell(at, true);
        }
        self.highlighted = path.clone();

        GuessOutcome::Accepted { path, points }
    }

    /// Let the computer claim every remaining word; repeated calls return
    /// the same list.
    pub fn computer_turn(&mut self, observer: &mut dyn GridObserver) -> &[FoundWord] {
        if !self.computer_done {
            self.clear_highlight(observer);

            let claimed: HashSet<String> = self.player_words.iter().cloned().collect();
            let search = BoardSearch::new(&self.board, self.min_len);
            self.computer_words = search.find_all_words_excluding(&self.dictionary, &claimed);
            self.computer_score = self
                .computer_words
                .iter()
                .map(|found| word_score(&found.word, self.min_len))
                .sum();
            self.computer_done = true;

            tracing::info!(
                player = self.player_score,
                computer = self.computer_score,
                words = self.computer_words.len(),
                "Word round finished"
            );
        }
        &self.computer_words
    }

    fn clear_highlight(&mut self, observer: &mut dyn GridObserver) {
        for at in self.highlighted.drain(..) {
            observer.highlight_cell(at, false);
        }
    }
}
