mod cell;
mod coord;
mod error;
mod grid;
mod rules;
mod observer;
pub mod boggle;
pub mod components;
pub mod dictionary;
pub mod life;
pub mod maze;
pub mod patterns;
pub mod random;
pub mod word_search;

pub use cell::Cell;
pub use coord::{Coord, OFFSETS_8};
pub use error::{Error, Result};
pub use grid::Grid;
pub use rules::{Rule, ConwayRule, HighLifeRule, SeedsRule, DayAndNightRule, all_rules, default_rule};
pub use observer::{GridObserver, NullObserver};
pub use boggle::{CubeSet, word_score};
pub use components::{Components, DisjointSet, MergeStrategy, MergedCells};
pub use dictionary::{Dictionary, WordList};
pub use life::{Generation, LifeStepper};
pub use maze::{Carving, Maze, MazeBuilder, Wall};
pub use patterns::{Pattern, presets};
pub use random::RandomSource;
pub use word_search::{BoardSearch, FoundWord};
