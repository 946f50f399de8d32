// Domain layer - grid engines: word search, Life, mazes
pub mod domain;

// Application layer - sessions driving the engines over time
pub mod application;

// Environment configuration
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{BoardSearch, Cell, Coord, Error, Grid, LifeStepper, MazeBuilder, Result, WordList};
pub use application::{LifeSession, MazeSession, WordRound};
pub use config::Settings;
