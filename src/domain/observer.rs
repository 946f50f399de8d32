use super::coord::Coord;
use super::maze::Wall;

/// Receives display notifications from the engines.
///
/// Purely observational: nothing flows back into engine state. Every
/// method defaults to doing nothing so a display implements only what it
/// draws.
pub trait GridObserver {
    /// Board size, sent once before anything else
    fn set_dimensions(&mut self, _rows: usize, _cols: usize) {}

    fn highlight_cell(&mut self, _at: Coord, _on: bool) {}

    fn label_cell(&mut self, _at: Coord, _letter: char) {}

    fn draw_age(&mut self, _at: Coord, _age: u32) {}

    fn draw_wall(&mut self, _wall: &Wall) {}

    fn remove_wall(&mut self, _wall: &Wall) {}
}

/// Observer that discards every notification
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GridObserver for NullObserver {}
