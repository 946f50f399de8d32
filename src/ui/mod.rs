mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::{screen_height, screen_width};

use crate::domain::Coord;

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 34.0;
pub const MARGIN: f32 = 16.0;

/// Which engine the window is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Life,
    Maze,
    Boggle,
}

impl Mode {
    pub fn all() -> [Mode; 3] {
        [Mode::Life, Mode::Maze, Mode::Boggle]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Life => "Life",
            Mode::Maze => "Maze",
            Mode::Boggle => "Boggle",
        }
    }
}

/// Everything a button or key can ask the application to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleRunning,
    Step,
    Reset,
    Randomize,
    Faster,
    Slower,
    NewMaze,
    FinishMaze,
    NewBoard,
    Submit,
    EndTurn,
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Point-in-rectangle test for `(x, y, width, height)`
pub fn contains(rect: (f32, f32, f32, f32), point: (f32, f32)) -> bool {
    let (x, y, w, h) = rect;
    point.0 >= x && point.0 <= x + w && point.1 >= y && point.1 <= y + h
}

/// Where a board sits on screen: square cells, centered in the area left
/// of the panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell: f32,
}

impl GridLayout {
    pub fn fit(rows: usize, cols: usize, area_width: f32, area_height: f32) -> Self {
        let rows = rows.max(1) as f32;
        let cols = cols.max(1) as f32;
        let cell = ((area_width - 2.0 * MARGIN) / cols)
            .min((area_height - 2.0 * MARGIN) / rows)
            .max(1.0);

        Self {
            origin_x: (area_width - cell * cols) / 2.0,
            origin_y: (area_height - cell * rows) / 2.0,
            cell,
        }
    }

    /// Layout for the current window size
    pub fn for_screen(rows: usize, cols: usize) -> Self {
        Self::fit(rows, cols, screen_width() - PANEL_WIDTH, screen_height())
    }

    /// Top-left corner of a cell
    pub fn cell_origin(&self, at: Coord) -> (f32, f32) {
        (
            self.origin_x + at.col as f32 * self.cell,
            self.origin_y + at.row as f32 * self.cell,
        )
    }
}

/// Create the buttons for a mode, stacked from `top`
pub fn create_buttons(mode: Mode, top: f32) -> Vec<Button<Action>> {
    let labels: &[(&str, Action)] = match mode {
        Mode::Life => &[
            ("Play/Pause", Action::ToggleRunning),
            ("Step", Action::Step),
            ("Reset", Action::Reset),
            ("Random", Action::Randomize),
        ],
        Mode::Maze => &[
            ("Pause/Resume", Action::ToggleRunning),
            ("Finish", Action::FinishMaze),
            ("New Maze", Action::NewMaze),
        ],
        Mode::Boggle => &[
            ("Submit", Action::Submit),
            ("End Turn", Action::EndTurn),
            ("New Board", Action::NewBoard),
        ],
    };

    let px = panel_x();
    labels
        .iter()
        .enumerate()
        .map(|(i, &(text, action))| {
            let y = top + i as f32 * (BUTTON_HEIGHT + 8.0);
            Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, text, action)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fits_limiting_side() {
        let layout = GridLayout::fit(10, 20, 432.0, 1000.0);
        assert_eq!(layout.cell, 20.0);
        assert_eq!(layout.origin_x, 16.0);
        assert_eq!(layout.origin_y, 400.0);
        assert_eq!(layout.cell_origin(Coord::new(1, 2)), (56.0, 420.0));
    }

    #[test]
    fn test_contains_edges() {
        let rect = (10.0, 10.0, 5.0, 5.0);
        assert!(contains(rect, (10.0, 15.0)));
        assert!(!contains(rect, (9.9, 12.0)));
    }
}
