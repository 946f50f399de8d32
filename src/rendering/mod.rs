use std::collections::HashSet;

use macroquad::prelude::*;

use crate::domain::{Coord, Grid, GridObserver, Wall};
use crate::ui::{Action, Button, Dropdown, GridLayout, PANEL_WIDTH, panel_x};

/// GridView keeps what the engines have reported and draws it every frame.
#[derive(Debug, Default)]
pub struct GridView {
    rows: usize,
    cols: usize,
    ages: Grid<u32>,
    letters: Grid<char>,
    lit: HashSet<Coord>,
    walls: HashSet<Wall>,
    max_age: u32,
}

impl GridView {
    pub fn new(max_age: u32) -> Self {
        Self {
            max_age: max_age.max(1),
            ..Self::default()
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn walls(&self) -> &HashSet<Wall> {
        &self.walls
    }

    pub fn is_lit(&self, at: Coord) -> bool {
        self.lit.contains(&at)
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout::for_screen(self.rows, self.cols)
    }

    /// Live cells shade from bright green (newborn) to deep blue (max age)
    pub fn draw_ages(&self) {
        let layout = self.layout();
        for (at, &age) in self.ages.iter_cells().filter(|(_, age)| **age > 0) {
            let (x, y) = layout.cell_origin(at);
            let t = age.min(self.max_age) as f32 / self.max_age as f32;
            let color = Color::new(0.0, 1.0 - 0.6 * t, 0.4 + 0.6 * t, 1.0);
            draw_rectangle(x, y, layout.cell, layout.cell, color);
        }
        self.draw_outline(&layout);
    }

    /// Standing walls as lines on the shared cell edge
    pub fn draw_walls(&self) {
        let layout = self.layout();
        let thickness = (layout.cell / 8.0).max(1.0);
        let color = Color::from_rgba(220, 220, 220, 255);

        for wall in &self.walls {
            let (_, two) = wall.cells();
            let (x, y) = layout.cell_origin(two);
            if wall.is_horizontal() {
                draw_line(x, y, x + layout.cell, y, thickness, color);
            } else {
                // Cells side by side: the wall is the left edge of the second.
                draw_line(x, y, x, y + layout.cell, thickness, color);
            }
        }
        self.draw_outline(&layout);
    }

    /// Letter tiles, highlighted cells drawn in gold
    pub fn draw_letters(&self) {
        let layout = self.layout();
        let pad = layout.cell * 0.06;
        let font_size = layout.cell * 0.6;

        for (at, &letter) in self.letters.iter_cells() {
            let (x, y) = layout.cell_origin(at);
            let tile = if self.lit.contains(&at) {
                Color::from_rgba(255, 200, 60, 255)
            } else {
                Color::from_rgba(235, 225, 200, 255)
            };
            draw_rectangle(x + pad, y + pad, layout.cell - 2.0 * pad, layout.cell - 2.0 * pad, tile);

            let text = letter.to_string();
            let size = measure_text(&text, None, font_size as u16, 1.0);
            draw_text(
                &text,
                x + (layout.cell - size.width) / 2.0,
                y + (layout.cell + size.height) / 2.0,
                font_size,
                BLACK,
            );
        }
    }

    fn draw_outline(&self, layout: &GridLayout) {
        draw_rectangle_lines(
            layout.origin_x,
            layout.origin_y,
            self.cols as f32 * layout.cell,
            self.rows as f32 * layout.cell,
            2.0,
            Color::from_rgba(90, 90, 90, 255),
        );
    }
}

impl GridObserver for GridView {
    fn set_dimensions(&mut self, rows: usize, cols: usize) {
        if (rows, cols) != (self.rows, self.cols) {
            self.rows = rows;
            self.cols = cols;
            self.ages = Grid::new(rows, cols);
            self.letters = Grid::filled(rows, cols, ' ');
        }
        self.lit.clear();
        self.walls.clear();
    }

    fn highlight_cell(&mut self, at: Coord, on: bool) {
        if on {
            self.lit.insert(at);
        } else {
            self.lit.remove(&at);
        }
    }

    fn label_cell(&mut self, at: Coord, letter: char) {
        if let Ok(slot) = self.letters.get_mut(at) {
            *slot = letter;
        }
    }

    fn draw_age(&mut self, at: Coord, age: u32) {
        if let Ok(slot) = self.ages.get_mut(at) {
            *slot = age;
        }
    }

    fn draw_wall(&mut self, wall: &Wall) {
        self.walls.insert(*wall);
    }

    fn remove_wall(&mut self, wall: &Wall) {
        self.walls.remove(wall);
    }
}

/// Draw the control panel: background, buttons, text lines, then dropdowns
/// on top with the open one last.
pub fn draw_controls(
    buttons: &[Button<Action>],
    dropdowns: &[&Dropdown],
    lines: &[(String, Color)],
    lines_top: f32,
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    lines.iter().enumerate().for_each(|(i, (text, color))| {
        draw_text(text, px + 4.0, lines_top + i as f32 * 18.0, 16.0, *color);
    });

    dropdowns
        .iter()
        .filter(|dd| !dd.is_open())
        .chain(dropdowns.iter().filter(|dd| dd.is_open()))
        .for_each(|dd| dd.draw(mouse_pos));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_tracks_walls() {
        let mut view = GridView::new(9);
        let wall = Wall::new(Coord::new(0, 1), Coord::new(0, 0));
        view.set_dimensions(2, 2);
        view.draw_wall(&wall);
        view.draw_wall(&Wall::new(Coord::new(0, 0), Coord::new(1, 0)));
        view.remove_wall(&Wall::new(Coord::new(0, 0), Coord::new(0, 1)));
        assert_eq!(view.walls().len(), 1);

        view.set_dimensions(2, 2);
        assert!(view.walls().is_empty());
    }

    #[test]
    fn test_view_ignores_out_of_range_cells() {
        let mut view = GridView::new(9);
        view.set_dimensions(2, 3);
        view.draw_age(Coord::new(5, 5), 3);
        view.label_cell(Coord::new(1, 2), 'Q');
        view.highlight_cell(Coord::new(1, 2), true);

        assert_eq!(view.dimensions(), (2, 3));
        assert_eq!(view.letters[Coord::new(1, 2)], 'Q');
        assert!(view.is_lit(Coord::new(1, 2)));
    }
}
