use macroquad::prelude::*;

const ROW_HEIGHT: f32 = 28.0;
const FONT_SIZE: f32 = 16.0;

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new<S: Into<String>>(label: impl Into<String>, items: impl IntoIterator<Item = S>) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: super::PANEL_WIDTH,
            items: items.into_iter().map(Into::into).collect(),
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn row_rect(&self, row: usize) -> (f32, f32, f32, f32) {
        (self.x, self.y + row as f32 * ROW_HEIGHT, self.width, ROW_HEIGHT)
    }

    /// Handle a click, returning true if the selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }

        if super::contains(self.row_rect(0), mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }
        if !self.is_open {
            return false;
        }

        self.is_open = false;
        let picked = (0..self.items.len()).find(|&i| super::contains(self.row_rect(i + 1), mouse_pos));
        match picked {
            Some(i) if i != self.selected => {
                self.selected = i;
                true
            }
            _ => false,
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let (x, y, w, h) = self.row_rect(0);
        let color = if super::contains((x, y, w, h), mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);
        draw_text(&fit_text(&self.items[self.selected], w - 30.0), x + 5.0, y + 20.0, FONT_SIZE, WHITE);
        draw_text("v", x + w - 16.0, y + 19.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        for (i, item) in self.items.iter().enumerate() {
            let (x, y, w, h) = self.row_rect(i + 1);
            let color = if super::contains((x, y, w, h), mouse_pos) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(x, y, w, h, color);
            draw_rectangle_lines(x, y, w, h, 1.0, Color::from_rgba(80, 80, 80, 255));
            draw_text(&fit_text(item, w - 10.0), x + 5.0, y + 20.0, FONT_SIZE, WHITE);
        }
    }
}

/// Truncate with an ellipsis until the text fits `max_width`
fn fit_text(text: &str, max_width: f32) -> String {
    let width = |s: &str| measure_text(s, None, FONT_SIZE as u16, 1.0).width;
    if width(text) <= max_width {
        return text.to_string();
    }

    let mut truncated = text.to_string();
    while !truncated.is_empty() && width(&format!("{}...", truncated)) > max_width {
        truncated.pop();
    }
    format!("{}...", truncated)
}
