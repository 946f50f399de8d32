use macroquad::prelude::*;

/// Button UI component that reports the action it was built with
#[derive(Clone)]
pub struct Button<A> {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    action: A,
    color: Color,
    hover_color: Color,
}

impl<A: Copy> Button<A> {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>, action: A) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            action,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    pub fn action(&self) -> A {
        self.action
    }

    /// Check if mouse is hovering over button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        super::contains((self.x, self.y, self.width, self.height), mouse_pos)
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            self.hover_color
        } else {
            self.color
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 18, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            18.0,
            WHITE,
        );
    }

    /// The button's action if it was clicked this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<A> {
        (self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)).then_some(self.action)
    }
}
