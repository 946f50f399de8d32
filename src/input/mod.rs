use macroquad::prelude::*;

use crate::ui::{Action, Button, Mode};

/// Longest word the typing buffer accepts
const MAX_TYPED: usize = 25;

fn key_bindings(mode: Mode) -> &'static [(KeyCode, Action)] {
    match mode {
        Mode::Life => &[
            (KeyCode::Space, Action::ToggleRunning),
            (KeyCode::N, Action::Step),
            (KeyCode::R, Action::Reset),
            (KeyCode::G, Action::Randomize),
            (KeyCode::Up, Action::Faster),
            (KeyCode::Down, Action::Slower),
        ],
        Mode::Maze => &[
            (KeyCode::Space, Action::ToggleRunning),
            (KeyCode::Enter, Action::FinishMaze),
            (KeyCode::N, Action::NewMaze),
            (KeyCode::Up, Action::Faster),
            (KeyCode::Down, Action::Slower),
        ],
        // Letters go to the typing buffer, so only non-letter keys bind here.
        Mode::Boggle => &[
            (KeyCode::Enter, Action::Submit),
            (KeyCode::Escape, Action::EndTurn),
            (KeyCode::F2, Action::NewBoard),
        ],
    }
}

/// Actions requested by keys pressed this frame
pub fn keyboard_actions(mode: Mode) -> Vec<Action> {
    key_bindings(mode)
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, action)| action)
        .collect()
}

/// Actions requested by buttons clicked this frame
pub fn button_actions(buttons: &[Button<Action>], mouse_pos: (f32, f32)) -> Vec<Action> {
    buttons.iter().filter_map(|btn| btn.clicked(mouse_pos)).collect()
}

/// Feed typed letters into `buffer`; Backspace removes the last one.
pub fn read_typed(buffer: &mut String) {
    while let Some(c) = get_char_pressed() {
        if c.is_ascii_alphabetic() && buffer.len() < MAX_TYPED {
            buffer.push(c.to_ascii_uppercase());
        }
    }
    if is_key_pressed(KeyCode::Backspace) {
        buffer.pop();
    }
}
