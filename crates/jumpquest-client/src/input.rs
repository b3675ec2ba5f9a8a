use jumpquest_core::FrameInput;
use macroquad::input::{KeyCode, is_key_down, is_key_pressed, is_quit_requested};

/// Keys mapped to each game action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec![KeyCode::Left],
            right: vec![KeyCode::Right],
            jump: vec![KeyCode::Space],
        }
    }
}

/// Raw key state for one frame, before it is mapped to game actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySample {
    pub left_down: bool,
    pub right_down: bool,
    pub jump_pressed: bool,
    pub quit_requested: bool,
}

impl KeySample {
    /// Read the window's key state. Call once per frame.
    pub fn poll(bindings: &KeyBindings) -> Self {
        Self {
            left_down: bindings.left.iter().any(|&k| is_key_down(k)),
            right_down: bindings.right.iter().any(|&k| is_key_down(k)),
            jump_pressed: bindings.jump.iter().any(|&k| is_key_pressed(k)),
            quit_requested: is_quit_requested(),
        }
    }
}

impl From<KeySample> for FrameInput {
    fn from(sample: KeySample) -> Self {
        Self {
            left: sample.left_down,
            right: sample.right_down,
            jump: sample.jump_pressed,
            quit: sample.quit_requested,
        }
    }
}
