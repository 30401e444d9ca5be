//! Keypad model and per-frame input.

pub mod glyph;
pub mod input;
pub mod keypad;

pub use glyph::{Glyph, KEYPAD_GLYPHS, Operator};
pub use input::InputSnapshot;
pub use keypad::{
    DEFAULT_NAVIGATION_COOLDOWN, KEYPAD_COLUMNS, KEYPAD_ROWS, KEYPAD_SIZE, Keypad, KeypadLayout,
};
