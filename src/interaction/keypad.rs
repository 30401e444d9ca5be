use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::types::Rect;
use crate::error::{CalcError, CalcResult};
use crate::interaction::glyph::{Glyph, KEYPAD_GLYPHS};

pub const KEYPAD_COLUMNS: usize = 6;
pub const KEYPAD_ROWS: usize = 5;
pub const KEYPAD_SIZE: usize = KEYPAD_COLUMNS * KEYPAD_ROWS;
pub const DEFAULT_NAVIGATION_COOLDOWN: u32 = 10;

/// Screen placement of the button grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypadLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    pub button_width: f64,
    pub button_height: f64,
    pub spacing: f64,
}

impl Default for KeypadLayout {
    fn default() -> Self {
        Self {
            origin_x: 60.0,
            origin_y: 280.0,
            button_width: 80.0,
            button_height: 40.0,
            spacing: 5.0,
        }
    }
}

impl KeypadLayout {
    pub fn validate(self) -> CalcResult<Self> {
        if !self.origin_x.is_finite() || !self.origin_y.is_finite() {
            return Err(CalcError::InvalidConfig(
                "keypad origin must be finite".to_owned(),
            ));
        }
        if !self.button_width.is_finite()
            || !self.button_height.is_finite()
            || self.button_width <= 0.0
            || self.button_height <= 0.0
        {
            return Err(CalcError::InvalidConfig(
                "keypad button size must be finite and > 0".to_owned(),
            ));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(CalcError::InvalidConfig(
                "keypad spacing must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Rectangle of button `index`; indices past the grid clamp to the last
    /// button.
    #[must_use]
    pub fn button_rect(self, index: usize) -> Rect {
        let index = index.min(KEYPAD_SIZE - 1);
        let column = (index % KEYPAD_COLUMNS) as f64;
        let row = (index / KEYPAD_COLUMNS) as f64;
        Rect::new(
            self.origin_x + column * (self.button_width + self.spacing),
            self.origin_y + row * (self.button_height + self.spacing),
            self.button_width,
            self.button_height,
        )
    }
}

/// Selection state of the 6x5 button grid.
///
/// Directional moves are rate limited: after a move the grid ignores further
/// deltas until `cooldown_frames` calls to [`tick`](Self::tick) have passed.
/// Pointer hover is not rate limited.
#[derive(Debug, Clone, PartialEq)]
pub struct Keypad {
    layout: KeypadLayout,
    selected: usize,
    cooldown: u32,
    cooldown_frames: u32,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new(KeypadLayout::default(), DEFAULT_NAVIGATION_COOLDOWN)
    }
}

impl Keypad {
    #[must_use]
    pub fn new(layout: KeypadLayout, cooldown_frames: u32) -> Self {
        Self {
            layout,
            selected: 0,
            cooldown: 0,
            cooldown_frames,
        }
    }

    #[must_use]
    pub fn layout(&self) -> KeypadLayout {
        self.layout
    }

    #[must_use]
    pub fn glyphs(&self) -> &'static [Glyph; KEYPAD_SIZE] {
        &KEYPAD_GLYPHS
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_glyph(&self) -> Glyph {
        KEYPAD_GLYPHS[self.selected]
    }

    #[must_use]
    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    #[must_use]
    pub fn button_rect(&self, index: usize) -> Rect {
        self.layout.button_rect(index)
    }

    /// Advances the cooldown by one frame.
    pub fn tick(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Moves the selection by one cell per non-zero axis, wrapping at the
    /// grid edges. Returns `false` when the move was ignored.
    pub fn navigate(&mut self, dx: i8, dy: i8) -> bool {
        if self.cooldown > 0 || (dx == 0 && dy == 0) {
            return false;
        }

        let column = wrap_step(self.selected % KEYPAD_COLUMNS, dx, KEYPAD_COLUMNS);
        let row = wrap_step(self.selected / KEYPAD_COLUMNS, dy, KEYPAD_ROWS);
        self.selected = (row * KEYPAD_COLUMNS + column).min(KEYPAD_SIZE - 1);
        self.cooldown = self.cooldown_frames;
        trace!(dx, dy, selected = self.selected, "keypad moved");
        true
    }

    /// Selects the first button (row-major) whose rectangle contains the
    /// point, edges included.
    pub fn hover(&mut self, x: f64, y: f64) -> Option<usize> {
        let hit = (0..KEYPAD_SIZE).find(|&index| self.layout.button_rect(index).contains(x, y))?;
        self.selected = hit;
        Some(hit)
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(KEYPAD_SIZE - 1);
    }
}

fn wrap_step(position: usize, delta: i8, len: usize) -> usize {
    let step = i64::from(delta.signum());
    // `len` is a small grid dimension.
    (position as i64 + step).rem_euclid(len as i64) as usize
}
