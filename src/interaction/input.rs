use serde::{Deserialize, Serialize};

/// Per-frame input state handed to the controller.
///
/// `confirm` and `back` are edge triggers: true only on the frame the button
/// went down. `pointer` is `None` while the pointer is off screen.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    #[serde(default)]
    pub pointer: Option<(f64, f64)>,
    #[serde(default)]
    pub confirm: bool,
    #[serde(default)]
    pub back: bool,
    #[serde(default)]
    pub dpad_x: i8,
    #[serde(default)]
    pub dpad_y: i8,
}

impl InputSnapshot {
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pointer(mut self, x: f64, y: f64) -> Self {
        self.pointer = Some((x, y));
        self
    }

    #[must_use]
    pub fn with_confirm(mut self) -> Self {
        self.confirm = true;
        self
    }

    #[must_use]
    pub fn with_back(mut self) -> Self {
        self.back = true;
        self
    }

    #[must_use]
    pub fn with_dpad(mut self, dx: i8, dy: i8) -> Self {
        self.dpad_x = dx;
        self.dpad_y = dy;
        self
    }
}
