use serde::{Deserialize, Serialize};

use crate::interaction::Glyph;

/// Host hook used to leave the calculator scene.
pub trait SceneNavigator {
    fn request_parent_scene(&mut self);
}

impl<F: FnMut()> SceneNavigator for F {
    fn request_parent_scene(&mut self) {
        self()
    }
}

/// What one call to `Calculator::update` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameOutcome {
    /// No glyph was activated; selection may still have moved.
    Idle,
    Activated(Glyph),
    /// The glyph was confirmed but its text did not fit the input buffer.
    Rejected(Glyph),
    /// The back trigger fired and the parent scene was requested.
    ExitRequested,
}
