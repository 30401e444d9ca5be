use tracing::{debug, trace};

use crate::interaction::InputSnapshot;
use crate::render::Renderer;

use super::{Calculator, FrameOutcome, SceneNavigator};

impl<R: Renderer> Calculator<R> {
    /// Processes one frame of input.
    ///
    /// Order within a frame: back trigger, cooldown tick, directional move,
    /// pointer hover, activation. A back trigger requests the parent scene
    /// and skips the rest of the frame.
    pub fn update<N: SceneNavigator + ?Sized>(
        &mut self,
        input: InputSnapshot,
        navigator: &mut N,
    ) -> FrameOutcome {
        if input.back {
            debug!("back requested, leaving calculator");
            navigator.request_parent_scene();
            return FrameOutcome::ExitRequested;
        }

        self.keypad.tick();
        self.keypad.navigate(input.dpad_x, input.dpad_y);
        if let Some((x, y)) = input.pointer {
            if let Some(index) = self.keypad.hover(x, y) {
                trace!(x, y, index, "pointer hover");
            }
        }

        if input.confirm {
            let glyph = self.keypad.selected_glyph();
            return if self.activate(glyph) {
                FrameOutcome::Activated(glyph)
            } else {
                FrameOutcome::Rejected(glyph)
            };
        }
        FrameOutcome::Idle
    }
}
