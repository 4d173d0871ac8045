//! Cursor look and scroll zoom

use crate::scene::SceneState;

/// Turns absolute cursor positions into camera look offsets
///
/// The first sample only seeds the last position, so the camera does not jump when the
/// cursor is captured.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseLook {
    last: Option<(f64, f64)>,
}

impl MouseLook {
    /// Create a handler that has not seen the cursor yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset since the previous sample; y is reversed since screen y grows downwards
    pub fn offset(&mut self, x: f64, y: f64) -> (f32, f32) {
        let (last_x, last_y) = self.last.unwrap_or((x, y));
        self.last = Some((x, y));
        #[allow(clippy::cast_possible_truncation)]
        ((x - last_x) as f32, (last_y - y) as f32)
    }

    /// Track the cursor and turn the camera if mouse look is enabled
    ///
    /// The position is tracked even while disabled so re-enabling does not jump.
    pub fn handle_cursor(&mut self, state: &mut SceneState, x: f64, y: f64) {
        let (x_offset, y_offset) = self.offset(x, y);
        if state.mouse_look_enabled {
            state.camera.process_mouse_movement(x_offset, y_offset);
        }
    }
}

/// Zoom the camera by the vertical scroll delta
pub fn handle_scroll(state: &mut SceneState, y_offset: f64) {
    #[allow(clippy::cast_possible_truncation)]
    state.camera.process_mouse_scroll(y_offset as f32);
}
