//! Input handling
//!
//! Keyboard state is polled once per frame through [`KeyPoller`]; cursor, scroll and
//! framebuffer events are dispatched from the window's event queue by [`InputHandlers`].

pub mod mouse;

pub use mouse::{handle_scroll, MouseLook};

use glfw::WindowEvent;

use crate::render::camera::CameraMovement;
use crate::render::{GlWindow, RenderDevice};
use crate::scene::SceneState;

/// Render loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderLoopState {
    /// Frames are being drawn
    #[default]
    Running,
    /// The window should close; resources are torn down next
    Closing,
}

/// Keys polled every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    /// Request close
    Escape,
    /// Move forward
    W,
    /// Move backward
    S,
    /// Strafe left
    A,
    /// Strafe right
    D,
}

/// Source of held-key state
pub trait KeyPoller {
    /// Whether `key` is currently held
    fn is_pressed(&self, key: ControlKey) -> bool;
}

impl KeyPoller for GlWindow {
    fn is_pressed(&self, key: ControlKey) -> bool {
        let key = match key {
            ControlKey::Escape => glfw::Key::Escape,
            ControlKey::W => glfw::Key::W,
            ControlKey::S => glfw::Key::S,
            ControlKey::A => glfw::Key::A,
            ControlKey::D => glfw::Key::D,
        };
        self.is_key_pressed(key)
    }
}

const MOVEMENT_KEYS: [(ControlKey, CameraMovement); 4] = [
    (ControlKey::W, CameraMovement::Forward),
    (ControlKey::S, CameraMovement::Backward),
    (ControlKey::A, CameraMovement::Left),
    (ControlKey::D, CameraMovement::Right),
];

/// Poll the control keys for one frame
///
/// Escape requests closing; held movement keys move the camera by `delta_time`.
pub fn process_input<K: KeyPoller + ?Sized>(
    keys: &K,
    state: &mut SceneState,
    delta_time: f32,
) -> RenderLoopState {
    for (key, movement) in MOVEMENT_KEYS {
        if keys.is_pressed(key) {
            state.camera.process_keyboard(movement, delta_time);
        }
    }

    if keys.is_pressed(ControlKey::Escape) {
        log::info!("Escape pressed, closing");
        RenderLoopState::Closing
    } else {
        RenderLoopState::Running
    }
}

/// Handlers for events delivered through the window's event queue
#[derive(Debug, Default)]
pub struct InputHandlers {
    /// Cursor look state
    pub mouse_look: MouseLook,
}

impl InputHandlers {
    /// Create handlers with an unseeded cursor
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one window event to its handler
    pub fn handle_event<D: RenderDevice + ?Sized>(
        &mut self,
        event: &WindowEvent,
        device: &mut D,
        state: &mut SceneState,
    ) {
        match *event {
            WindowEvent::FramebufferSize(width, height) => device.set_viewport(width, height),
            WindowEvent::CursorPos(x, y) => self.mouse_look.handle_cursor(state, x, y),
            WindowEvent::Scroll(_, y) => handle_scroll(state, y),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::testing::{DeviceCall, RecordingDevice};
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[derive(Default)]
    struct HeldKeys(HashSet<ControlKey>);

    impl KeyPoller for HeldKeys {
        fn is_pressed(&self, key: ControlKey) -> bool {
            self.0.contains(&key)
        }
    }

    fn held(keys: &[ControlKey]) -> HeldKeys {
        HeldKeys(keys.iter().copied().collect())
    }

    #[test]
    fn test_no_keys_keeps_running() {
        let mut state = SceneState::new();
        let start = state.camera.position;
        assert_eq!(process_input(&HeldKeys::default(), &mut state, 0.1), RenderLoopState::Running);
        assert_eq!(state.camera.position, start);
    }

    #[test]
    fn test_escape_requests_close() {
        let mut state = SceneState::new();
        assert_eq!(
            process_input(&held(&[ControlKey::Escape]), &mut state, 0.1),
            RenderLoopState::Closing
        );
    }

    #[test]
    fn test_forward_moves_along_front() {
        let mut state = SceneState::new();
        process_input(&held(&[ControlKey::W]), &mut state, 0.1);
        // 2.5 units/s for 0.1 s down -Z
        assert_relative_eq!(state.camera.position, Vec3::new(0.0, 0.0, 2.75), epsilon = 1e-5);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut state = SceneState::new();
        let start = state.camera.position;
        process_input(&held(&[ControlKey::A, ControlKey::D]), &mut state, 0.2);
        assert_relative_eq!(state.camera.position, start, epsilon = 1e-5);
    }

    #[test]
    fn test_framebuffer_resize_sets_viewport() {
        let mut handlers = InputHandlers::new();
        let mut device = RecordingDevice::default();
        let mut state = SceneState::new();

        handlers.handle_event(&WindowEvent::FramebufferSize(1024, 768), &mut device, &mut state);
        assert_eq!(device.calls, vec![DeviceCall::Viewport(1024, 768)]);
    }

    #[test]
    fn test_cursor_and_scroll_events_reach_camera() {
        let mut handlers = InputHandlers::new();
        let mut device = RecordingDevice::default();
        let mut state = SceneState::new();

        handlers.handle_event(&WindowEvent::CursorPos(100.0, 100.0), &mut device, &mut state);
        handlers.handle_event(&WindowEvent::CursorPos(140.0, 100.0), &mut device, &mut state);
        assert_relative_eq!(state.camera.yaw, -88.0, epsilon = 1e-5);

        handlers.handle_event(&WindowEvent::Scroll(0.0, 2.0), &mut device, &mut state);
        assert_relative_eq!(state.camera.zoom, 43.0);
        assert!(device.calls.is_empty());
    }
}
