//! # First-Person Fly Camera
//!
//! Euler-angle camera driven by keyboard movement, cursor deltas and scroll zoom.
//!
//! ## Design Principles
//! - **Library-agnostic**: no OpenGL or GLFW types, only math
//! - **Explicit updates**: basis vectors are recomputed whenever yaw or pitch change
//! - **Degrees at the edges**: yaw, pitch and zoom are stored in degrees like the inputs
//!   that drive them; conversion to radians happens when matrices are built

use crate::foundation::math::{Mat4, Mat4Ext, Vec3, utils};

/// Default yaw in degrees (looking down -Z)
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in units per second
pub const DEFAULT_SPEED: f32 = 2.5;
/// Default mouse sensitivity in degrees per pixel
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Default (and maximum) zoom, the vertical field of view in degrees
pub const DEFAULT_ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const MIN_ZOOM: f32 = 1.0;

/// Movement commands issued by keyboard polling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    /// Along the view direction
    Forward,
    /// Against the view direction
    Backward,
    /// Strafe left
    Left,
    /// Strafe right
    Right,
}

/// Fly camera with position, Euler orientation and zoom
///
/// # Coordinate System
/// Right-handed, Y-up. With yaw -90° and pitch 0° the camera looks down -Z.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Yaw in degrees
    pub yaw: f32,
    /// Pitch in degrees, kept within ±89° by mouse input
    pub pitch: f32,
    /// Movement speed in units per second
    pub movement_speed: f32,
    /// Degrees of rotation per pixel of cursor motion
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees
    pub zoom: f32,
    world_up: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
}

impl Camera {
    /// Create a camera at `position` with default orientation and tuning
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            world_up: Vec3::y(),
            front: -Vec3::z(),
            up: Vec3::y(),
            right: Vec3::x(),
        };
        camera.update_vectors();
        camera
    }

    /// Unit view direction
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right vector
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit up vector
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// View matrix looking from `position` along `front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(&self.position, &(self.position + self.front), &self.up)
    }

    /// Vertical field of view in radians
    pub fn fov_radians(&self) -> f32 {
        utils::deg_to_rad(self.zoom)
    }

    /// Move the camera for one frame
    ///
    /// Distance is `movement_speed * delta_time`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
        log::trace!("Camera moved {:?} to {:?}", direction, self.position);
    }

    /// Turn the camera by a cursor offset in pixels
    ///
    /// Positive `y_offset` pitches up. Pitch is clamped to ±89° so the view never flips.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch = (self.pitch + y_offset * self.mouse_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Zoom by a vertical scroll delta; scrolling up narrows the field of view
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, DEFAULT_ZOOM);
    }

    fn update_vectors(&mut self) {
        let yaw = utils::deg_to_rad(self.yaw);
        let pitch = utils::deg_to_rad(self.pitch);
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(&self.world_up).normalize();
        self.up = self.right.cross(&self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::zeros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_default_basis() {
        let camera = Camera::new(Vec3::zeros());
        assert_relative_eq!(camera.front(), Vec3::new(0.0, 0.0, -1.0), epsilon = EPSILON);
        assert_relative_eq!(camera.right(), Vec3::new(1.0, 0.0, 0.0), epsilon = EPSILON);
        assert_relative_eq!(camera.up(), Vec3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_keyboard_movement_scales_with_delta() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        camera.process_keyboard(CameraMovement::Forward, 0.4);
        assert_relative_eq!(camera.position, Vec3::new(0.0, 0.0, 2.0), epsilon = EPSILON);
        camera.process_keyboard(CameraMovement::Right, 0.2);
        assert_relative_eq!(camera.position, Vec3::new(0.5, 0.0, 2.0), epsilon = EPSILON);
        camera.process_keyboard(CameraMovement::Left, 0.2);
        camera.process_keyboard(CameraMovement::Backward, 0.4);
        assert_relative_eq!(camera.position, Vec3::new(0.0, 0.0, 3.0), epsilon = EPSILON);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 10_000.0);
        assert_relative_eq!(camera.pitch, 89.0);
        camera.process_mouse_movement(0.0, -10_000.0);
        assert_relative_eq!(camera.pitch, -89.0);
    }

    #[test]
    fn test_mouse_movement_uses_sensitivity() {
        let mut camera = Camera::default();
        camera.mouse_sensitivity = 0.05;
        camera.process_mouse_movement(100.0, 20.0);
        assert_relative_eq!(camera.yaw, -85.0, epsilon = EPSILON);
        assert_relative_eq!(camera.pitch, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_scroll_zoom_is_clamped() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(10.0);
        assert_relative_eq!(camera.zoom, 35.0);
        camera.process_mouse_scroll(100.0);
        assert_relative_eq!(camera.zoom, 1.0);
        camera.process_mouse_scroll(-100.0);
        assert_relative_eq!(camera.zoom, 45.0);
    }

    #[test]
    fn test_view_matrix_puts_target_on_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let view = camera.view_matrix();
        let p = view.transform_point(&Point3::new(0.0, 0.0, -3.0));
        assert_relative_eq!(p, Point3::new(0.0, 0.0, -6.0), epsilon = 1e-4);
    }
}
