//! Math utilities and types
//!
//! Provides the fundamental math types used by the renderer. All matrices follow the
//! OpenGL conventions: column-major storage, right-handed view space, clip-space depth
//! in [-1, 1].

pub use nalgebra::{Vector3, Matrix4, Point3 as NaPoint3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = NaPoint3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

/// Extension trait for Mat4 with the transforms the frame passes compose
///
/// Model matrices are built the way a fixed-function matrix stack would build them:
/// each call post-multiplies, so `identity.translated(t).rotated_z(a).scaled(s)` applies
/// the scale first and the translation last to a vertex.
pub trait Mat4Ext {
    /// Post-multiply by a translation
    fn translated(&self, offset: &Vec3) -> Mat4;

    /// Post-multiply by a rotation of `angle` radians around the Z axis
    fn rotated_z(&self, angle: f32) -> Mat4;

    /// Post-multiply by a uniform scale
    fn scaled(&self, factor: f32) -> Mat4;

    /// OpenGL perspective projection (depth mapped to [-1, 1])
    fn perspective_gl(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Right-handed look-at view matrix
    fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn translated(&self, offset: &Vec3) -> Mat4 {
        self * Mat4::new_translation(offset)
    }

    fn rotated_z(&self, angle: f32) -> Mat4 {
        self * Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    fn scaled(&self, factor: f32) -> Mat4 {
        self * Mat4::new_scaling(factor)
    }

    fn perspective_gl(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        // nalgebra's perspective already targets OpenGL clip space
        Mat4::new_perspective(aspect, fov_y, near, far)
    }

    fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(*eye), &Point3::from(*target), up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_degree_conversion() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = EPSILON);
        assert_relative_eq!(utils::rad_to_deg(constants::PI * 0.5), 90.0, epsilon = EPSILON);
    }

    #[test]
    fn test_transform_chain_applies_scale_first() {
        let model = Mat4::identity()
            .translated(&Vec3::new(1.0, 2.0, 3.0))
            .scaled(0.5);
        let p = model.transform_point(&Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(2.0, 2.0, 3.0), epsilon = EPSILON);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let model = Mat4::identity().rotated_z(utils::deg_to_rad(90.0));
        let p = model.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_perspective_maps_near_plane_to_minus_one() {
        let proj = Mat4::perspective_gl(utils::deg_to_rad(45.0), 4.0 / 3.0, 0.1, 100.0);
        let clip = proj * nalgebra::Vector4::new(0.0, 0.0, -0.1, 1.0);
        assert_relative_eq!(clip.z / clip.w, -1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let view = Mat4::look_at(
            &Vec3::new(0.0, 0.0, 3.0),
            &Vec3::new(0.0, 0.0, 2.0),
            &Vec3::y(),
        );
        let p = view.transform_point(&Point3::new(0.0, 0.0, 3.0));
        assert_relative_eq!(p, Point3::origin(), epsilon = EPSILON);
    }
}
