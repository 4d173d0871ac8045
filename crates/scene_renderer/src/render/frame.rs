//! Per-frame orchestration
//!
//! Each frame clears, derives projection and view from the camera, advances the point
//! light and then runs three passes in a fixed order:
//!
//! 1. **Marker**: tetrahedron at the point light, transforms only
//! 2. **Cube**: textured cube with the shared lighting block and two sampler units
//! 3. **Plant**: loaded model with the same lighting block, binding its own textures
//!
//! Every pass re-pushes its full uniform set, so program state never leaks between frames.

use crate::config::{AppConfig, AssetConfig};
use crate::foundation::math::{utils::deg_to_rad, Mat4, Mat4Ext, Vec3};
use crate::assets::Model;
use crate::scene::{motion_from_config, LightMotion, SceneState};
use super::camera::Camera;
use super::device::{GeometryHandle, RenderDevice, TextureHandle};
use super::geometry::{self, CUBE_VERTEX_COUNT, MARKER_INDEX_COUNT};
use super::lighting::{apply_lighting, apply_transforms};
use super::shader::{uniforms, ShaderProgram};
use super::texture::load_texture;

/// Specular exponent used by both lit passes
pub const SHININESS: f32 = 32.0;

/// Marker rotation around Z, in degrees
const MARKER_ROTATION_DEGREES: f32 = 45.0;
/// Marker uniform scale
const MARKER_SCALE: f32 = 0.25;
/// Plant uniform scale
const PLANT_SCALE: f32 = 0.15;

/// Model matrix of the light marker: translate, then rotate 45° around Z, then scale
pub fn marker_model(light_position: &Vec3) -> Mat4 {
    Mat4::identity()
        .translated(light_position)
        .rotated_z(deg_to_rad(MARKER_ROTATION_DEGREES))
        .scaled(MARKER_SCALE)
}

/// Model matrix of the cube
pub fn cube_model() -> Mat4 {
    Mat4::identity().translated(&Vec3::new(0.0, 0.0, -3.0))
}

/// Model matrix of the plant
pub fn plant_model() -> Mat4 {
    Mat4::identity()
        .translated(&Vec3::new(0.0, 0.5, -3.0))
        .scaled(PLANT_SCALE)
}

/// The three programs, one per pass
#[derive(Debug)]
pub struct ScenePrograms<P> {
    /// Unlit marker program
    pub marker: P,
    /// Lit cube program with `material.diffuse`/`material.specular` samplers
    pub cube: P,
    /// Lit model program with `texture_diffuseN`/`texture_specularN` samplers
    pub plant: P,
}

/// GPU resources owned by the scene
///
/// Created once at startup and released exactly once, in reverse creation order.
#[derive(Debug)]
pub struct SceneResources<P> {
    programs: ScenePrograms<P>,
    marker: GeometryHandle,
    cube: GeometryHandle,
    diffuse_map: TextureHandle,
    specular_map: TextureHandle,
    plant: Model,
}

impl<P: ShaderProgram> SceneResources<P> {
    /// Upload geometry and load textures and the plant model
    ///
    /// Missing textures become the invalid handle and a missing model draws nothing;
    /// both are logged by the loaders.
    pub fn load<D: RenderDevice + ?Sized>(
        device: &mut D,
        programs: ScenePrograms<P>,
        assets: &AssetConfig,
    ) -> Self {
        let marker = device.create_geometry(&geometry::marker_tetrahedron());
        let cube = device.create_geometry(&geometry::cube());
        let diffuse_map = load_texture(device, &assets.cube_diffuse);
        let specular_map = load_texture(device, &assets.cube_specular);
        let plant = Model::load(device, &assets.plant_model);

        log::info!("Scene resources loaded ({} plant sub-meshes)", plant.meshes().len());

        Self {
            programs,
            marker,
            cube,
            diffuse_map,
            specular_map,
            plant,
        }
    }

    /// Programs driving the passes
    pub fn programs(&self) -> &ScenePrograms<P> {
        &self.programs
    }

    /// The loaded plant
    pub fn plant(&self) -> &Model {
        &self.plant
    }

    /// Release everything in reverse creation order; programs drop last
    pub fn release<D: RenderDevice + ?Sized>(self, device: &mut D) {
        self.plant.release(device);
        device.delete_texture(self.specular_map);
        device.delete_texture(self.diffuse_map);
        device.delete_geometry(self.cube);
        device.delete_geometry(self.marker);
        log::info!("Scene resources released");
    }
}

/// Draws one frame of the scene
pub struct FrameRenderer<P> {
    resources: SceneResources<P>,
    motion: Box<dyn LightMotion>,
    aspect_ratio: f32,
    near: f32,
    far: f32,
}

impl<P: ShaderProgram> FrameRenderer<P> {
    /// Build the renderer over loaded resources
    ///
    /// The aspect ratio comes from the configured window size and stays fixed when the
    /// framebuffer is resized.
    pub fn new(resources: SceneResources<P>, config: &AppConfig) -> Self {
        Self {
            resources,
            motion: motion_from_config(&config.animation),
            aspect_ratio: config.window.aspect_ratio(),
            near: config.projection.near,
            far: config.projection.far,
        }
    }

    /// Replace the point light motion policy
    #[must_use]
    pub fn with_motion(mut self, motion: Box<dyn LightMotion>) -> Self {
        self.motion = motion;
        self
    }

    /// Perspective projection for the camera's current zoom
    pub fn projection(&self, camera: &Camera) -> Mat4 {
        Mat4::perspective_gl(camera.fov_radians(), self.aspect_ratio, self.near, self.far)
    }

    /// Resources drawn by this renderer
    pub fn resources(&self) -> &SceneResources<P> {
        &self.resources
    }

    /// Clear, animate the point light and draw the three passes
    pub fn render_frame<D: RenderDevice + ?Sized>(
        &mut self,
        device: &mut D,
        state: &mut SceneState,
        delta_time: f32,
    ) {
        device.clear(&state.clear_color);

        let projection = self.projection(&state.camera);
        let view = state.camera.view_matrix();

        self.motion.advance(state, delta_time);
        log::trace!("Point light at x = {:.3}", state.point_light.position.x);

        let resources = &mut self.resources;

        // Marker
        let marker = &mut resources.programs.marker;
        marker.activate();
        apply_transforms(marker, &marker_model(&state.point_light.position), &view, &projection);
        device.draw_elements(resources.marker, MARKER_INDEX_COUNT);

        // Cube
        let cube = &mut resources.programs.cube;
        cube.activate();
        apply_transforms(cube, &cube_model(), &view, &projection);
        apply_lighting(cube, state, SHININESS);
        cube.set_int(uniforms::MATERIAL_DIFFUSE, 0);
        cube.set_int(uniforms::MATERIAL_SPECULAR, 1);
        device.bind_texture(0, resources.diffuse_map);
        device.bind_texture(1, resources.specular_map);
        device.draw_arrays(resources.cube, CUBE_VERTEX_COUNT);

        // Plant
        let plant = &mut resources.programs.plant;
        plant.activate();
        apply_transforms(plant, &plant_model(), &view, &projection);
        apply_lighting(plant, state, SHININESS);
        resources.plant.draw(device, plant);
    }

    /// Release the scene's GPU resources
    pub fn release<D: RenderDevice + ?Sized>(self, device: &mut D) {
        self.resources.release(device);
    }
}
