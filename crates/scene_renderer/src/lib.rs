//! # Scene Renderer
//!
//! A small forward-shaded OpenGL renderer that draws a textured cube, a loaded plant
//! model and a tetrahedron marking an animated point light. One directional light and
//! one point light illuminate the scene.
//!
//! ## Features
//!
//! - **Explicit scene context**: [`scene::SceneState`] is constructed by the application
//!   and passed by reference to the renderer, animator and input handlers
//! - **Shared lighting block**: every lit pass pushes the same uniforms from the same state
//! - **Pluggable light motion**: the point light sweep sits behind [`scene::LightMotion`]
//! - **Backend seams**: frame logic talks to [`render::RenderDevice`] and
//!   [`render::ShaderProgram`]; the OpenGL implementations live in [`render::gl`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_renderer::prelude::*;
//! use scene_renderer::input::{process_input, InputHandlers};
//! use scene_renderer::render::{ScenePrograms, SceneResources};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::default();
//!     let mut window = GlWindow::new(&config.window)?;
//!     let mut device = GlDevice::new(window.gl());
//!
//!     let program = |name: &str| {
//!         let (vs, fs) = config.assets.shader_sources(name);
//!         GlShaderProgram::from_files(window.gl(), &vs, &fs)
//!     };
//!     let programs = ScenePrograms {
//!         marker: program("point_light")?,
//!         cube: program("cube")?,
//!         plant: program("plant")?,
//!     };
//!     let resources = SceneResources::load(&mut device, programs, &config.assets);
//!     let mut renderer = FrameRenderer::new(resources, &config);
//!
//!     let mut state = SceneState::new();
//!     let mut handlers = InputHandlers::new();
//!     let mut timer = FrameTimer::starting_at(window.time());
//!
//!     while !window.should_close() {
//!         let delta = timer.tick(window.time());
//!         if process_input(&window, &mut state, delta) == RenderLoopState::Closing {
//!             window.set_should_close(true);
//!         }
//!         renderer.render_frame(&mut device, &mut state, delta);
//!         window.swap_buffers();
//!         window.poll_events();
//!         for (_, event) in window.flush_events() {
//!             handlers.handle_event(&event, &mut device, &mut state);
//!         }
//!     }
//!
//!     renderer.release(&mut device);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod scene;
pub mod assets;
pub mod render;
pub mod input;

#[cfg(test)]
pub(crate) mod testing;

/// Common imports for renderer users
pub mod prelude {
    pub use crate::{
        config::{AppConfig, Config, ConfigError},
        foundation::{
            math::{Vec3, Mat4},
            time::FrameTimer,
        },
        scene::{SceneState, DirectionalLight, PointLight, LightMotion, SweepDirection},
        render::{
            Camera, CameraMovement, FrameRenderer, RenderDevice, ShaderProgram,
            TextureHandle, GlWindow, WindowError,
            gl::{GlDevice, GlShaderProgram},
        },
        input::{ControlKey, KeyPoller, MouseLook, RenderLoopState},
    };
}
