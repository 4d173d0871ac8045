//! # Rendering
//!
//! Frame logic and the OpenGL backend it drives.
//!
//! ## Architecture
//!
//! - **Camera**: fly camera producing the view matrix and field of view
//! - **Frame**: the three passes (marker, cube, plant) over an explicit [`crate::scene::SceneState`]
//! - **Seams**: [`RenderDevice`] and [`ShaderProgram`] keep the passes backend agnostic
//! - **OpenGL backend**: [`gl::GlDevice`] and [`gl::GlShaderProgram`] plus the GLFW [`GlWindow`]

// Backend-agnostic contracts
pub mod device;
pub mod shader;

// Frame building blocks
pub mod camera;
pub mod geometry;
pub mod lighting;
pub mod texture;
pub mod frame;

// Platform
pub mod window;
pub mod gl;

pub use camera::{Camera, CameraMovement};
pub use device::{GeometryHandle, RenderDevice, TextureHandle};
pub use frame::{FrameRenderer, ScenePrograms, SceneResources};
pub use shader::{ShaderError, ShaderProgram};
pub use texture::{TextureError, TextureUpload};
pub use window::{GlWindow, WindowError};
