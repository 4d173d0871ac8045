//! OpenGL 3.3 core backend on glow
//!
//! Both types share the context created by [`super::GlWindow::new`], which must stay
//! current on this thread while they are alive.

mod device;
mod shader;

pub use device::GlDevice;
pub use shader::GlShaderProgram;
