//! Window management using GLFW
//!
//! Creates the window with a current OpenGL 3.3 core context and loads the GL entry
//! points through it into a shared [`glow::Context`].

#![allow(unsafe_code)]

use std::rc::Rc;

use glfw::Context as _;
use thiserror::Error;

use crate::config::WindowConfig;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW could not be initialised
    #[error("Failed to initialize GLFW")]
    InitializationFailed,

    /// The window or its context could not be created
    #[error("Failed to create GLFW window")]
    CreationFailed,

    /// OpenGL entry points could not be resolved
    #[error("Failed to initialize OpenGL function loader")]
    LoaderFailed,
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window owning the OpenGL context
pub struct GlWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    gl: Rc<glow::Context>,
}

impl GlWindow {
    /// Create the window, make its context current and load OpenGL
    ///
    /// The cursor is captured for mouse look and the events the input layer consumes
    /// (framebuffer size, cursor position, scroll, keys) are enabled.
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();
        window.set_framebuffer_size_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_scroll_polling(true);
        window.set_key_polling(true);
        window.set_cursor_mode(glfw::CursorMode::Disabled);

        if window.get_proc_address("glViewport").is_null() {
            return Err(WindowError::LoaderFailed);
        }
        let gl = unsafe { glow::Context::from_loader_function(|symbol| window.get_proc_address(symbol)) };

        log::info!("Created {}x{} window '{}'", config.width, config.height, config.title);

        Ok(Self {
            glfw,
            window,
            events,
            gl: Rc::new(gl),
        })
    }

    /// Shared handle to the OpenGL context
    pub fn gl(&self) -> Rc<glow::Context> {
        Rc::clone(&self.gl)
    }

    /// Whether the user or the application asked to close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Request (or cancel) closing
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Pump the platform event queue
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain events gathered by the last [`GlWindow::poll_events`]
    pub fn flush_events(&self) -> glfw::FlushedMessages<'_, (f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Seconds since GLFW initialisation
    pub fn time(&self) -> f64 {
        self.glfw.get_time()
    }

    /// Whether `key` is currently held
    pub fn is_key_pressed(&self, key: glfw::Key) -> bool {
        self.window.get_key(key) == glfw::Action::Press
    }

    /// Framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }
}
