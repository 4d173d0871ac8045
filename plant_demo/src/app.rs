//! Startup, render loop and teardown

use thiserror::Error;

use scene_renderer::config::{AppConfig, AssetConfig, ConfigError};
use scene_renderer::foundation::time::FrameTimer;
use scene_renderer::input::{process_input, InputHandlers, RenderLoopState};
use scene_renderer::render::gl::{GlDevice, GlShaderProgram};
use scene_renderer::render::{
    FrameRenderer, GlWindow, ScenePrograms, SceneResources, ShaderError, WindowError,
};
use scene_renderer::scene::SceneState;

/// Errors that stop the demo before or during startup
#[derive(Error, Debug)]
pub enum AppError {
    /// Window, context or GL loader failure
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// A shader program failed to build
    #[error("Shader error: {0}")]
    Shader(#[from] ShaderError),

    /// Configuration could not be read
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

fn build_program(
    window: &GlWindow,
    assets: &AssetConfig,
    name: &str,
) -> Result<GlShaderProgram, ShaderError> {
    let (vertex, fragment) = assets.shader_sources(name);
    GlShaderProgram::from_files(window.gl(), &vertex, &fragment)
        .inspect_err(|_| log::error!("Failed to build '{}' program", name))
}

/// Run the demo until the window closes
pub fn run(config: &AppConfig) -> Result<(), AppError> {
    config.validate().map_err(AppError::InvalidConfig)?;

    let mut window = GlWindow::new(&config.window)?;
    let mut device = GlDevice::new(window.gl());

    let programs = ScenePrograms {
        marker: build_program(&window, &config.assets, "point_light")?,
        cube: build_program(&window, &config.assets, "cube")?,
        plant: build_program(&window, &config.assets, "plant")?,
    };
    let resources = SceneResources::load(&mut device, programs, &config.assets);
    let mut renderer = FrameRenderer::new(resources, config);

    let mut state = SceneState::new();
    let mut handlers = InputHandlers::new();
    let mut timer = FrameTimer::starting_at(window.time());
    let mut loop_state = RenderLoopState::Running;

    log::info!("Entering render loop");
    while loop_state == RenderLoopState::Running {
        let delta_time = timer.tick(window.time());

        if process_input(&window, &mut state, delta_time) == RenderLoopState::Closing {
            window.set_should_close(true);
        }

        renderer.render_frame(&mut device, &mut state, delta_time);

        window.swap_buffers();
        window.poll_events();
        for (_, event) in window.flush_events() {
            handlers.handle_event(&event, &mut device, &mut state);
        }

        if window.should_close() {
            loop_state = RenderLoopState::Closing;
        }
    }

    log::info!("Closing after {} frames", timer.frame_count());
    renderer.release(&mut device);
    Ok(())
}
