//! Plant demo
//!
//! Renders a textured cube and an indoor plant lit by a directional light and a point
//! light sweeping along X. WASD moves, the mouse looks around, the wheel zooms and
//! Escape quits.

mod app;

use scene_renderer::config::{AppConfig, Config};
use scene_renderer::foundation::logging;

/// Configuration file read from the working directory when present
const CONFIG_PATH: &str = "plant_demo.toml";

fn main() {
    let config = match AppConfig::load_or_default(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            logging::init(log::LevelFilter::Info);
            log::error!("Failed to load {}: {}", CONFIG_PATH, e);
            std::process::exit(-1);
        }
    };

    logging::init_with_name(&config.logging.level);
    log::info!("Starting plant demo");

    if let Err(e) = app::run(&config) {
        log::error!("{}", e);
        std::process::exit(-1);
    }

    log::info!("Plant demo finished");
}
