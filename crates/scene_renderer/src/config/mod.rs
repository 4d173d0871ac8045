//! Configuration system
//!
//! Application settings are plain serde structures. Any of them can be read from or
//! written to `.toml` or `.ron` files through the [`Config`] trait; every field has a
//! default so a partial file only overrides what it names.

pub use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Load configuration from `path` if it exists, otherwise fall back to defaults
    ///
    /// A file that exists but fails to parse is still an error.
    fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if Path::new(path).exists() {
            log::info!("Loading configuration from {}", path);
            Self::load_from_file(path)
        } else {
            log::info!("No configuration at {}, using defaults", path);
            Ok(Self::default())
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Window creation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width in pixels; also the width used for the projection aspect
    pub width: u32,
    /// Initial window height in pixels; also the height used for the projection aspect
    pub height: u32,
    /// Window title
    pub title: String,
}

impl WindowConfig {
    /// Fixed aspect ratio used by the projection matrix
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "LearnOpenGL".to_string(),
        }
    }
}

/// Projection clip planes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Near clip plane distance
    pub near: f32,
    /// Far clip plane distance
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self { near: 0.1, far: 100.0 }
    }
}

/// Which point light motion policy drives the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationMode {
    /// Fixed distance per rendered frame, independent of frame time
    FixedStep,
    /// Distance proportional to frame time
    TimeScaled,
}

/// Point light sweep parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Motion policy
    pub mode: AnimationMode,
    /// Per-frame step for [`AnimationMode::FixedStep`]
    pub step: f32,
    /// Half-width of the sweep along X
    pub bound: f32,
    /// Units per second for [`AnimationMode::TimeScaled`]
    pub speed: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            mode: AnimationMode::FixedStep,
            step: 0.01,
            bound: 3.0,
            speed: 0.6,
        }
    }
}

/// Asset locations, relative to the working directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding the GLSL sources
    pub shader_dir: PathBuf,
    /// Cube diffuse map
    pub cube_diffuse: PathBuf,
    /// Cube specular map
    pub cube_specular: PathBuf,
    /// Plant model (Wavefront OBJ)
    pub plant_model: PathBuf,
}

impl AssetConfig {
    /// Resolve the vertex and fragment source paths for a program name
    ///
    /// Programs are stored as `<name>.vs` / `<name>.fs` pairs in [`Self::shader_dir`].
    pub fn shader_sources(&self, name: &str) -> (PathBuf, PathBuf) {
        (
            self.shader_dir.join(format!("{name}.vs")),
            self.shader_dir.join(format!("{name}.fs")),
        )
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            shader_dir: PathBuf::from("resources/shaders"),
            cube_diffuse: PathBuf::from("resources/textures/TexturesCom_BrokenGlass0048_1_S.jpg"),
            cube_specular: PathBuf::from("resources/textures/TexturesCom_BrokenGlass0048_2_S.jpg"),
            plant_model: PathBuf::from(
                "resources/objects/IndoorPotPlant/indoor plant_02_obj/indoor plant_02.obj",
            ),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Baseline level (`error`, `warn`, `info`, `debug`, `trace`)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Projection settings
    pub projection: ProjectionConfig,
    /// Point light animation
    pub animation: AnimationConfig,
    /// Asset paths
    pub assets: AssetConfig,
    /// Logging
    pub logging: LoggingConfig,
}

impl Config for AppConfig {}

impl AppConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err("Window dimensions must be non-zero".to_string());
        }
        if self.projection.near <= 0.0 || self.projection.far <= self.projection.near {
            return Err("Projection planes must satisfy 0 < near < far".to_string());
        }
        let animation = &self.animation;
        for (name, value) in [
            ("bound", animation.bound),
            ("step", animation.step),
            ("speed", animation.speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("Animation {name} must be positive and finite, got {value}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scene_setup() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.animation.mode, AnimationMode::FixedStep);
        assert!((config.animation.step - 0.01).abs() < f32::EPSILON);
        assert!((config.window.aspect_ratio() - 800.0 / 600.0).abs() < f32::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        let config: AppConfig = toml::from_str(
            "[window]\ntitle = \"Plant\"\n\n[animation]\nmode = \"time_scaled\"\n",
        )
        .unwrap();
        assert_eq!(config.window.title, "Plant");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.animation.mode, AnimationMode::TimeScaled);
        assert!((config.animation.bound - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_toml_file_round_trip() {
        let path = std::env::temp_dir().join("scene_renderer_config_test.toml");
        let path = path.to_str().unwrap();

        let mut config = AppConfig::default();
        config.logging.level = "debug".to_string();
        config.save_to_file(path).unwrap();

        let loaded = AppConfig::load_from_file(path).unwrap();
        assert_eq!(loaded, config);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let result = AppConfig::default().save_to_file("settings.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default("definitely/not/here.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_shader_source_paths() {
        let assets = AssetConfig::default();
        let (vs, fs) = assets.shader_sources("cube");
        assert_eq!(vs, PathBuf::from("resources/shaders/cube.vs"));
        assert_eq!(fs, PathBuf::from("resources/shaders/cube.fs"));
    }

    #[test]
    fn test_validate_rejects_bad_planes() {
        let mut config = AppConfig::default();
        config.projection.far = 0.05;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_animation() {
        let cases: [fn(&mut AnimationConfig); 6] = [
            |a| a.step = -0.01,
            |a| a.step = 0.0,
            |a| a.step = f32::NAN,
            |a| a.speed = 0.0,
            |a| a.speed = -0.6,
            |a| a.bound = f32::INFINITY,
        ];
        for mutate in cases {
            let mut config = AppConfig::default();
            mutate(&mut config.animation);
            assert!(config.validate().is_err(), "{:?}", config.animation);
        }
    }
}
