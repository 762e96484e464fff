//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use polyview_math::{GeometryError, TopologyKind};
use polyview_render::{Palette, ScreenTransform};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// What the world contains
    #[serde(default)]
    pub scene: SceneConfig,
    /// Orbit camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Screen mapping
    #[serde(default)]
    pub screen: ScreenConfig,
    /// Shade palette
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Tick loop configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Frame output
    #[serde(default)]
    pub output: OutputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // PV_SCENE__DIMENSION=4 -> scene.dimension = 4
        figment = figment.merge(Env::prefixed("PV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Dimension of the world (at least 3)
    pub dimension: usize,
    /// Topology of the bounding hypercube
    pub topology: TopologyKind,
    /// Uniform scale applied to the bounding hypercube
    pub bounding_scale: f64,
    /// Offset added to every bounding hypercube coordinate
    pub bounding_offset: f64,
    /// Additional hypercubes
    pub objects: Vec<ObjectConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            dimension: 3,
            topology: TopologyKind::Edges,
            bounding_scale: 0.96,
            bounding_offset: 0.2,
            objects: Vec::new(),
        }
    }
}

/// A hypercube placed in the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectConfig {
    pub name: String,
    pub topology: TopologyKind,
    /// Edge length
    pub scale: f64,
    /// World position of the cube's origin corner (empty = origin)
    pub position: Vec<f64>,
    pub motion: MotionConfig,
}

impl Default for ObjectConfig {
    fn default() -> Self {
        Self {
            name: "object".to_string(),
            topology: TopologyKind::Edges,
            scale: 1.0,
            position: Vec::new(),
            motion: MotionConfig::Static,
        }
    }
}

/// How a configured object moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MotionConfig {
    Static,
    /// Constant velocity in world units per second
    Kinetic { velocity: Vec<f64> },
    /// Spin at `rate` rad/s in `plane`, with optional constant thrust
    Spin {
        rate: f64,
        plane: [usize; 2],
        #[serde(default)]
        thrust: Option<Vec<f64>>,
    },
}

/// Orbit camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Orbit centre (empty = 0.5 on every axis)
    pub center: Vec<f64>,
    /// Radians per tick
    pub rate: f64,
    /// Rotation plane axes
    pub plane: [usize; 2],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            center: Vec::new(),
            rate: 0.003,
            plane: [0, 1],
        }
    }
}

impl CameraConfig {
    /// The orbit centre in `dimension`-dimensional space
    pub fn center_for(&self, dimension: usize) -> Vec<f64> {
        if self.center.is_empty() {
            vec![0.5; dimension]
        } else {
            self.center.clone()
        }
    }
}

/// Screen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Pixels per unit at depth 1 [x, y]
    pub scale: [f64; 2],
    /// Screen position of the optical axis [x, y]; the viewport centre if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<[f64; 2]>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            scale: [100.0, 100.0],
            offset: None,
        }
    }
}

impl ScreenConfig {
    /// Screen position of the optical axis
    pub fn offset(&self) -> [f64; 2] {
        self.offset
            .unwrap_or_else(|| ScreenTransform::centered(self.width, self.height, 1.0).offset)
    }

    pub fn to_screen_transform(&self) -> ScreenTransform {
        ScreenTransform::new(self.scale, self.offset())
    }
}

/// Palette configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Colour at shade 1 [r, g, b] in [0, 1]
    pub zero: [f64; 3],
    /// Colour at shade 0 [r, g, b] in [0, 1]
    pub one: [f64; 3],
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            zero: Palette::BLUE.zero(),
            one: Palette::BLUE.one(),
        }
    }
}

impl PaletteConfig {
    pub fn to_palette(&self) -> Result<Palette, GeometryError> {
        Palette::new(self.zero, self.one)
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seconds per tick
    pub tick_interval: f64,
    /// Number of ticks to run
    pub ticks: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval: 1.0 / 60.0,
            ticks: 600,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the last frame's line segments to stdout
    pub dump: bool,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log frame statistics every N ticks (0 = never)
    pub stats_interval: u64,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            stats_interval: 60,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
