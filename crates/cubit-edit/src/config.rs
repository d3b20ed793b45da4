use std::error::Error;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 5,
            depth: 10,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// World units moved per unit of drag, scroll or held-key second.
    pub translate_units: f32,
    /// Degrees turned per full-viewport drag.
    pub rotate_angle: f32,
    pub scroll_factor: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub viewport: [f32; 2],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 67.0,
            near: 1.0,
            far: 500.0,
            translate_units: 40.0,
            rotate_angle: 360.0,
            scroll_factor: -0.1,
            position: [0.0, 60.0, 40.0],
            target: [20.0, 25.0, 20.0],
            viewport: [800.0, 480.0],
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    pub world: WorldConfig,
    /// Depth of the resize-handle slabs inside each face of the selection box.
    pub handle_thickness: f32,
    /// Parallel tolerance for ray/box and ray/plane tests.
    pub pick_epsilon: f32,
    pub camera: CameraConfig,
    /// Optional palette file; the built-in presets are used when absent.
    pub palette: Option<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            handle_thickness: 0.1,
            pick_epsilon: 1e-6,
            camera: CameraConfig::default(),
            palette: None,
        }
    }
}

impl EditorConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: EditorConfig = toml::from_str(toml_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), Box<dyn Error>> {
        let w = &self.world;
        if w.width == 0 || w.height == 0 || w.depth == 0 {
            return Err(format!("world dimensions must be non-zero, got {}x{}x{}", w.width, w.height, w.depth).into());
        }
        if !(self.handle_thickness > 0.0) {
            return Err("handle_thickness must be positive".into());
        }
        if !(self.pick_epsilon >= 0.0) {
            return Err("pick_epsilon must be non-negative".into());
        }
        let c = &self.camera;
        if !(c.near > 0.0 && c.far > c.near) {
            return Err(format!("camera clip range {}..{} is invalid", c.near, c.far).into());
        }
        if !(c.fov > 0.0 && c.fov < 180.0) {
            return Err(format!("camera fov {} is out of range", c.fov).into());
        }
        Ok(())
    }
}
