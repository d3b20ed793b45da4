use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::types::{BlockProperties, Orientation, ShapeType, Side, Sides};

/// Presets shipped with the editor, used when no palette file is configured.
pub const BUILTIN_PALETTE: &str = r#"
[[preset]]
name = "cube"
shape = "cube"

[[preset]]
name = "pillar"
shape = "pillar_center"

[[preset]]
name = "corner_post"
shape = "pillar_corner"

[[preset]]
name = "ramp_low"
shape = "slope_half"
height_low = 0.0
height_high = 0.5

[[preset]]
name = "ramp_high"
shape = "slope_half"
height_low = 0.5
height_high = 1.0

[[preset]]
name = "wedge"
shape = "slope_half"
height_low = 0.0
height_high = 1.0
"#;

#[derive(Deserialize, Debug, Clone)]
pub struct PaletteConfig {
    #[serde(default, rename = "preset")]
    pub presets: Vec<PresetDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PresetDef {
    pub name: String,
    #[serde(default)]
    pub shape: ShapeType,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub hidden_sides: Vec<Side>,
    #[serde(default)]
    pub height_low: Option<f32>,
    #[serde(default)]
    pub height_high: Option<f32>,
}

impl PresetDef {
    pub fn properties(&self) -> BlockProperties {
        let sides = self
            .hidden_sides
            .iter()
            .fold(Sides::all(), |acc, s| acc.with_side(*s, false));
        BlockProperties::new(
            self.shape,
            self.orientation,
            sides,
            self.height_low.unwrap_or(0.0),
            self.height_high.unwrap_or(1.0),
        )
    }
}

/// Named block presets, in file order.
#[derive(Default, Clone, Debug)]
pub struct Palette {
    entries: Vec<(String, BlockProperties)>,
}

impl Palette {
    pub fn builtin() -> Result<Self, Box<dyn Error>> {
        Self::from_toml_str(BUILTIN_PALETTE)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: PaletteConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: PaletteConfig) -> Result<Self, Box<dyn Error>> {
        let mut palette = Palette::default();
        for def in cfg.presets {
            if palette.get(&def.name).is_some() {
                return Err(format!("duplicate palette preset '{}'", def.name).into());
            }
            let props = def.properties();
            palette.entries.push((def.name, props));
        }
        Ok(palette)
    }

    pub fn get(&self, name: &str) -> Option<BlockProperties> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| *p)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
