use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tilegen::{Algorithm, CellularMoore, Seed, WalkSurfaceSmooth};

use crate::error::ConfigError;

// Where a layer's seed comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SeedSource {
    // Fresh wall-clock sample on every run
    Clock,
    Text(String),
    Number(f64),
}

impl SeedSource {
    pub fn resolve(&self) -> Seed {
        match self {
            SeedSource::Clock => Seed::from_clock(),
            SeedSource::Text(text) => Seed::from_text(text),
            SeedSource::Number(value) => Seed::from_f64(*value),
        }
    }
}

impl Default for SeedSource {
    fn default() -> Self {
        SeedSource::Text("tilegen".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    pub name: String,
    pub seed: SeedSource,
    pub algorithm: Algorithm,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            name: "layer".to_string(),
            seed: SeedSource::default(),
            algorithm: Algorithm::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    // Print the level to stdout
    pub ascii: bool,
    // Write a PNG of the stacked layers
    pub png: Option<PathBuf>,
    // Pixels per tile in the PNG
    pub scale: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            ascii: true,
            png: None,
            scale: 4,
        }
    }
}

// A whole level: every layer shares the width and height and is stacked top to bottom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub width: usize,
    pub height: usize,
    pub layers: Vec<LayerConfig>,
    pub output: OutputConfig,
    pub log_level: String,
    pub max_walk_steps: Option<u64>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 30,
            layers: vec![
                LayerConfig {
                    name: "surface".to_string(),
                    seed: SeedSource::Text("surface".to_string()),
                    algorithm: Algorithm::WalkSurfaceSmooth(WalkSurfaceSmooth::default()),
                },
                LayerConfig {
                    name: "caves".to_string(),
                    seed: SeedSource::Text("caves".to_string()),
                    algorithm: Algorithm::CellularMoore(CellularMoore::default()),
                },
            ],
            output: OutputConfig::default(),
            log_level: "info".to_string(),
            max_walk_steps: None,
        }
    }
}

impl LevelConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(ConfigError::Read)?;
        ron::from_str(&contents).map_err(ConfigError::Parse)
    }

    // No path means the built-in two-layer level
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }
        let pretty = ron::ser::PrettyConfig::new().depth_limit(4);
        let text = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;
        fs::write(path, text).map_err(ConfigError::Write)
    }
}
