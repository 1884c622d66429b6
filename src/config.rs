//! Optional project configuration (tetris-weather.yaml).
//!
//! Every field is optional; a missing file means the defaults, which
//! reproduce the no-argument run: all four scenes written to the current
//! directory and rasterized with ImageMagick's `convert`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::convert::DEFAULT_PROGRAM;
use crate::error::{Result, WeatherError};
use crate::types::Palette;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "tetris-weather.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output directory for generated files.
    pub output: PathBuf,

    /// Raster converter program.
    pub converter: String,

    /// Whether to rasterize at all.
    pub raster: bool,

    /// Palette overrides: code -> hex colour, or `none` for empty.
    pub palette: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            converter: DEFAULT_PROGRAM.to_string(),
            raster: true,
            palette: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| WeatherError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| WeatherError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })?;

        if config.converter.trim().is_empty() {
            return Err(WeatherError::Config {
                message: "converter must not be empty".to_string(),
                help: Some("Set `raster: false` to skip conversion instead".to_string()),
            });
        }

        Ok(config)
    }

    /// Load `path` if given, else `tetris-weather.yaml` in `dir` if present,
    /// else the defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// The weather palette with this config's overrides applied.
    pub fn palette(&self) -> Result<Palette> {
        self.palette
            .iter()
            .try_fold(Palette::weather(), |palette, (code, value)| {
                palette.with_override(code, value)
            })
    }
}
