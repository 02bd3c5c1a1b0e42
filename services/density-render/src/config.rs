//! Render driver configuration.

use density_common::{Viewport, ViewportError};
use renderer::color::ColorParseError;
use renderer::mapping::MappingParseError;
use renderer::png::CompressionLevel;
use renderer::{Color, MappingKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How input samples are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SampleMode {
    /// Standard-normal x and y around the origin.
    #[default]
    Gaussian,
    /// Longitude/latitude samples projected with Mercator.
    Geographic,
}

/// Configuration for one render run.
///
/// String-typed fields (mapping, background, compression) are kept as
/// written so the config round-trips through JSON; [`RenderConfig::validate`]
/// parses all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels.
    pub width: u32,

    /// Output height in pixels.
    pub height: u32,

    /// Viewport bounds in plane coordinates.
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,

    /// Number of batches aggregated one after another.
    pub batches: usize,

    /// Points per batch.
    pub batch_size: usize,

    /// Spread radius (0 disables spreading).
    pub spread: u8,

    /// Color mapping: `default` or `simple:#rrggbb`.
    pub mapping: String,

    /// Background color the rendered layer is composited onto.
    pub background: String,

    /// PNG compression: `fast`, `default` or `best`.
    pub compression: String,

    pub mode: SampleMode,

    /// RNG seed; random when unset.
    pub seed: Option<u64>,

    /// Output PNG path.
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            min_x: -5.0,
            max_x: 5.0,
            min_y: -5.0,
            max_y: 5.0,
            batches: 100,
            batch_size: 1000,
            spread: 1,
            mapping: "default".to_string(),
            background: "#000000".to_string(),
            compression: "best".to_string(),
            mode: SampleMode::Gaussian,
            seed: None,
            output: PathBuf::from("output.png"),
        }
    }
}

impl RenderConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Set the viewport from a "minx,miny,maxx,maxy" string.
    pub fn set_bounds(&mut self, bounds: &str) -> Result<(), ConfigError> {
        let viewport = Viewport::parse(bounds)?;
        self.min_x = viewport.min_x();
        self.max_x = viewport.max_x();
        self.min_y = viewport.min_y();
        self.max_y = viewport.max_y();
        Ok(())
    }

    pub fn viewport(&self) -> Result<Viewport, ConfigError> {
        Ok(Viewport::new(self.min_x, self.max_x, self.min_y, self.max_y)?)
    }

    pub fn mapping_kind(&self) -> Result<MappingKind, ConfigError> {
        Ok(self.mapping.parse()?)
    }

    pub fn background_color(&self) -> Result<Color, ConfigError> {
        Ok(self.background.parse()?)
    }

    pub fn compression_level(&self) -> Result<CompressionLevel, ConfigError> {
        self.compression
            .parse()
            .map_err(ConfigError::Compression)
    }

    /// Total number of samples generated.
    pub fn total_points(&self) -> usize {
        self.batches.saturating_mul(self.batch_size)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "resolution must be > 0, got {}x{}",
                self.width, self.height
            )));
        }

        if self.batch_size == 0 {
            return Err(ConfigError::Invalid("batch_size must be > 0".to_string()));
        }

        self.viewport()?;
        self.mapping_kind()?;
        self.background_color()?;
        self.compression_level()?;

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Viewport(#[from] ViewportError),

    #[error(transparent)]
    Mapping(#[from] MappingParseError),

    #[error("invalid background: {0}")]
    Background(#[from] ColorParseError),

    #[error("{0}")]
    Compression(String),
}
