//! Density-field render driver.
//!
//! Draws synthetic point batches, aggregates them into a scene, spreads,
//! maps the counts to colors and writes the result as a PNG.

use anyhow::Result;
use clap::Parser;
use density_render::{render_to_file, RenderConfig, SampleMode};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "density-render")]
#[command(about = "Render a point-density heat map to PNG")]
struct Args {
    /// JSON configuration file; command-line flags override its values
    #[arg(short, long, env = "DENSITY_CONFIG")]
    config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, env = "DENSITY_OUTPUT")]
    output: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, env = "DENSITY_WIDTH")]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long, env = "DENSITY_HEIGHT")]
    height: Option<u32>,

    /// Viewport as "minx,miny,maxx,maxy"
    #[arg(long, allow_hyphen_values = true, env = "DENSITY_BOUNDS")]
    bounds: Option<String>,

    /// Number of batches
    #[arg(long, env = "DENSITY_BATCHES")]
    batches: Option<usize>,

    /// Points per batch
    #[arg(long, env = "DENSITY_BATCH_SIZE")]
    batch_size: Option<usize>,

    /// Spread radius (0 disables)
    #[arg(long, env = "DENSITY_SPREAD")]
    spread: Option<u8>,

    /// Color mapping: "default" or "simple:#rrggbb"
    #[arg(long, env = "DENSITY_MAPPING")]
    mapping: Option<String>,

    /// Background color as "#rrggbb"
    #[arg(long, env = "DENSITY_BACKGROUND")]
    background: Option<String>,

    /// PNG compression: fast, default or best
    #[arg(long, env = "DENSITY_COMPRESSION")]
    compression: Option<String>,

    /// Sample source
    #[arg(long, value_enum, env = "DENSITY_MODE")]
    mode: Option<SampleMode>,

    /// RNG seed for reproducible output
    #[arg(long, env = "DENSITY_SEED")]
    seed: Option<u64>,

    /// Log level
    #[arg(long, env = "DENSITY_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_json_file(path)?,
            None => RenderConfig::default(),
        };

        if let Some(bounds) = &self.bounds {
            config.set_bounds(bounds)?;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(batches) = self.batches {
            config.batches = batches;
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(spread) = self.spread {
            config.spread = spread;
        }
        if let Some(mapping) = self.mapping {
            config.mapping = mapping;
        }
        if let Some(background) = self.background {
            config.background = background;
        }
        if let Some(compression) = self.compression {
            config.compression = compression;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = args.into_config()?;
    info!(
        width = config.width,
        height = config.height,
        mode = ?config.mode,
        output = %config.output.display(),
        "Starting density render"
    );

    let summary = render_to_file(&config)?;
    info!(
        aggregated = summary.aggregated,
        max_count = summary.max_count,
        "Done"
    );

    Ok(())
}
