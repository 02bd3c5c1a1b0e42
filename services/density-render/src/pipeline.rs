//! Sample, aggregate, spread, render, composite and encode.

use crate::config::RenderConfig;
use crate::sampler::Sampler;
use anyhow::{Context, Result};
use density_common::Cartesian;
use renderer::composite::composite_over;
use renderer::png::encode_pixel_grid;
use renderer::{ColorMapping, Scene};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// What a render run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    /// Points generated.
    pub points: u64,
    /// Points that landed inside the viewport before spreading.
    pub aggregated: u64,
    /// Densest cell after spreading.
    pub max_count: u64,
    /// Encoded PNG size in bytes.
    pub png_bytes: usize,
}

/// Run the whole pipeline and return the encoded PNG.
pub fn render_to_png(config: &RenderConfig) -> Result<(Vec<u8>, RenderSummary)> {
    config.validate().context("invalid render configuration")?;

    let viewport = config.viewport()?;
    let mapping = config.mapping_kind()?;
    let background = config.background_color()?;
    let level = config.compression_level()?;

    let mut scene = Scene::new(config.width, config.height, viewport)
        .context("failed to create scene")?;
    let mut sampler = Sampler::new(config.mode, config.seed);
    let mut batch = vec![Cartesian::default(); config.batch_size];

    let start = Instant::now();
    for i in 0..config.batches {
        sampler
            .fill(&mut batch)
            .with_context(|| format!("failed to sample batch {}", i))?;
        scene.aggregate(&batch);
    }
    let aggregated = scene.total_count();
    debug!(
        batches = config.batches,
        batch_size = config.batch_size,
        aggregated,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Aggregated samples"
    );

    if config.spread > 0 {
        scene.spread(config.spread);
    }

    let layer = render_layer(&scene, &mapping)?;
    let image = composite_over(&layer, background);
    let png = encode_pixel_grid(&image, level).context("failed to encode PNG")?;

    let summary = RenderSummary {
        points: config.total_points() as u64,
        aggregated,
        max_count: scene.max_count(),
        png_bytes: png.len(),
    };
    info!(
        width = config.width,
        height = config.height,
        mapping = %mapping,
        points = summary.points,
        aggregated = summary.aggregated,
        max_count = summary.max_count,
        png_bytes = summary.png_bytes,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Rendered density field"
    );

    Ok((png, summary))
}

/// Run the pipeline and write the PNG to `config.output`.
pub fn render_to_file(config: &RenderConfig) -> Result<RenderSummary> {
    let (png, summary) = render_to_png(config)?;
    write_png(&config.output, &png)?;
    info!(path = %config.output.display(), "Wrote image");
    Ok(summary)
}

fn render_layer<M: ColorMapping + ?Sized>(scene: &Scene, mapping: &M) -> Result<renderer::PixelGrid> {
    scene.render(mapping).context("color mapping failed")
}

fn write_png(path: &Path, png: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, png).with_context(|| format!("failed to write {}", path.display()))
}
