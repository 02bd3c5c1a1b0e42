//! Alpha compositing of rendered layers.

use crate::color::{Color, PixelGrid};

/// Composite `src` over `dst` with the non-premultiplied "over" operator.
pub fn blend_over(src: Color, dst: Color) -> Color {
    if src.a == 255 || dst.a == 0 {
        return src;
    }
    if src.a == 0 {
        return dst;
    }

    let sa = f32::from(src.a) / 255.0;
    let da = f32::from(dst.a) / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let mix = |s: u8, d: u8| {
        let v = (f32::from(s) * sa + f32::from(d) * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };

    Color::new(
        mix(src.r, dst.r),
        mix(src.g, dst.g),
        mix(src.b, dst.b),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

/// Draw a rendered layer over a uniform background.
///
/// With an opaque background every output pixel is opaque.
pub fn composite_over(layer: &PixelGrid, background: Color) -> PixelGrid {
    let pixels = layer
        .pixels()
        .iter()
        .map(|&px| blend_over(px, background))
        .collect();
    PixelGrid::from_parts(layer.width(), layer.height(), pixels)
}
