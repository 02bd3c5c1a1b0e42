//! PNG encoding for RGBA pixel grids.
//!
//! Writes truecolor-with-alpha PNGs (color type 6, 8 bits per channel)
//! with unfiltered scanlines, deflated by `flate2`.

use crate::color::PixelGrid;
use crate::error::RenderError;
use std::io::Write;

/// PNG file signature.
const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Deflate effort for the IDAT stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompressionLevel {
    Fast,
    #[default]
    Default,
    Best,
}

impl CompressionLevel {
    fn to_flate2(self) -> flate2::Compression {
        match self {
            CompressionLevel::Fast => flate2::Compression::fast(),
            CompressionLevel::Default => flate2::Compression::default(),
            CompressionLevel::Best => flate2::Compression::best(),
        }
    }
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "default" => Ok(Self::Default),
            "best" => Ok(Self::Best),
            other => Err(format!("unknown compression level: {}", other)),
        }
    }
}

/// Encode a pixel grid as PNG.
pub fn encode_pixel_grid(
    grid: &PixelGrid,
    level: CompressionLevel,
) -> Result<Vec<u8>, RenderError> {
    create_png(
        &grid.to_rgba_bytes(),
        grid.width() as usize,
        grid.height() as usize,
        level,
    )
}

/// Create a PNG image from RGBA pixel data (color type 6).
///
/// # Arguments
/// - `pixels`: RGBA pixel data (4 bytes per pixel), row-major
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
/// - `level`: Deflate compression level
pub fn create_png(
    pixels: &[u8],
    width: usize,
    height: usize,
    level: CompressionLevel,
) -> Result<Vec<u8>, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::Encode(format!(
            "image dimensions must be non-zero, got {}x{}",
            width, height
        )));
    }

    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| RenderError::Encode(format!("image of {}x{} is too large", width, height)))?;
    if pixels.len() != expected {
        return Err(RenderError::Encode(format!(
            "expected {} bytes of RGBA data for {}x{}, got {}",
            expected,
            width,
            height,
            pixels.len()
        )));
    }

    let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(RenderError::Encode(format!(
                "image of {}x{} exceeds PNG limits",
                width, height
            )))
        }
    };

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    // IHDR chunk
    let mut ihdr_data = Vec::with_capacity(13);
    ihdr_data.extend_from_slice(&w.to_be_bytes());
    ihdr_data.extend_from_slice(&h.to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(6); // color type (RGBA)
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // IDAT chunk (image data)
    let idat_data = deflate_idat_rgba(pixels, width, height, level)
        .map_err(|e| RenderError::Encode(format!("IDAT compression failed: {}", e)))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Write a PNG chunk: length, type, data, CRC over type and data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Deflate RGBA image data for the IDAT chunk.
fn deflate_idat_rgba(
    pixels: &[u8],
    width: usize,
    height: usize,
    level: CompressionLevel,
) -> std::io::Result<Vec<u8>> {
    let stride = width * 4;
    let mut encoder = flate2::write::ZlibEncoder::new(
        Vec::with_capacity(height * (1 + stride) / 2),
        level.to_flate2(),
    );

    for row in pixels.chunks_exact(stride) {
        encoder.write_all(&[0])?; // filter type: none
        encoder.write_all(row)?;
    }

    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_png_structure() {
        let pixels = [255, 0, 0, 255, 0, 0, 0, 0];
        let png = create_png(&pixels, 2, 1, CompressionLevel::Fast).unwrap();

        assert_eq!(&png[0..8], &PNG_SIGNATURE);
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 2);
        assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), 1);
        assert_eq!(png[24], 8);
        assert_eq!(png[25], 6);
        assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
    }

    #[test]
    fn test_ihdr_crc() {
        let png = create_png(&[0; 4], 1, 1, CompressionLevel::Default).unwrap();
        let crc = u32::from_be_bytes([png[29], png[30], png[31], png[32]]);
        assert_eq!(crc, crc32fast::hash(&png[12..29]));
    }

    #[test]
    fn test_idat_inflates_to_filtered_scanlines() {
        let pixels: Vec<u8> = (0..2 * 2 * 4).map(|i| i as u8).collect();
        let png = create_png(&pixels, 2, 2, CompressionLevel::Best).unwrap();

        // Signature (8) + IHDR (12 + 13) puts IDAT's length at 33.
        let len = u32::from_be_bytes([png[33], png[34], png[35], png[36]]) as usize;
        assert_eq!(&png[37..41], b"IDAT");
        let mut decoder = flate2::read::ZlibDecoder::new(&png[41..41 + len]);
        let mut raw = Vec::new();
        decoder.read_to_end(&mut raw).unwrap();

        let mut expected = vec![0];
        expected.extend_from_slice(&pixels[0..8]);
        expected.push(0);
        expected.extend_from_slice(&pixels[8..16]);
        assert_eq!(raw, expected);
    }

    #[test]
    fn test_rejects_wrong_buffer_length() {
        let err = create_png(&[0; 7], 1, 2, CompressionLevel::Fast).unwrap_err();
        assert!(matches!(err, RenderError::Encode(_)));
    }

    #[test]
    fn test_rejects_empty_image() {
        assert!(create_png(&[], 0, 0, CompressionLevel::Fast).is_err());
    }
}
