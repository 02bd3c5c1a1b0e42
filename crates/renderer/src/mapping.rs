//! Color mappings from hit counts to pixel colors.
//!
//! Two mappings are provided:
//! - [`SimpleMapping`]: every cell with at least one hit gets a fixed color.
//! - [`LogarithmicMapping`]: a heat scale over `ln(count) / ln(max_count)`,
//!   dark blue -> cyan -> green -> yellow -> white.
//!
//! Cells without hits always map to [`Color::TRANSPARENT`].

use crate::color::{Color, ColorParseError};
use std::fmt;
use std::str::FromStr;

/// Maps a distribution of counts to colors, one per count.
///
/// Implementations must return exactly `counts.len()` colors and must not
/// depend on state mutated between calls.
pub trait ColorMapping {
    fn map(&self, counts: &[u64]) -> Vec<Color>;
}

impl<F> ColorMapping for F
where
    F: Fn(&[u64]) -> Vec<Color>,
{
    fn map(&self, counts: &[u64]) -> Vec<Color> {
        self(counts)
    }
}

/// Presence/absence mapping with a fixed foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleMapping {
    foreground: Color,
}

impl SimpleMapping {
    pub fn new(foreground: Color) -> Self {
        Self { foreground }
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }
}

impl ColorMapping for SimpleMapping {
    fn map(&self, counts: &[u64]) -> Vec<Color> {
        counts
            .iter()
            .map(|&count| {
                if count > 0 {
                    self.foreground
                } else {
                    Color::TRANSPARENT
                }
            })
            .collect()
    }
}

/// Logarithmic heat scale, normalized to the largest count present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogarithmicMapping;

impl ColorMapping for LogarithmicMapping {
    fn map(&self, counts: &[u64]) -> Vec<Color> {
        let max = counts.iter().copied().max().unwrap_or(0);

        // Empty scene: ln(0) is -inf and every ratio would be NaN.
        if max == 0 {
            return vec![Color::TRANSPARENT; counts.len()];
        }

        let max_log = (max as f64).ln();

        counts
            .iter()
            .map(|&count| {
                let count_log = (count as f64).ln();
                if !count_log.is_finite() {
                    return Color::TRANSPARENT;
                }

                // With max == 1 every hit is as dense as the densest cell.
                let frac = if max_log > 0.0 {
                    count_log / max_log
                } else {
                    1.0
                };
                ramp_color(frac)
            })
            .collect()
    }
}

/// Position `frac` on the heat ramp as an opaque color.
///
/// | frac         | R           | G        | B                 |
/// |--------------|-------------|----------|-------------------|
/// | [0, 0.25]    | 0           | 4f       | 1                 |
/// | (0.25, 0.5]  | 0           | 1        | 1 - 4(f - 0.25)   |
/// | (0.5, 0.75]  | 4(f - 0.5)  | 1        | 0                 |
/// | (0.75, 1]    | 1           | 1        | 4(f - 0.75)       |
/// | > 1          | 1           | 1        | 1                 |
///
/// Channels are scaled by 255, rounded, then clamped to `[0, 255]`.
pub fn ramp_color(frac: f64) -> Color {
    let (red, green, blue) = if frac <= 0.25 {
        (0.0, 4.0 * frac, 1.0)
    } else if frac <= 0.5 {
        (0.0, 1.0, 1.0 - 4.0 * (frac - 0.25))
    } else if frac <= 0.75 {
        (4.0 * (frac - 0.5), 1.0, 0.0)
    } else if frac <= 1.0 {
        (1.0, 1.0, 4.0 * (frac - 0.75))
    } else {
        (1.0, 1.0, 1.0)
    };

    Color::opaque(channel(red), channel(green), channel(blue))
}

#[inline]
fn channel(value: f64) -> u8 {
    (255.0 * value).round().clamp(0.0, 255.0) as u8
}

/// Simple mapping that paints every hit cell with `(red, green, blue)`.
pub fn simple_mapping(red: u8, green: u8, blue: u8) -> SimpleMapping {
    SimpleMapping::new(Color::opaque(red, green, blue))
}

/// The logarithmic heat-scale mapping.
pub fn default_mapping() -> LogarithmicMapping {
    LogarithmicMapping
}

/// A mapping chosen by name, e.g. from a command line.
///
/// Accepted forms: `default`, `log`, `logarithmic`, `simple` (white) and
/// `simple:#rrggbb`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MappingKind {
    #[default]
    Logarithmic,
    Simple(Color),
}

impl ColorMapping for MappingKind {
    fn map(&self, counts: &[u64]) -> Vec<Color> {
        match self {
            MappingKind::Logarithmic => LogarithmicMapping.map(counts),
            MappingKind::Simple(color) => SimpleMapping::new(*color).map(counts),
        }
    }
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingKind::Logarithmic => write!(f, "default"),
            MappingKind::Simple(color) => write!(f, "simple:{}", color),
        }
    }
}

impl FromStr for MappingKind {
    type Err = MappingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "default" | "log" | "logarithmic" => return Ok(Self::Logarithmic),
            "simple" => return Ok(Self::Simple(Color::WHITE)),
            _ => {}
        }

        match s.split_once(':') {
            Some((kind, color)) if kind.eq_ignore_ascii_case("simple") => {
                let mut color: Color = color.parse()?;
                color.a = 255;
                Ok(Self::Simple(color))
            }
            _ => Err(MappingParseError::UnknownMapping(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingParseError {
    #[error("unknown color mapping: {0}. Expected 'default' or 'simple:#rrggbb'")]
    UnknownMapping(String),

    #[error(transparent)]
    Color(#[from] ColorParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_anchor_points() {
        assert_eq!(ramp_color(0.0), Color::opaque(0, 0, 255));
        assert_eq!(ramp_color(0.25), Color::opaque(0, 255, 255));
        assert_eq!(ramp_color(0.5), Color::opaque(0, 255, 0));
        assert_eq!(ramp_color(0.75), Color::opaque(255, 255, 0));
        assert_eq!(ramp_color(1.0), Color::opaque(255, 255, 255));
        assert_eq!(ramp_color(1.5), Color::opaque(255, 255, 255));
    }

    #[test]
    fn test_ramp_midpoints_round() {
        // 4 * 0.125 * 255 = 127.5 rounds away from zero
        assert_eq!(ramp_color(0.125), Color::opaque(0, 128, 255));
        assert_eq!(ramp_color(0.375), Color::opaque(0, 255, 128));
        assert_eq!(ramp_color(0.625), Color::opaque(128, 255, 0));
        assert_eq!(ramp_color(0.875), Color::opaque(255, 255, 128));
    }

    #[test]
    fn test_ramp_clamps_negative() {
        assert_eq!(ramp_color(-1.0), Color::opaque(0, 0, 255));
    }

    #[test]
    fn test_simple_mapping() {
        let colors = simple_mapping(10, 20, 30).map(&[0, 1, 0, 99]);
        let fg = Color::opaque(10, 20, 30);
        assert_eq!(colors, vec![Color::TRANSPARENT, fg, Color::TRANSPARENT, fg]);
    }

    #[test]
    fn test_parse_mapping_kind() {
        assert_eq!("default".parse::<MappingKind>(), Ok(MappingKind::Logarithmic));
        assert_eq!("LOG".parse::<MappingKind>(), Ok(MappingKind::Logarithmic));
        assert_eq!("simple".parse::<MappingKind>(), Ok(MappingKind::Simple(Color::WHITE)));
        assert_eq!(
            "simple:#ff0000".parse::<MappingKind>(),
            Ok(MappingKind::Simple(Color::opaque(255, 0, 0)))
        );
        assert!(matches!(
            "viridis".parse::<MappingKind>(),
            Err(MappingParseError::UnknownMapping(_))
        ));
        assert!(matches!(
            "simple:red".parse::<MappingKind>(),
            Err(MappingParseError::Color(_))
        ));
    }

    #[test]
    fn test_mapping_kind_display_roundtrips() {
        for kind in [MappingKind::Logarithmic, MappingKind::Simple(Color::opaque(1, 2, 3))] {
            assert_eq!(kind.to_string().parse::<MappingKind>().unwrap(), kind);
        }
    }
}
