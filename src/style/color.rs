//! Canonical color values and raw-encoding resolution.
//!
//! Extractors report colors in several shapes: absent, a legacy scalar
//! integer, or a sequence of 3-4 numeric channels that may be fractional
//! (0.0-1.0) or byte-valued (0-255). All of them are normalized into the
//! canonical [`Color`] exactly once, at the extractor boundary; the
//! renderers never see a raw encoding.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A canonical color: fully transparent, or an exact RGB value.
///
/// The string form is `transparent` or `#RRGGBB` with uppercase hex digits,
/// and that is also the serde representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Fully transparent
    Transparent,
    /// Opaque RGB
    Rgb(u8, u8, u8),
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::Rgb(0, 0, 0);

    /// Create an opaque RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Normalize a raw extractor color into its canonical value.
    ///
    /// Pure and total: malformed input resolves to black, never an error.
    /// Absent input is transparent; a legacy scalar is black; a channel
    /// sequence is fractional when all of the first three channels are
    /// non-integer numbers within 0.0-1.0, byte-valued otherwise. A fourth
    /// channel equal to exactly zero forces transparency.
    pub fn resolve(raw: Option<&RawColor>) -> Color {
        let Some(raw) = raw else {
            return Color::Transparent;
        };

        match raw {
            RawColor::Scalar(_) => Color::BLACK,
            RawColor::Components(vals) => {
                if vals.len() < 3 {
                    return Color::BLACK;
                }
                if vals.len() == 4 && vals[3].as_f64() == 0.0 {
                    return Color::Transparent;
                }

                let fractional = vals[..3].iter().all(|v| match v {
                    RawComponent::Float(f) => (0.0..=1.0).contains(f),
                    RawComponent::Int(_) => false,
                });

                let channel = |v: &RawComponent| -> u8 {
                    let value = if fractional {
                        v.as_f64() * 255.0
                    } else {
                        v.as_f64()
                    };
                    // trunc-then-clamp; NaN saturates to 0
                    value.trunc().clamp(0.0, 255.0) as u8
                };

                Color::Rgb(channel(&vals[0]), channel(&vals[1]), channel(&vals[2]))
            }
        }
    }

    /// Perceived luminance on the 0-255 scale.
    ///
    /// Transparent is defined as fully light (255.0) so a caller that
    /// computes luminance directly still suppresses the border.
    pub fn luminance(&self) -> f64 {
        match self {
            Color::Transparent => 255.0,
            Color::Rgb(r, g, b) => {
                0.299 * f64::from(*r) + 0.587 * f64::from(*g) + 0.114 * f64::from(*b)
            }
        }
    }

    /// Check if the color is transparent.
    pub fn is_transparent(&self) -> bool {
        matches!(self, Color::Transparent)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Transparent => write!(f, "transparent"),
            Color::Rgb(r, g, b) => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "transparent" {
            return Ok(Color::Transparent);
        }
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("invalid color: {}", s))?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid color: {}", s));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("invalid color: {}", e))
        };
        Ok(Color::Rgb(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// A raw extractor color encoding, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawColor {
    /// Legacy under-specified scalar encoding; always resolves to black
    Scalar(i64),
    /// 3-4 numeric channels
    Components(Vec<RawComponent>),
}

/// A single raw channel value. Integer and float inputs are kept apart
/// because the fractional interpretation applies only to float channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawComponent {
    Int(i64),
    Float(f64),
}

impl RawComponent {
    /// Numeric value regardless of representation.
    pub fn as_f64(&self) -> f64 {
        match self {
            RawComponent::Int(i) => *i as f64,
            RawComponent::Float(f) => *f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(vals: &[RawComponent]) -> RawColor {
        RawColor::Components(vals.to_vec())
    }

    #[test]
    fn test_absent_is_transparent() {
        assert_eq!(Color::resolve(None), Color::Transparent);
    }

    #[test]
    fn test_legacy_scalar_is_black() {
        assert_eq!(Color::resolve(Some(&RawColor::Scalar(16711680))), Color::BLACK);
    }

    #[test]
    fn test_fractional_channels_scale() {
        let raw = components(&[
            RawComponent::Float(1.0),
            RawComponent::Float(0.5),
            RawComponent::Float(0.0),
        ]);
        assert_eq!(Color::resolve(Some(&raw)), Color::Rgb(255, 127, 0));
    }

    #[test]
    fn test_integer_channels_pass_through() {
        // Integer 1s are byte channels, not fractions
        let raw = components(&[
            RawComponent::Int(1),
            RawComponent::Int(1),
            RawComponent::Int(1),
        ]);
        assert_eq!(Color::resolve(Some(&raw)), Color::Rgb(1, 1, 1));

        let raw = components(&[
            RawComponent::Int(255),
            RawComponent::Int(128),
            RawComponent::Int(0),
        ]);
        assert_eq!(Color::resolve(Some(&raw)), Color::Rgb(255, 128, 0));
    }

    #[test]
    fn test_zero_alpha_forces_transparent() {
        let raw = components(&[
            RawComponent::Float(1.0),
            RawComponent::Float(1.0),
            RawComponent::Float(1.0),
            RawComponent::Int(0),
        ]);
        assert_eq!(Color::resolve(Some(&raw)), Color::Transparent);
    }

    #[test]
    fn test_nonzero_alpha_keeps_rgb() {
        let raw = components(&[
            RawComponent::Float(0.0),
            RawComponent::Float(0.0),
            RawComponent::Float(0.0),
            RawComponent::Int(1),
        ]);
        assert_eq!(Color::resolve(Some(&raw)), Color::BLACK);
    }

    #[test]
    fn test_malformed_is_black() {
        let raw = components(&[RawComponent::Int(10)]);
        assert_eq!(Color::resolve(Some(&raw)), Color::BLACK);
        assert_eq!(Color::resolve(Some(&RawColor::Components(vec![]))), Color::BLACK);
    }

    #[test]
    fn test_out_of_range_bytes_clamp() {
        let raw = components(&[
            RawComponent::Int(300),
            RawComponent::Int(-5),
            RawComponent::Float(2.5),
        ]);
        assert_eq!(Color::resolve(Some(&raw)), Color::Rgb(255, 0, 2));
    }

    #[test]
    fn test_display_form() {
        assert_eq!(Color::Transparent.to_string(), "transparent");
        assert_eq!(Color::Rgb(255, 10, 0).to_string(), "#FF0A00");
    }

    #[test]
    fn test_luminance() {
        assert_eq!(Color::Transparent.luminance(), 255.0);
        assert_eq!(Color::Rgb(255, 255, 255).luminance(), 255.0);
        assert_eq!(Color::BLACK.luminance(), 0.0);
    }

    #[test]
    fn test_serde_string_form() {
        let color: Color = serde_json::from_str("\"#FF00AA\"").unwrap();
        assert_eq!(color, Color::Rgb(255, 0, 170));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#FF00AA\"");

        let t: Color = serde_json::from_str("\"transparent\"").unwrap();
        assert!(t.is_transparent());

        assert!(serde_json::from_str::<Color>("\"#GGGGGG\"").is_err());
    }

    #[test]
    fn test_raw_color_untagged_decode() {
        let raw: RawColor = serde_json::from_str("[1.0, 0.5, 0.0]").unwrap();
        assert_eq!(Color::resolve(Some(&raw)), Color::Rgb(255, 127, 0));

        let raw: RawColor = serde_json::from_str("7").unwrap();
        assert!(matches!(raw, RawColor::Scalar(7)));
    }
}
