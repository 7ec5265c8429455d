//! Display colors for poles and rendered pixels.
//!
//! Colors are plain sRGB triples in [0, 1], the same convention the rendered
//! [`RgbImage`](crate::image::RgbImage) uses for its channels.

use crate::error::BasinError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`. The hex round-trip quantizes to
/// 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Color of escaped and timed-out pixels.
    pub const WHITE: Srgb = Srgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const RED: Srgb = Srgb {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Srgb = Srgb {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };

    /// Creates a color, rejecting components that are NaN or outside [0, 1].
    pub fn new(r: f64, g: f64, b: f64) -> Result<Srgb, BasinError> {
        for (name, c) in [("red", r), ("green", g), ("blue", b)] {
            if !(0.0..=1.0).contains(&c) {
                return Err(BasinError::InvalidColor(format!(
                    "{name} component {c} outside [0, 1]"
                )));
            }
        }
        Ok(Srgb { r, g, b })
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    pub fn from_hex(hex: &str) -> Result<Srgb, BasinError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(BasinError::InvalidColor(format!(
                "expected 6 hex digits, got '{hex}'"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|e| BasinError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Srgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Quantizes to 8 bits per channel with rounding.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Formats the color as `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Components as an `[r, g, b]` array.
    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_unit_cube() {
        let c = Srgb::new(0.0, 0.5, 1.0).unwrap();
        assert_eq!(c.to_array(), [0.0, 0.5, 1.0]);
    }

    #[test]
    fn new_rejects_out_of_range_component() {
        assert!(matches!(
            Srgb::new(1.2, 0.0, 0.0),
            Err(BasinError::InvalidColor(_))
        ));
        assert!(Srgb::new(0.0, -0.1, 0.0).is_err());
    }

    #[test]
    fn new_rejects_nan() {
        assert!(Srgb::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn from_hex_with_and_without_hash() {
        assert_eq!(Srgb::from_hex("#ff0000").unwrap(), Srgb::RED);
        assert_eq!(Srgb::from_hex("00FF00").unwrap(), Srgb::GREEN);
    }

    #[test]
    fn from_hex_rejects_bad_length() {
        assert!(Srgb::from_hex("#fff").is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert!(Srgb::from_hex("#gg0000").is_err());
    }

    #[test]
    fn from_hex_rejects_multibyte_input() {
        assert!(Srgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn to_rgb8_rounds_and_clamps() {
        let c = Srgb {
            r: 0.5,
            g: 1.5,
            b: -0.2,
        };
        assert_eq!(c.to_rgb8(), [128, 255, 0]);
    }

    #[test]
    fn to_hex_formats_lowercase() {
        assert_eq!(Srgb::BLUE.to_hex(), "#0000ff");
        assert_eq!(Srgb::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Srgb::RED).unwrap();
        assert_eq!(json, "\"#ff0000\"");
        let back: Srgb = serde_json::from_str("\"#0000ff\"").unwrap();
        assert_eq!(back, Srgb::BLUE);
    }

    #[test]
    fn serde_rejects_invalid_hex() {
        assert!(serde_json::from_str::<Srgb>("\"blue\"").is_err());
    }
}
