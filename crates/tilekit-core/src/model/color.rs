//! RGB colors for tiles and grout.

use crate::error::DesignError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 24-bit RGB color, serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Named swatches offered next to the free color pickers.
pub const SWATCHES: [(&str, Rgb); 7] = [
    ("white", Rgb::new(0xFF, 0xFF, 0xFF)),
    ("bone", Rgb::new(0xE3, 0xDA, 0xC9)),
    ("beige", Rgb::new(0xF5, 0xF5, 0xDC)),
    ("light-gray", Rgb::new(0xCC, 0xCC, 0xCC)),
    ("gray", Rgb::new(0x80, 0x80, 0x80)),
    ("charcoal", Rgb::new(0x36, 0x45, 0x4F)),
    ("black", Rgb::new(0x00, 0x00, 0x00)),
];

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Look up a named swatch (`light-gray`, `light gray` and `lightgray` all match).
    pub fn from_swatch(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        SWATCHES
            .iter()
            .find(|(swatch, _)| swatch.replace('-', "") == normalized)
            .map(|(_, color)| *color)
    }

    /// Shift every channel by the same amount, saturating at 0 and 255.
    pub fn shifted(self, delta: i16) -> Self {
        let shift = |c: u8| (c as i16 + delta).clamp(0, 255) as u8;
        Self::new(shift(self.r), shift(self.g), shift(self.b))
    }
}

impl FromStr for Rgb {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
            .or_else(|| Self::from_swatch(s))
            .ok_or_else(|| DesignError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Rgb {
    type Error = DesignError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
