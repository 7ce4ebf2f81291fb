//! RGBA colors used by stylesheets

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An 8-bit RGBA color.
///
/// Serialized as a hex string so palettes read naturally in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string.
    /// Supports formats: #RGB, #RRGGBB, #RRGGBBAA (the `#` is optional)
    pub fn parse(color: &str) -> Result<Self> {
        let trimmed = color.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || Error::InvalidColor(color.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                let short = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1].repeat(2), 16).map_err(|_| invalid())
                };
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Parse a hex literal from a built-in palette, falling back to black.
pub fn hex(color: &str) -> Color {
    Color::parse(color).unwrap_or(Color::rgb(0, 0, 0))
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex("#ffffff"), Color::rgb(255, 255, 255));
        assert_eq!(hex("#000000"), Color::rgb(0, 0, 0));
        assert_eq!(hex("#ff7733"), Color::rgb(0xff, 0x77, 0x33));
    }

    #[test]
    fn test_short_hex() {
        assert_eq!(hex("#fff"), Color::rgb(255, 255, 255));
        assert_eq!(hex("#f73"), Color::rgb(0xff, 0x77, 0x33));
    }

    #[test]
    fn test_hex_with_alpha() {
        let color = hex("#3483fa80");
        assert_eq!(color.a, 0x80);
        assert_eq!(color.to_hex(), "#3483fa80");
    }

    #[test]
    fn test_invalid_colors() {
        assert!(matches!(Color::parse("#12"), Err(Error::InvalidColor(_))));
        assert!(matches!(Color::parse("#gggggg"), Err(Error::InvalidColor(_))));
        assert!(matches!(Color::parse("#ééé"), Err(Error::InvalidColor(_))));
        assert_eq!(hex("nope"), Color::rgb(0, 0, 0));
    }

    #[test]
    fn test_single_optional_hash() {
        assert_eq!(Color::parse("fff").unwrap(), Color::rgb(255, 255, 255));
        assert!(matches!(Color::parse("##fff"), Err(Error::InvalidColor(_))));
        assert!(matches!(Color::parse("###ff7733"), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Color::parse("#00A650").unwrap().to_string(), "#00a650");
    }
}
