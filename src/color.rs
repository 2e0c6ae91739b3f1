//! Hex color values shared by the theme, icons and display surfaces

use crate::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB color written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for HexColor {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ConsoleError::InvalidColor {
            value: s.to_string(),
        };

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ConsoleError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl From<HexColor> for ratatui::style::Color {
    fn from(color: HexColor) -> Self {
        ratatui::style::Color::Rgb(color.r, color.g, color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercase_and_uppercase() {
        assert_eq!("#00e6ff".parse::<HexColor>().unwrap(), HexColor::rgb(0, 0xe6, 0xff));
        assert_eq!("#00E6FF".parse::<HexColor>().unwrap(), HexColor::rgb(0, 0xe6, 0xff));
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(HexColor::rgb(0x3a, 0x3e, 0x43).to_string(), "#3a3e43");
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["00e6ff", "#00e6f", "#00e6ffa", "#gg0000", "", "#ééé", "#+f+f+f"] {
            assert!(bad.parse::<HexColor>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_config_rejects_signed_digits() {
        let err = crate::config::Config::from_toml(
            "[theme]\naccent = \"#+0+0+0\"\n",
            std::path::Path::new("test.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, ConsoleError::ConfigParse { .. }));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&HexColor::rgb(0x1a, 0x1e, 0x23)).unwrap();
        assert_eq!(json, "\"#1a1e23\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HexColor::rgb(0x1a, 0x1e, 0x23));
    }
}
