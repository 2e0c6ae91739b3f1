//! Indicator theme and the visual state derived from it

use crate::color::HexColor;
use crate::constants::{
    ACCENT_COLOR, ACCENT_TEXT_COLOR, ACTIVE_GLOW, GLOW_OFF_COLOR, INACTIVE_COLOR,
    INACTIVE_TEXT_COLOR,
};
use serde::{Deserialize, Serialize};

/// Colors and glow used to draw indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorTheme {
    /// Border and icon color while on
    pub accent: HexColor,
    /// Border and icon color while off
    pub inactive: HexColor,
    /// Label color while on
    pub accent_text: HexColor,
    /// Label color while off
    pub inactive_text: HexColor,
    /// Glow color while off
    pub glow_off: HexColor,
    /// Glow radius while on
    pub active_glow: u8,
}

impl Default for IndicatorTheme {
    fn default() -> Self {
        Self {
            accent: ACCENT_COLOR,
            inactive: INACTIVE_COLOR,
            accent_text: ACCENT_TEXT_COLOR,
            inactive_text: INACTIVE_TEXT_COLOR,
            glow_off: GLOW_OFF_COLOR,
            active_glow: ACTIVE_GLOW,
        }
    }
}

impl IndicatorTheme {
    /// Derive every visual attribute of an indicator from its state.
    pub fn visual(&self, is_on: bool) -> IndicatorVisual {
        if is_on {
            IndicatorVisual {
                is_on,
                border_color: self.accent,
                text_color: self.accent_text,
                glow_radius: self.active_glow,
                glow_color: self.accent,
            }
        } else {
            IndicatorVisual {
                is_on,
                border_color: self.inactive,
                text_color: self.inactive_text,
                glow_radius: 0,
                glow_color: self.glow_off,
            }
        }
    }
}

/// Complete visual state of one indicator.
///
/// Always produced by [`IndicatorTheme::visual`], so every field reflects the
/// same `is_on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndicatorVisual {
    pub is_on: bool,
    pub border_color: HexColor,
    pub text_color: HexColor,
    pub glow_radius: u8,
    pub glow_color: HexColor,
}
