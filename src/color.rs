use std::str::FromStr;

use palette::Srgb;
use plotters::style::{RGBAColor, RGBColor};
use plotters::prelude::Color;

use crate::error::{Result, TotemError};

/// Bar opacity for both series, so overlapping bars stay visible.
pub const BAR_ALPHA: f64 = 0.4;

/// Default colour of the first (positive) series.
pub const DEFAULT_VALUE1_HEX: &str = "#263F13";
/// Default colour of the second (mirrored) series.
pub const DEFAULT_VALUE2_HEX: &str = "#77A61D";

// ---------------------------------------------------------------------------
// SeriesColor
// ---------------------------------------------------------------------------

/// A bar series colour and the name the axis label uses for it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesColor {
    pub rgb: Srgb<u8>,
    pub name: String,
}

impl SeriesColor {
    /// Parse `#RRGGBB` (or `RRGGBB`); the hex code doubles as the name.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let rgb = Srgb::<u8>::from_str(hex.trim())
            .map_err(|_| TotemError::InvalidColor(hex.to_string()))?;
        Ok(SeriesColor {
            rgb,
            name: hex.trim().to_ascii_uppercase(),
        })
    }

    fn named(hex: &str, name: &str) -> Self {
        let rgb = Srgb::<u8>::from_str(hex).unwrap_or_else(|_| Srgb::new(0, 0, 0));
        SeriesColor {
            rgb,
            name: name.to_string(),
        }
    }

    pub fn dark_green() -> Self {
        Self::named(DEFAULT_VALUE1_HEX, "Dark Green")
    }

    pub fn light_green() -> Self {
        Self::named(DEFAULT_VALUE2_HEX, "Light Green")
    }

    /// Translucent fill used for the bars.
    pub fn bar_fill(&self) -> RGBAColor {
        RGBColor(self.rgb.red, self.rgb.green, self.rgb.blue).mix(BAR_ALPHA)
    }
}

/// Resolve an optional user colour, falling back to a named default.
pub fn resolve(hex: Option<&str>, default: fn() -> SeriesColor) -> Result<SeriesColor> {
    match hex {
        Some(hex) => SeriesColor::from_hex(hex),
        None => Ok(default()),
    }
}
