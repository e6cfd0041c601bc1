//! Strip configuration: highlight color and slide duration.
//!
//! Configuration can be constructed programmatically or loaded from a
//! TOML file. Colors serialize as `#rrggbb` hex or one of the sixteen
//! named terminal colors.
//!
//! # Example
//!
//! ```
//! use tabslide_core::config::StripConfig;
//!
//! let config = StripConfig::from_toml(r##"
//!     highlight = "#309ad8"
//!     duration_ms = 400
//! "##).expect("config should parse");
//! assert_eq!(config.duration_ms, 400);
//! ```

use std::path::Path;
use std::time::Duration;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{StripError, StripResult};

/// Default highlight color, `#309ad8`.
pub const DEFAULT_HIGHLIGHT: Color = Color::Rgb(0x30, 0x9a, 0xd8);

/// Default slide duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 800;

/// Configuration for the tab strip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StripConfig {
    /// Color of the sliding highlight rectangle.
    #[serde(with = "color_serde")]
    pub highlight: Color,
    /// Duration of one slide in milliseconds. Zero places the highlight
    /// instantly.
    pub duration_ms: u64,
}

impl Default for StripConfig {
    fn default() -> Self {
        StripConfig {
            highlight: DEFAULT_HIGHLIGHT,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

impl StripConfig {
    /// Slide duration as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StripError::InvalidConfig`] when the TOML is malformed
    /// or a color value is not recognized.
    pub fn from_toml(toml_str: &str) -> StripResult<Self> {
        toml::from_str(toml_str).map_err(|e| StripError::InvalidConfig(e.to_string()))
    }

    /// Serializes the configuration to a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`StripError::InvalidConfig`] if serialization fails.
    pub fn to_toml(&self) -> StripResult<String> {
        toml::to_string_pretty(self).map_err(|e| StripError::InvalidConfig(e.to_string()))
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`StripError::Io`] if the file cannot be read and
    /// [`StripError::InvalidConfig`] if it cannot be parsed.
    pub fn load(path: &Path) -> StripResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}

/// Parses a color from `#rrggbb` hex or a named terminal color.
///
/// # Errors
///
/// Returns a description of the problem when the string is not a
/// recognized color.
pub fn parse_color(s: &str) -> Result<Color, String> {
    let lower = s.to_lowercase();
    if let Some(hex) = lower.strip_prefix('#') {
        if hex.len() != 6 {
            return Err(format!("invalid hex color: {s}"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("invalid hex color: {s}"))
        };
        return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
    }
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, color)| *color)
        .ok_or_else(|| format!("unknown color: {s}"))
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("gray", Color::Gray),
    ("darkgray", Color::DarkGray),
    ("lightred", Color::LightRed),
    ("lightgreen", Color::LightGreen),
    ("lightyellow", Color::LightYellow),
    ("lightblue", Color::LightBlue),
    ("lightmagenta", Color::LightMagenta),
    ("lightcyan", Color::LightCyan),
    ("white", Color::White),
];

fn format_color(color: &Color) -> String {
    if let Color::Rgb(r, g, b) = color {
        return format!("#{r:02x}{g:02x}{b:02x}");
    }
    NAMED_COLORS
        .iter()
        .find(|(_, named)| named == color)
        .map_or_else(|| "#000000".to_string(), |(name, _)| (*name).to_string())
}

/// Serde adapter for ratatui colors.
mod color_serde {
    use ratatui::style::Color;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_color(color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_color(&s).map_err(serde::de::Error::custom)
    }
}
