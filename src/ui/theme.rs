//! Color themes for the to-do screen.
//!
//! Provides:
//! - Theme struct with all UI colors
//! - Built-in presets (slate, paper, nord, gruvbox)
//! - Hex color parsing for config overrides

use ratatui::style::Color;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main background color
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Background for the selected row
    pub selection_bg: Color,
    /// Text color for the selected row
    pub selection_fg: Color,
    /// Accent color (borders, enabled add affordance)
    pub accent: Color,
    /// Dimmed text (hints, placeholder, disabled affordances)
    pub dimmed: Color,
    /// Text color for completed items (combined with strikethrough)
    pub done: Color,
    /// Delete affordance color
    pub danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    /// Slate theme - default dark palette
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(24, 26, 31),      // #181a1f
            foreground: Color::Rgb(220, 223, 228),   // #dcdfe4
            selection_bg: Color::Rgb(40, 44, 52),    // #282c34
            selection_fg: Color::Rgb(220, 223, 228), // #dcdfe4
            accent: Color::Rgb(52, 152, 219),        // #3498db
            dimmed: Color::Rgb(120, 126, 138),       // #787e8a
            done: Color::Rgb(136, 136, 136),         // #888888
            danger: Color::Rgb(231, 76, 60),         // #e74c3c
        }
    }

    /// Paper theme - light palette
    pub fn paper() -> Self {
        Self {
            background: Color::Rgb(245, 245, 245),   // #f5f5f5
            foreground: Color::Rgb(51, 51, 51),      // #333333
            selection_bg: Color::Rgb(224, 228, 234), // #e0e4ea
            selection_fg: Color::Rgb(51, 51, 51),    // #333333
            accent: Color::Rgb(52, 152, 219),        // #3498db
            dimmed: Color::Rgb(136, 136, 136),       // #888888
            done: Color::Rgb(136, 136, 136),         // #888888
            danger: Color::Rgb(231, 76, 60),         // #e74c3c
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),      // #2e3440 (nord0)
            foreground: Color::Rgb(236, 239, 244),   // #eceff4 (nord6)
            selection_bg: Color::Rgb(67, 76, 94),    // #434c5e (nord2)
            selection_fg: Color::Rgb(236, 239, 244), // #eceff4 (nord6)
            accent: Color::Rgb(136, 192, 208),       // #88c0d0 (nord8)
            dimmed: Color::Rgb(76, 86, 106),         // #4c566a (nord3)
            done: Color::Rgb(163, 190, 140),         // #a3be8c (nord14)
            danger: Color::Rgb(191, 97, 106),        // #bf616a (nord11)
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),      // #282828 (bg)
            foreground: Color::Rgb(235, 219, 178),   // #ebdbb2 (fg)
            selection_bg: Color::Rgb(60, 56, 54),    // #3c3836 (bg1)
            selection_fg: Color::Rgb(235, 219, 178), // #ebdbb2 (fg)
            accent: Color::Rgb(215, 153, 33),        // #d79921 (yellow)
            dimmed: Color::Rgb(146, 131, 116),       // #928374 (gray)
            done: Color::Rgb(152, 151, 26),          // #98971a (green)
            danger: Color::Rgb(204, 36, 29),         // #cc241d (red)
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "slate" | "dark" | "default" => Some(Self::slate()),
            "paper" | "light" => Some(Self::paper()),
            "nord" => Some(Self::nord()),
            "gruvbox" | "gruvbox-dark" | "gruvbox_dark" => Some(Self::gruvbox()),
            _ => None,
        }
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');

    let channel = |range: &str| u8::from_str_radix(range, 16).map_err(|_| ColorError::InvalidHex);

    match s.len() {
        // #rgb -> each nibble doubled
        3 => {
            let r = channel(&s[0..1])?;
            let g = channel(&s[1..2])?;
            let b = channel(&s[2..3])?;
            Ok(Color::Rgb(r * 17, g * 17, b * 17))
        }
        // #rrggbb
        6 => Ok(Color::Rgb(
            channel(&s[0..2])?,
            channel(&s[2..4])?,
            channel(&s[4..6])?,
        )),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    InvalidLength,
    InvalidHex,
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorError::InvalidLength => write!(f, "invalid color length (expected 3 or 6 hex chars)"),
            ColorError::InvalidHex => write!(f, "invalid hex character"),
        }
    }
}

impl std::error::Error for ColorError {}

/// Serde deserializer for hex colors
pub mod serde_color {
    use super::*;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) => parse_hex_color(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6() {
        assert_eq!(parse_hex_color("#ff0000"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00ff00"), Ok(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#3498db"), Ok(Color::Rgb(52, 152, 219)));
    }

    #[test]
    fn test_parse_hex_3() {
        assert_eq!(parse_hex_color("#f00"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("0f0"), Ok(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(parse_hex_color("invalid").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
        assert!(parse_hex_color("#ff00").is_err());
    }

    #[test]
    fn test_presets() {
        assert!(Theme::from_preset("slate").is_some());
        assert!(Theme::from_preset("paper").is_some());
        assert!(Theme::from_preset("nord").is_some());
        assert!(Theme::from_preset("gruvbox").is_some());
        assert!(Theme::from_preset("nonexistent").is_none());
    }
}
