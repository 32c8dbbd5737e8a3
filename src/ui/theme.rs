//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Two are built in and embedded at compile time;
//! any other can be loaded from a file. Colors are hex strings converted to
//! 24-bit ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `bordeaux`: Dark theme with deep red accents (default)
//! - `bordeaux-light`: Light theme on white
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#f4e4d8"
//! selection_fg = "#1a1012"
//! selection_bg = "#d9a0a8"
//! text_normal = "#e8dcd4"
//! text_dim = "#8c7a76"
//! border = "#4a3034"
//! search_bar_border = "#b0323f"
//! match_highlight_fg = "#1a1012"
//! match_highlight_bg = "#e8c170"
//! empty_state_fg = "#d9a0a8"
//! accent = "#c0394a"
//! chip_active_fg = "#ffffff"
//! chip_active_bg = "#8b0000"
//! rating_fg = "#e8c170"
//! error_fg = "#ff6b6b"
//! ```
//!
//! # Example
//!
//! ```rust
//! use sommelier::ui::theme::Theme;
//!
//! let theme = Theme::from_name("bordeaux-light").unwrap();
//! print!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! assert_eq!(theme.name, "bordeaux-light");
//! ```

use crate::domain::error::{Result, SommelierError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#e8dcd4"). Optional fields
/// default to `None`, allowing themes to opt out of certain styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Query match highlight foreground.
    pub match_highlight_fg: String,
    /// Query match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Active tab and category glyph color.
    pub accent: String,

    /// Active chip (category, sort option) foreground.
    pub chip_active_fg: String,
    /// Active chip background.
    pub chip_active_bg: String,

    /// Star rating color.
    pub rating_fg: String,

    /// Error message color.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `bordeaux`, `bordeaux-light`. Returns `None` for any
    /// other name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "bordeaux" => include_str!("../../themes/bordeaux.toml"),
            "bordeaux-light" => include_str!("../../themes/bordeaux-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SommelierError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed (invalid syntax, missing fields, type mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SommelierError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| SommelierError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Parses `#rrggbb` (the `#` is optional). Malformed input renders white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color escape sequence for a hex color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sommelier::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#8b0000"), "\u{001b}[38;2;139;0;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Bordeaux).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which would be a broken
    /// build asset.
    fn default() -> Self {
        Self::from_name("bordeaux").expect("Built-in bordeaux theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::from_name("bordeaux").unwrap().name, "bordeaux");
        assert_eq!(Theme::from_name("bordeaux-light").unwrap().name, "bordeaux-light");
        assert!(Theme::from_name("merlot").is_none());
        assert!(Theme::from_name("bordeaux-light").unwrap().colors.header_bg.is_none());
    }

    #[test]
    fn theme_file_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let source = include_str!("../../themes/bordeaux.toml").replace("\"bordeaux\"", "\"custom\"");
        file.write_all(source.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn broken_theme_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(SommelierError::Theme(_))));
        assert!(Theme::from_file("/definitely/not/here.toml").is_err());
    }

    #[test]
    fn escape_sequences_use_rgb() {
        assert_eq!(Theme::fg("#8b0000"), "\u{001b}[38;2;139;0;0m");
        assert_eq!(Theme::bg("ffffff"), "\u{001b}[48;2;255;255;255m");
        assert_eq!(Theme::fg("nope"), "\u{001b}[38;2;255;255;255m");
    }
}
