//! Theme management and ANSI escape sequence generation.
//!
//! Built-in Catppuccin themes are compiled into the plugin; a custom theme can
//! be loaded from a TOML file with the same shape.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! search_bar_invalid = "#f38ba8"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! rating_fg = "#f9e2af"
//! label_fg = "#cba6f7"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{MovieBrowserError, Result};

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 4] = [
    "catppuccin-mocha",
    "catppuccin-latte",
    "catppuccin-frappe",
    "catppuccin-macchiato",
];

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Theme identifier (e.g., "catppuccin-mocha").
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Header background color, terminal default when unset.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Text color of the selected row.
    pub selection_fg: String,
    /// Background color of the selected row.
    pub selection_bg: String,

    /// Default text color for result rows and details.
    pub text_normal: String,
    /// Footer, captions and loading text.
    pub text_dim: String,

    /// Border lines and column separators.
    pub border: String,

    /// Search box border while the last submission was valid.
    pub search_bar_border: String,
    /// Search box border after a too-short submission.
    pub search_bar_invalid: String,

    /// Text color of fuzzy-matched characters in titles.
    pub match_highlight_fg: String,
    /// Background color of fuzzy-matched characters in titles.
    pub match_highlight_bg: String,

    /// Hint text shown before the first search.
    pub empty_state_fg: String,

    /// Backend and transport error messages.
    pub error_fg: String,
    /// IMDb rating on the details screen.
    pub rating_fg: String,
    /// Field labels on the details screen.
    pub label_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of [`BUILTIN_THEMES`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use moviebrowser::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-mocha").unwrap();
    /// assert_eq!(theme.name, "catppuccin-mocha");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MovieBrowserError::Io`] if the file cannot be read and
    /// [`MovieBrowserError::Theme`] if its contents do not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| MovieBrowserError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
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
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn all_builtin_themes_parse() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn custom_theme_loads_from_file() {
        let mut builtin = Theme::default();
        builtin.name = "custom".to_string();
        builtin.colors.header_bg = Some("#000000".to_string());
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&builtin).unwrap().as_bytes())
            .unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();

        assert_eq!(loaded, builtin);
    }

    #[test]
    fn malformed_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n[colors]\nheader_fg = 3\n")
            .unwrap();

        assert!(matches!(
            Theme::from_file(file.path()),
            Err(MovieBrowserError::Theme(_))
        ));
    }

    #[test]
    fn missing_theme_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            Theme::from_file(dir.path().join("nope.toml")),
            Err(MovieBrowserError::Io(_))
        ));
    }

    #[test]
    fn hex_colors_become_escape_sequences() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("#zz"), "\u{1b}[38;2;255;255;255m");
    }
}
