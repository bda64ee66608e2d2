//! Theme support for the UniLink client.
//!
//! The store only knows a [`ThemeMode`]; this module maps each mode to a full
//! color palette and applies it to egui visuals.
//!
//! # Examples
//!
//! ```
//! use unilink::theme::{ThemeManager, ThemeMode};
//!
//! let manager = ThemeManager::new();
//! let dark = manager.theme(ThemeMode::Dark);
//! println!("Dark background: {:?}", dark.colors.background);
//! ```

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Light/dark preference held by the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color palette covering the navbar, pages and overlays.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Backgrounds
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    /// Brand color (logo, "View Profile", active indicator accents)
    pub primary: Color32,
    /// Soft brand tint used behind the search box
    pub primary_soft: Color32,
    /// Notification badge
    pub badge: Color32,
    pub error: Color32,
    pub warning: Color32,
}

/// A mode together with its palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    pub description: String,
    pub colors: ThemeColors,
}

/// Holds the palette for each mode.
pub struct ThemeManager {
    light: Theme,
    dark: Theme,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            light: light_theme(),
            dark: dark_theme(),
        }
    }

    /// Palette for a mode.
    pub fn theme(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Builds egui visuals for a mode, starting from egui's own light/dark base.
    pub fn visuals(&self, mode: ThemeMode) -> egui::Visuals {
        let mut visuals = if mode.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        self.apply_theme(self.theme(mode), &mut visuals);
        visuals
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.primary;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.primary;

        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        mode: ThemeMode::Light,
        description: "White surfaces on a light grey page".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#f4f2ee"),
            panel_background: hex_to_color32("#ffffff"),
            extreme_background: hex_to_color32("#ffffff"),

            text: hex_to_color32("#191919"),
            text_dim: hex_to_color32("#666666"),
            text_strong: hex_to_color32("#000000"),

            selection: hex_to_color32("#d0e3f7"),
            hover: hex_to_color32("#ebebeb"),
            border: hex_to_color32("#e0e0e0"),

            primary: hex_to_color32("#0a66c2"),
            primary_soft: hex_to_color32("#edf3f8"),
            badge: hex_to_color32("#cc1016"),
            error: hex_to_color32("#cc1016"),
            warning: hex_to_color32("#b24020"),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        mode: ThemeMode::Dark,
        description: "Dark grey surfaces with light text".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#1b1f23"),
            panel_background: hex_to_color32("#1d2226"),
            extreme_background: hex_to_color32("#000000"),

            text: hex_to_color32("#e6e6e6"),
            text_dim: hex_to_color32("#a0a0a0"),
            text_strong: hex_to_color32("#ffffff"),

            selection: hex_to_color32("#2b3f55"),
            hover: hex_to_color32("#38434f"),
            border: hex_to_color32("#38434f"),

            primary: hex_to_color32("#71b7fb"),
            primary_soft: hex_to_color32("#38434f"),
            badge: hex_to_color32("#f5987e"),
            error: hex_to_color32("#f5987e"),
            warning: hex_to_color32("#e7a33e"),
        },
    }
}

/// Converts a hex color string (like "#0a66c2") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let m: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(m, ThemeMode::Light);
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#0a66c2"), Color32::from_rgb(10, 102, 194));
        assert_eq!(hex_to_color32("bad"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_visuals_follow_mode() {
        let manager = ThemeManager::new();
        assert!(manager.visuals(ThemeMode::Dark).dark_mode);
        assert!(!manager.visuals(ThemeMode::Light).dark_mode);
        assert_eq!(
            manager.visuals(ThemeMode::Light).panel_fill,
            manager.theme(ThemeMode::Light).colors.panel_background
        );
    }
}
