//! Configuration types

use serde::{Deserialize, Serialize};

/// Icon rendering mode
///
/// Controls whether the TUI uses Nerd Font glyphs (requires a Nerd Font)
/// or safe Unicode characters (works in all terminals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Capture the mouse for click and hover
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Show the architecture highlight cards under the diagram
    #[serde(default = "default_true")]
    pub show_highlights: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            mouse: true,
            show_highlights: true,
        }
    }
}

fn default_true() -> bool {
    true
}
