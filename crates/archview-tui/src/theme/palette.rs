//! Colour palette.

use archview_core::Tone;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 12, 16);
pub const CARD_BG: Color = Color::Rgb(18, 21, 28);
pub const HOVER_BG: Color = Color::Rgb(30, 36, 48);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(45, 51, 59);
pub const BORDER_ACTIVE: Color = Color::Rgb(88, 166, 255);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(88, 166, 255);
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(201, 209, 217);
pub const TEXT_SECONDARY: Color = Color::Rgb(125, 133, 144);
pub const TEXT_MUTED: Color = Color::Rgb(72, 79, 88);
pub const TEXT_BRIGHT: Color = Color::Rgb(240, 246, 252);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);

/// Accent colour for a diagram tone.
pub fn tone(tone: Tone) -> Color {
    match tone {
        Tone::Green => Color::Rgb(74, 222, 128),
        Tone::Orange => Color::Rgb(251, 146, 60),
        Tone::Purple => Color::Rgb(192, 132, 252),
        Tone::Red => Color::Rgb(248, 113, 113),
        Tone::Blue => Color::Rgb(96, 165, 250),
        Tone::Cyan => Color::Rgb(34, 211, 238),
        Tone::Amber => Color::Rgb(251, 191, 36),
        Tone::Indigo => Color::Rgb(129, 140, 248),
        Tone::Pink => Color::Rgb(244, 114, 182),
        Tone::Emerald => Color::Rgb(52, 211, 153),
        Tone::Yellow => Color::Rgb(250, 204, 21),
        Tone::Slate => Color::Rgb(148, 163, 184),
    }
}
