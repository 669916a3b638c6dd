//! Semantic style builders.

use archview_core::Tone;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---

pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keycap() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::TEXT_SECONDARY)
}

pub fn bullet() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn close_button() -> Style {
    Style::default()
        .fg(palette::STATUS_RED)
        .bg(palette::CARD_BG)
        .add_modifier(Modifier::BOLD)
}

// --- Tone styles ---

pub fn tone_fg(tone: Tone) -> Style {
    Style::default().fg(palette::tone(tone))
}

pub fn tone_bold(tone: Tone) -> Style {
    tone_fg(tone).add_modifier(Modifier::BOLD)
}

// --- Block builders ---

/// Rounded panel with a dim or accent border.
pub fn glass_block(focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(palette::BORDER_ACTIVE)
    } else {
        Style::default().fg(palette::BORDER_DIM)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(Style::default().bg(palette::CARD_BG))
}

/// Interaction state of a single region while drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Emphasis {
    /// Holds keyboard focus
    pub focused: bool,
    /// Under the mouse pointer
    pub hovered: bool,
    /// Bound to the component whose details are open
    pub selected: bool,
}

impl Emphasis {
    fn border_color(self, tone: Tone) -> Color {
        if self.focused {
            palette::BORDER_ACTIVE
        } else {
            palette::tone(tone)
        }
    }

    fn background(self) -> Color {
        if self.hovered || self.focused {
            palette::HOVER_BG
        } else {
            palette::CARD_BG
        }
    }
}

/// Framed block for a diagram region.
///
/// Selected regions get a thick border, focused ones the accent colour and
/// hovered ones a lifted background.
pub fn region_block(tone: Tone, base: BorderType, emphasis: Emphasis) -> Block<'static> {
    let border_type = if emphasis.selected || emphasis.focused {
        BorderType::Thick
    } else {
        base
    };
    let mut border = Style::default().fg(emphasis.border_color(tone));
    if emphasis.selected || emphasis.focused {
        border = border.add_modifier(Modifier::BOLD);
    }
    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border)
        .style(Style::default().bg(emphasis.background()))
}

/// Fill style for single-row nodes that have no frame.
pub fn chip(tone: Tone, emphasis: Emphasis) -> Style {
    let color = palette::tone(tone);
    if emphasis.selected || emphasis.focused {
        Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color).bg(emphasis.background())
    }
}
