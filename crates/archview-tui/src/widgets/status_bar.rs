//! Key-hint status bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use archview_app::AppState;
use archview_core::describe;

use crate::theme::{palette, styles};

/// One-line footer listing the keys and the current selection.
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("Tab", "next"), ("S-Tab", "prev"), ("Enter", "open")];
        if self.state.selection.is_showing() {
            hints.push(("Esc", "close"));
        }
        hints.push(("q", "quit"));
        hints
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!(" {key} "), styles::keycap()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }

        if let Some(id) = self.state.selected() {
            spans.push(Span::styled("│ ", styles::text_muted()));
            spans.push(Span::styled(describe(id).name, styles::accent_bold()));
        } else if let Some(region) = self.state.focus.and_then(|f| self.state.diagram.get(f)) {
            spans.push(Span::styled("│ ", styles::text_muted()));
            spans.push(Span::styled(region.label, styles::text_primary()));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}
