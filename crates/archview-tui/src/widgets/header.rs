//! Header bar with the diagram's title and subtitle

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};
use archview_core::Glyph;

/// Centered title with a muted subtitle underneath
pub struct MainHeader<'a> {
    title: &'a str,
    subtitle: &'a str,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(title: &'a str, subtitle: &'a str, icons: IconSet) -> Self {
        Self {
            title,
            subtitle,
            icons,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = format!("{} {}", self.icons.glyph(Glyph::Cloud), self.title);
        let lines = vec![
            Line::styled(title, styles::text_bright_bold()),
            Line::styled(self.subtitle, styles::text_secondary()),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
