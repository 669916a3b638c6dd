//! Detail panel for the selected component

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Padding, Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use archview_core::ComponentRecord;

use crate::hit_map::{HitMap, HitTarget};
use crate::theme::{icons::IconSet, styles};

/// Border plus horizontal padding on each side
const CHROME_WIDTH: u16 = 4;
const CHROME_HEIGHT: u16 = 2;

/// Name, description and benefits of one component, with a close control
/// on the top border.
pub struct DetailPanel<'a> {
    record: &'a ComponentRecord,
    icons: IconSet,
}

impl<'a> DetailPanel<'a> {
    pub fn new(record: &'a ComponentRecord, icons: IconSet) -> Self {
        Self { record, icons }
    }

    /// Rows needed to show everything at `width` columns.
    pub fn height_for(&self, width: u16) -> u16 {
        let rows = self.lines(width.saturating_sub(CHROME_WIDTH)).len() as u16;
        rows + CHROME_HEIGHT
    }

    fn lines(&self, width: u16) -> Vec<Line<'a>> {
        let mut lines: Vec<Line<'a>> = wrap_text(self.record.name, width)
            .into_iter()
            .map(|l| Line::styled(l, styles::accent_bold()))
            .collect();
        lines.push(Line::default());

        lines.extend(
            wrap_text(self.record.description, width)
                .into_iter()
                .map(|l| Line::styled(l, styles::text_primary())),
        );
        lines.push(Line::default());
        lines.push(Line::styled("Key Benefits:", styles::text_bright_bold()));

        let bullet = self.icons.bullet();
        let indent = bullet.width() + 1;
        for benefit in self.record.benefits {
            let wrapped = wrap_text(benefit, width.saturating_sub(indent as u16));
            for (i, part) in wrapped.into_iter().enumerate() {
                let lead = if i == 0 {
                    Span::styled(format!("{bullet} "), styles::bullet())
                } else {
                    Span::raw(" ".repeat(indent))
                };
                lines.push(Line::from(vec![
                    lead,
                    Span::styled(part, styles::text_secondary()),
                ]));
            }
        }
        lines
    }
}

impl StatefulWidget for DetailPanel<'_> {
    type State = HitMap;

    fn render(self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        // The body swallows clicks so they never reach the diagram
        hits.insert(area, HitTarget::Panel, 0);

        let block = styles::glass_block(true)
            .title(Line::styled(" Details ", styles::accent_bold()))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        if area.width >= 6 {
            let close = Rect::new(area.right() - 5, area.y, 3, 1);
            Paragraph::new(format!(" {} ", self.icons.close()))
                .style(styles::close_button())
                .render(close, buf);
            hits.insert(close, HitTarget::Dismiss, 1);
        }

        if inner.is_empty() {
            return;
        }
        Paragraph::new(self.lines(inner.width)).render(inner, buf);
    }
}

/// Greedy word wrap by display width. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width as usize;
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.width() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = split_at_width(&word, width);
            let rest = word.split_off(split);
            lines.push(word);
            word = rest;
        }

        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Byte index of the longest prefix that fits in `width` columns (at least one char).
fn split_at_width(word: &str, width: usize) -> usize {
    let mut used = 0;
    for (idx, ch) in word.char_indices() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width && idx > 0 {
            return idx;
        }
        used += w;
    }
    word.len()
}
