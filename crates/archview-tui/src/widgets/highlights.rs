//! Row of architecture highlight cards

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use archview_core::Highlight;

use super::wrap_text;
use crate::theme::{icons::IconSet, styles};

/// Card border rows plus the title row
const CARD_CHROME_HEIGHT: u16 = 3;

pub struct HighlightCards<'a> {
    cards: &'a [Highlight],
    icons: IconSet,
}

impl<'a> HighlightCards<'a> {
    pub fn new(cards: &'a [Highlight], icons: IconSet) -> Self {
        Self { cards, icons }
    }

    /// Rows needed to show every body in full at `width` columns.
    pub fn height_for(&self, width: u16) -> u16 {
        let columns = self.columns(Rect::new(0, 0, width, 1));
        let body_rows = self
            .cards
            .iter()
            .zip(columns.iter())
            .map(|(card, column)| wrap_text(card.body, column.width.saturating_sub(2)).len())
            .max()
            .unwrap_or(0);
        body_rows as u16 + CARD_CHROME_HEIGHT
    }

    fn columns(&self, area: Rect) -> std::rc::Rc<[Rect]> {
        Layout::horizontal(
            self.cards
                .iter()
                .map(|_| Constraint::Ratio(1, self.cards.len() as u32)),
        )
        .spacing(1)
        .split(area)
    }
}

impl Widget for HighlightCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.cards.is_empty() || area.is_empty() {
            return;
        }

        let columns = self.columns(area);
        for (card, column) in self.cards.iter().zip(columns.iter()) {
            let block = styles::glass_block(false);
            let inner = block.inner(*column);
            block.render(*column, buf);

            let mut lines = vec![Line::from(vec![
                Span::styled(self.icons.glyph(card.glyph), styles::tone_bold(card.tone)),
                Span::raw(" "),
                Span::styled(card.title, styles::text_bright_bold()),
            ])];
            lines.extend(
                wrap_text(card.body, inner.width)
                    .into_iter()
                    .map(|l| Line::styled(l, styles::text_secondary())),
            );
            Paragraph::new(lines).render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use archview_app::config::IconMode;
    use archview_core::HIGHLIGHTS;

    fn cards() -> HighlightCards<'static> {
        HighlightCards::new(&HIGHLIGHTS, IconSet::new(IconMode::Unicode))
    }

    #[test]
    fn test_all_three_cards_render_titles() {
        let mut term = TestTerminal::with_size(120, 5);
        term.render_widget(
            HighlightCards::new(&HIGHLIGHTS, IconSet::new(IconMode::Unicode)),
            term.area(),
        );

        assert!(term.line_contains(1, "High Security"));
        assert!(term.line_contains(1, "High Availability"));
        assert!(term.line_contains(1, "Auto Scaling"));
    }

    #[test]
    fn test_every_body_renders_in_full() {
        for width in [80, 120, 160] {
            let height = cards().height_for(width);
            let mut term = TestTerminal::with_size(width, height);
            term.render_widget(cards(), term.area());

            let columns = cards().columns(term.area());
            for (card, column) in HIGHLIGHTS.iter().zip(columns.iter()) {
                // Rows below the title, inside the card border
                let inner = Rect::new(column.x + 1, 2, column.width - 2, height - 3);
                let body = term.text_in(inner).join(" ");
                assert_eq!(body, card.body, "width {width}\n{}", term.content());
            }
        }
    }

    #[test]
    fn test_height_grows_as_columns_narrow() {
        assert_eq!(cards().height_for(122), 5);
        assert!(cards().height_for(60) > cards().height_for(122));
    }

    #[test]
    fn test_empty_card_list_draws_nothing() {
        let mut term = TestTerminal::with_size(40, 4);
        term.render_widget(
            HighlightCards::new(&[], IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        assert!(!term.buffer_contains("─"));
    }
}
