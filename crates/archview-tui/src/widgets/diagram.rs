//! Architecture diagram widget
//!
//! Lays the region tree out recursively by [`RegionKind`] and records every
//! drawn region in the frame's [`HitMap`].

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{BorderType, Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use archview_app::AppState;
use archview_core::{Diagram, Region, RegionId, RegionKind};

use crate::hit_map::{HitMap, HitTarget};
use crate::theme::{
    icons::IconSet,
    styles::{self, Emphasis},
};

const SOURCE_HEIGHT: u16 = 3;
const SERVICE_HEIGHT: u16 = 4;
const INSTANCE_HEIGHT: u16 = 1;
const MIN_CARD_WIDTH: u16 = 16;
const CARD_SPACING: u16 = 2;

/// The whole diagram inside a titled frame.
pub struct DiagramView<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> DiagramView<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }
}

impl StatefulWidget for DiagramView<'_> {
    type State = HitMap;

    fn render(self, area: Rect, buf: &mut Buffer, hits: &mut HitMap) {
        let block = styles::glass_block(false)
            .title(Line::styled(" Architecture ", styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        let diagram = &self.state.diagram;
        // Drop the breathing rows between tiers when the screen is short
        let gap = if stacked_height(diagram, diagram.roots(), 1) <= inner.height {
            1
        } else {
            0
        };

        let mut painter = Painter {
            state: self.state,
            icons: self.icons,
            buf,
            hits,
        };
        painter.stack(diagram.roots(), inner, gap, true);
    }
}

/// Rows a region needs at its natural size.
fn region_height(diagram: &Diagram, id: RegionId, gap: u16) -> u16 {
    let Some(region) = diagram.get(id) else {
        return 0;
    };
    let children = diagram.children(id);
    match region.kind {
        RegionKind::Source => SOURCE_HEIGHT,
        RegionKind::Service => SERVICE_HEIGHT,
        RegionKind::Instance => INSTANCE_HEIGHT,
        RegionKind::Tier | RegionKind::ZoneGrid => children
            .iter()
            .map(|c| region_height(diagram, *c, gap))
            .max()
            .unwrap_or(0),
        RegionKind::Boundary => 2 + stacked_height(diagram, children, gap),
        RegionKind::Zone | RegionKind::Subnet => 2 + stacked_height(diagram, children, 0),
    }
}

fn stacked_height(diagram: &Diagram, ids: &[RegionId], gap: u16) -> u16 {
    let rows: u16 = ids.iter().map(|id| region_height(diagram, *id, gap)).sum();
    rows + gap * (ids.len().saturating_sub(1) as u16)
}

/// Columns a service card wants: icon, label and caption plus frame.
fn card_width(region: &Region) -> u16 {
    let label = region.label.width() as u16 + if region.glyph.is_some() { 2 } else { 0 };
    let caption = region.caption.map(|c| c.width() as u16).unwrap_or(0);
    (label.max(caption) + 4).max(MIN_CARD_WIDTH)
}

fn centered(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

struct Painter<'a, 'b> {
    state: &'a AppState,
    icons: IconSet,
    buf: &'b mut Buffer,
    hits: &'b mut HitMap,
}

impl Painter<'_, '_> {
    fn diagram(&self) -> &Diagram {
        &self.state.diagram
    }

    fn emphasis(&self, region: &Region) -> Emphasis {
        let selected = self.state.selected();
        Emphasis {
            focused: self.state.is_focused(region.id),
            hovered: self.state.is_hovered(region.id),
            selected: selected.is_some() && region.binding.map(|b| b.target) == selected,
        }
    }

    fn record(&mut self, id: RegionId, area: Rect) {
        let depth = self.diagram().depth(id);
        self.hits.insert(area, HitTarget::Region(id), depth);
    }

    /// "icon label" with the icon in the region's tone.
    fn label_line(&self, region: &Region, emphasis: Emphasis) -> Line<'static> {
        let label_style = if emphasis.selected || emphasis.focused {
            styles::tone_bold(region.tone)
        } else {
            styles::text_primary()
        };
        let mut spans = Vec::new();
        if let Some(glyph) = region.glyph {
            spans.push(Span::styled(self.icons.glyph(glyph), styles::tone_fg(region.tone)));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(region.label, label_style));
        Line::from(spans)
    }

    /// Stack `ids` top to bottom inside `area`, clipping what does not fit.
    fn stack(&mut self, ids: &[RegionId], area: Rect, gap: u16, arrows: bool) {
        let bottom = area.bottom();
        let mut y = area.y;
        for (i, id) in ids.iter().enumerate() {
            if y >= bottom {
                break;
            }
            let height = region_height(self.diagram(), *id, gap).min(bottom - y);
            self.draw(*id, Rect::new(area.x, y, area.width, height), gap);
            y += height;

            let last = i + 1 == ids.len();
            if gap > 0 && !last && y < bottom {
                if arrows {
                    Paragraph::new(self.icons.arrow_down())
                        .style(styles::text_muted())
                        .alignment(Alignment::Center)
                        .render(Rect::new(area.x, y, area.width, 1), self.buf);
                }
                y += gap;
            }
        }
    }

    fn draw(&mut self, id: RegionId, area: Rect, gap: u16) {
        if area.is_empty() {
            return;
        }
        let Some(region) = self.diagram().get(id).cloned() else {
            return;
        };
        match region.kind {
            RegionKind::Source => self.draw_source(&region, area),
            RegionKind::Tier => self.draw_tier(&region, area, gap),
            RegionKind::Boundary => self.draw_frame(&region, area, BorderType::Double, gap),
            RegionKind::ZoneGrid => self.draw_zone_grid(&region, area, gap),
            RegionKind::Zone => self.draw_frame(&region, area, BorderType::Rounded, 0),
            RegionKind::Subnet => self.draw_frame(&region, area, BorderType::Plain, 0),
            RegionKind::Service => self.draw_service(&region, area),
            RegionKind::Instance => self.draw_instance(&region, area),
        }
    }

    fn draw_source(&mut self, region: &Region, area: Rect) {
        let emphasis = self.emphasis(region);
        let pill = centered(card_width(region), area);
        self.record(region.id, pill);

        let block = styles::region_block(region.tone, BorderType::Rounded, emphasis);
        let inner = block.inner(pill);
        block.render(pill, self.buf);
        Paragraph::new(self.label_line(region, emphasis))
            .alignment(Alignment::Center)
            .render(inner, self.buf);
    }

    fn draw_tier(&mut self, region: &Region, area: Rect, gap: u16) {
        self.record(region.id, area);

        let children = self.diagram().children(region.id).to_vec();
        if children.is_empty() {
            return;
        }
        let widths: Vec<u16> = children
            .iter()
            .filter_map(|c| self.diagram().get(*c))
            .map(card_width)
            .collect();
        let total = widths.iter().sum::<u16>() + CARD_SPACING * (widths.len() as u16 - 1);

        let columns = if total <= area.width {
            Layout::horizontal(widths.iter().map(|w| Constraint::Length(*w)))
                .spacing(CARD_SPACING)
                .split(centered(total, area))
        } else {
            Layout::horizontal(
                children
                    .iter()
                    .map(|_| Constraint::Ratio(1, children.len() as u32)),
            )
            .spacing(1)
            .split(area)
        };

        for (child, column) in children.iter().zip(columns.iter()) {
            self.draw(*child, *column, gap);
        }
    }

    /// Boundary, zone and subnet: a titled frame stacking its children.
    fn draw_frame(&mut self, region: &Region, area: Rect, border: BorderType, gap: u16) {
        let emphasis = self.emphasis(region);
        self.record(region.id, area);

        let mut title = self.label_line(region, emphasis);
        title.spans.insert(0, Span::raw(" "));
        title.spans.push(Span::raw(" "));

        let mut block = styles::region_block(region.tone, border, emphasis).title(title);
        if region.kind == RegionKind::Zone {
            block = block.title_alignment(Alignment::Center);
        }
        let inner = block.inner(area);
        block.render(area, self.buf);

        let children = self.diagram().children(region.id).to_vec();
        self.stack(&children, inner, gap, false);
    }

    fn draw_zone_grid(&mut self, region: &Region, area: Rect, gap: u16) {
        self.record(region.id, area);

        let children = self.diagram().children(region.id).to_vec();
        if children.is_empty() {
            return;
        }
        let columns = Layout::horizontal(
            children
                .iter()
                .map(|_| Constraint::Ratio(1, children.len() as u32)),
        )
        .spacing(CARD_SPACING)
        .split(area);

        for (child, column) in children.iter().zip(columns.iter()) {
            self.draw(*child, *column, gap);
        }
    }

    fn draw_service(&mut self, region: &Region, area: Rect) {
        let emphasis = self.emphasis(region);
        self.record(region.id, area);

        let block = styles::region_block(region.tone, BorderType::Rounded, emphasis);
        let inner = block.inner(area);
        block.render(area, self.buf);

        let mut lines = vec![self.label_line(region, emphasis)];
        if let Some(caption) = region.caption {
            lines.push(Line::styled(caption, styles::text_secondary()));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, self.buf);
    }

    fn draw_instance(&mut self, region: &Region, area: Rect) {
        let emphasis = self.emphasis(region);
        let row = Rect { height: 1, ..area };
        self.record(region.id, row);

        let style = styles::chip(region.tone, emphasis);
        let mut text = String::from(" ");
        if let Some(glyph) = region.glyph {
            text.push_str(self.icons.glyph(glyph));
            text.push(' ');
        }
        text.push_str(region.label);
        Paragraph::new(text).style(style).render(row, self.buf);
    }
}
