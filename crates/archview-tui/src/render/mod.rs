//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use archview_app::AppState;
use archview_core::{describe, HIGHLIGHTS};

use crate::hit_map::HitMap;
use crate::theme::{icons::IconSet, palette};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`. Returns the hit map for this frame so the
/// next mouse event can be resolved against what is actually on screen.
pub fn view(frame: &mut Frame, state: &AppState) -> HitMap {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let icons = IconSet::new(state.settings.ui.icons);
    let detail = state
        .selected()
        .map(|id| widgets::DetailPanel::new(describe(id), icons));
    let detail_height = detail.as_ref().map(|panel| panel.height_for(area.width));
    let highlights = state
        .settings
        .ui
        .show_highlights
        .then(|| widgets::HighlightCards::new(&HIGHLIGHTS, icons));
    let highlights_height = highlights.as_ref().map(|cards| cards.height_for(area.width));
    let areas = layout::create(area, detail_height, highlights_height);

    let mut hits = HitMap::new();

    frame.render_widget(
        widgets::MainHeader::new(state.diagram.title, state.diagram.subtitle, icons),
        areas.header,
    );
    frame.render_stateful_widget(
        widgets::DiagramView::new(state, icons),
        areas.diagram,
        &mut hits,
    );

    if let (Some(panel), Some(panel_area)) = (detail, areas.detail) {
        frame.render_stateful_widget(panel, panel_area, &mut hits);
    }

    if let (Some(cards), Some(cards_area)) = (highlights, areas.highlights) {
        frame.render_widget(cards, cards_area);
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    hits
}
