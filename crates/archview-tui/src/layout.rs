//! Screen layout definitions for the TUI
//!
//! The detail panel takes a right-hand column on wide terminals and a band
//! under the diagram otherwise. Highlight cards are only laid out when the
//! screen is tall enough to keep the diagram readable.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header rows: border + title + subtitle + border
pub const HEADER_HEIGHT: u16 = 4;
pub const STATUS_HEIGHT: u16 = 1;

/// Narrowest screen that still gets the side-by-side panel
pub const SIDE_PANEL_MIN_WIDTH: u16 = 110;
pub const SIDE_PANEL_WIDTH: u16 = 44;

/// Shortest screen that still shows the highlight cards
pub const HIGHLIGHTS_MIN_HEIGHT: u16 = 40;

/// Where the detail panel goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPlacement {
    Side,
    Below,
}

impl PanelPlacement {
    pub fn for_width(width: u16) -> Self {
        if width >= SIDE_PANEL_MIN_WIDTH {
            PanelPlacement::Side
        } else {
            PanelPlacement::Below
        }
    }
}

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and subtitle
    pub header: Rect,

    /// The architecture diagram
    pub diagram: Rect,

    /// Detail panel, present while a component is selected
    pub detail: Option<Rect>,

    /// Highlight cards row
    pub highlights: Option<Rect>,

    /// Key hints
    pub status: Rect,
}

/// Split `area` into the main screen regions.
///
/// # Arguments
/// * `area` - Total screen area
/// * `detail_height` - Rows the detail panel wants when placed below the
///   diagram; `None` when no panel is open
/// * `highlights_height` - Rows the highlight cards want; `None` when they
///   are disabled
///
/// A panel placed below gets all the rows it asks for, up to the whole body.
/// The diagram shrinks instead, since its nodes stay reachable by keyboard.
pub fn create(
    area: Rect,
    detail_height: Option<u16>,
    highlights_height: Option<u16>,
) -> ScreenAreas {
    let highlights_height = match highlights_height {
        Some(height) if area.height >= HIGHLIGHTS_MIN_HEIGHT => height,
        _ => 0,
    };

    let [header, body, highlights, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(highlights_height),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);

    let (diagram, detail) = match detail_height {
        None => (body, None),
        Some(height) => match PanelPlacement::for_width(area.width) {
            PanelPlacement::Side => {
                let [diagram, detail] =
                    Layout::horizontal([Constraint::Min(0), Constraint::Length(SIDE_PANEL_WIDTH)])
                        .areas(body);
                (diagram, Some(detail))
            }
            PanelPlacement::Below => {
                let height = height.min(body.height);
                let [diagram, detail] =
                    Layout::vertical([Constraint::Min(0), Constraint::Length(height)]).areas(body);
                (diagram, Some(detail))
            }
        },
    };

    ScreenAreas {
        header,
        diagram,
        detail,
        highlights: (highlights_height > 0).then_some(highlights),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_layout_gives_body_to_diagram() {
        let area = Rect::new(0, 0, 120, 30);
        let layout = create(area, None, Some(5));

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert!(layout.detail.is_none());
        // 30 rows is below the highlight threshold
        assert!(layout.highlights.is_none());
        assert_eq!(layout.diagram.height, 30 - HEADER_HEIGHT - STATUS_HEIGHT);
        assert_eq!(layout.status.y, 29);
    }

    #[test]
    fn test_wide_screen_puts_panel_on_the_right() {
        let area = Rect::new(0, 0, 140, 40);
        let layout = create(area, Some(12), None);

        let detail = layout.detail.unwrap();
        assert_eq!(detail.width, SIDE_PANEL_WIDTH);
        assert_eq!(detail.x, 140 - SIDE_PANEL_WIDTH);
        assert_eq!(detail.height, layout.diagram.height);
        assert_eq!(layout.diagram.width, 140 - SIDE_PANEL_WIDTH);
    }

    #[test]
    fn test_narrow_screen_puts_panel_below() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = create(area, Some(12), None);

        let detail = layout.detail.unwrap();
        assert_eq!(detail.width, 80);
        assert_eq!(detail.height, 12);
        assert_eq!(detail.y, layout.diagram.y + layout.diagram.height);
    }

    #[test]
    fn test_panel_below_gets_full_height_at_diagram_expense() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, Some(12), None);

        let body = 24 - HEADER_HEIGHT - STATUS_HEIGHT;
        assert_eq!(layout.detail.unwrap().height, 12);
        assert_eq!(layout.diagram.height, body - 12);
    }

    #[test]
    fn test_panel_below_is_capped_at_body() {
        let area = Rect::new(0, 0, 80, 20);
        let layout = create(area, Some(30), None);

        let body = 20 - HEADER_HEIGHT - STATUS_HEIGHT;
        assert_eq!(layout.detail.unwrap().height, body);
        assert_eq!(layout.diagram.height, 0);
    }

    #[test]
    fn test_highlights_need_enabled_and_tall_screen() {
        let tall = Rect::new(0, 0, 120, 50);
        assert_eq!(create(tall, None, Some(5)).highlights.unwrap().height, 5);
        assert!(create(tall, None, None).highlights.is_none());

        let short = Rect::new(0, 0, 120, HIGHLIGHTS_MIN_HEIGHT - 1);
        assert!(create(short, None, Some(5)).highlights.is_none());
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create(area, Some(10), Some(5));
        let total = layout.header.height
            + layout.diagram.height
            + layout.detail.unwrap().height
            + layout.highlights.unwrap().height
            + layout.status.height;
        assert_eq!(total, area.height);
    }

    #[test]
    fn test_placement_threshold() {
        assert_eq!(PanelPlacement::for_width(SIDE_PANEL_MIN_WIDTH), PanelPlacement::Side);
        assert_eq!(
            PanelPlacement::for_width(SIDE_PANEL_MIN_WIDTH - 1),
            PanelPlacement::Below
        );
    }
}
