//! Screen-space hit testing for mouse events.
//!
//! Rendering records every region's rect together with its nesting depth.
//! A pointer position resolves to the deepest rect containing it, which is
//! the innermost region the user actually clicked.

use archview_core::RegionId;
use ratatui::layout::{Position, Rect};

/// What sits under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A diagram region
    Region(RegionId),
    /// The detail panel's close control
    Dismiss,
    /// Detail panel body; swallows clicks without doing anything
    Panel,
}

#[derive(Debug, Clone, Copy)]
struct Hit {
    area: Rect,
    target: HitTarget,
    depth: usize,
}

/// Rects recorded during the last frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    hits: Vec<Hit>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `target` at `area`. Empty rects are ignored.
    pub fn insert(&mut self, area: Rect, target: HitTarget, depth: usize) {
        if area.is_empty() {
            return;
        }
        self.hits.push(Hit {
            area,
            target,
            depth,
        });
    }

    /// Deepest target containing the cell at `(column, row)`.
    ///
    /// On equal depth the later insertion wins, matching paint order.
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        self.hits
            .iter()
            .enumerate()
            .filter(|(_, hit)| hit.area.contains(pos))
            .max_by_key(|(order, hit)| (hit.depth, *order))
            .map(|(_, hit)| hit.target)
    }

    /// Innermost diagram region at `(column, row)`, ignoring panel targets.
    pub fn region_at(&self, column: u16, row: u16) -> Option<RegionId> {
        match self.target_at(column, row) {
            Some(HitTarget::Region(id)) => Some(id),
            _ => None,
        }
    }

    /// Rect recorded for `target`, if it was drawn.
    pub fn area_of(&self, target: HitTarget) -> Option<Rect> {
        self.hits
            .iter()
            .find(|hit| hit.target == target)
            .map(|hit| hit.area)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
