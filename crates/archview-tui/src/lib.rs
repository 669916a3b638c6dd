//! archview-tui - Terminal UI for archview
//!
//! Draws the diagram with ratatui, turns crossterm key and mouse events
//! into `archview_app::Message`s and drives the TEA loop.

pub mod event;
pub mod hit_map;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use hit_map::{HitMap, HitTarget};
pub use runner::run;
