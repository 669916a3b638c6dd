//! Custom widget components

mod detail_panel;
mod diagram;
mod header;
mod highlights;
mod status_bar;

pub use detail_panel::{wrap_text, DetailPanel};
pub use diagram::DiagramView;
pub use header::MainHeader;
pub use highlights::HighlightCards;
pub use status_bar::StatusBar;
