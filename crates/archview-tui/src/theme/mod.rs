//! Centralized theme for the diagram view.
//!
//! - `palette` - raw colour constants and the per-tone accents
//! - `styles` - semantic style builders
//! - `icons` - glyphs with Nerd Font and plain Unicode variants

pub mod icons;
pub mod palette;
pub mod styles;
