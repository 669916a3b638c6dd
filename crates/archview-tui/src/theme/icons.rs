//! Icon set for the TUI.
//!
//! `IconSet` resolves glyphs at runtime based on `IconMode`.
//! - `IconMode::Unicode` - plain symbols that work in all terminals
//! - `IconMode::NerdFonts` - Nerd Font glyphs (requires a patched font)

use archview_app::config::IconMode;
use archview_core::Glyph;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn glyph(&self, glyph: Glyph) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => match glyph {
                Glyph::Globe => "\u{f0ac}",     // nf-fa-globe
                Glyph::Shield => "\u{f132}",    // nf-fa-shield
                Glyph::Lock => "\u{f023}",      // nf-fa-lock
                Glyph::Server => "\u{f233}",    // nf-fa-server
                Glyph::Database => "\u{f1c0}",  // nf-fa-database
                Glyph::Zap => "\u{f0e7}",       // nf-fa-bolt
                Glyph::HardDrive => "\u{f0a0}", // nf-fa-hdd_o
                Glyph::Refresh => "\u{f021}",   // nf-fa-refresh
                Glyph::Activity => "\u{f21e}",  // nf-fa-heartbeat
                Glyph::Cloud => "\u{f0c2}",     // nf-fa-cloud
            },
            IconMode::Unicode => match glyph {
                Glyph::Globe => "\u{25cd}",     // ◍
                Glyph::Shield => "\u{25c8}",    // ◈
                Glyph::Lock => "\u{25a3}",      // ▣
                Glyph::Server => "\u{25a4}",    // ▤
                Glyph::Database => "\u{25eb}",  // ◫
                Glyph::Zap => "\u{03df}",       // ϟ
                Glyph::HardDrive => "\u{25ad}", // ▭
                Glyph::Refresh => "\u{21bb}",   // ↻
                Glyph::Activity => "\u{223f}",  // ∿
                Glyph::Cloud => "\u{2601}",     // ☁
            },
        }
    }

    pub fn close(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00d}", // nf-fa-times
            IconMode::Unicode => "\u{2715}",   // ✕
        }
    }

    pub fn bullet(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn arrow_down(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f063}", // nf-fa-arrow_down
            IconMode::Unicode => "\u{2193}",   // ↓
        }
    }
}
