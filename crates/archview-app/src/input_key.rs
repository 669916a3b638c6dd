//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! that this crate never depends on crossterm.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
}
