//! Message types for the application (TEA pattern)

use archview_core::{ComponentId, RegionId};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit without confirmation (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Pointer Messages
    // ─────────────────────────────────────────────────────────
    /// Primary click landed on a region (innermost region under the pointer)
    Click(RegionId),
    /// Pointer moved; `None` when it is over no region
    Hover(Option<RegionId>),

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Show the detail panel for a component (overwrites, never toggles)
    Select(ComponentId),
    /// Close the detail panel
    Dismiss,

    // ─────────────────────────────────────────────────────────
    // Keyboard Focus Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next clickable region
    FocusNext,
    /// Move focus to the previous clickable region
    FocusPrev,
    /// Activate the focused region as if it were clicked
    ActivateFocused,
    /// Drop keyboard focus
    ClearFocus,
}
