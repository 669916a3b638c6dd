//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::dispatch::click_targets;
use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{focus, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Pointer Messages
        // ─────────────────────────────────────────────────────────
        Message::Click(region) => {
            let targets = click_targets(&state.diagram, region);
            if let Some(r) = state.diagram.get(region) {
                if r.is_clickable() {
                    state.focus = Some(region);
                }
            }
            // Handlers run innermost first, each one overwriting the last
            for id in targets {
                state.select(id);
                debug!("Selected {} (click on {:?})", id, region);
            }
            UpdateResult::none()
        }

        Message::Hover(region) => {
            state.hover = region;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::Select(id) => {
            state.select(id);
            debug!("Selected {}", id);
            UpdateResult::none()
        }

        Message::Dismiss => {
            if state.selection.is_showing() {
                debug!("Detail panel dismissed");
            }
            state.dismiss();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Keyboard Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            focus::focus_next(state);
            UpdateResult::none()
        }

        Message::FocusPrev => {
            focus::focus_prev(state);
            UpdateResult::none()
        }

        Message::ClearFocus => {
            state.focus = None;
            UpdateResult::none()
        }

        Message::ActivateFocused => match state.focus {
            Some(region) => UpdateResult::message(Message::Click(region)),
            None => UpdateResult::none(),
        },
    }
}
