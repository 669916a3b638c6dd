//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Esc closes the panel first, then clears focus
        InputKey::Esc => {
            if state.selection.is_showing() {
                Some(Message::Dismiss)
            } else if state.focus.is_some() {
                Some(Message::ClearFocus)
            } else {
                None
            }
        }
        InputKey::Char('x') => Some(Message::Dismiss),

        // Focus movement
        InputKey::Tab
        | InputKey::Right
        | InputKey::Down
        | InputKey::Char('l')
        | InputKey::Char('j') => Some(Message::FocusNext),
        InputKey::BackTab
        | InputKey::Left
        | InputKey::Up
        | InputKey::Char('h')
        | InputKey::Char('k') => Some(Message::FocusPrev),

        // Activate
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateFocused),

        _ => None,
    }
}
