//! Terminal event polling
//!
//! Keys become `Message::Key`; mouse events are resolved against the hit
//! map recorded during the last draw.

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

use archview_app::message::Message;
use archview_app::InputKey;
use archview_core::prelude::*;

use crate::hit_map::{HitMap, HitTarget};

/// Poll timeout; also the tick interval
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        _ => None,
    }
}

/// Convert a mouse event to a message using the last frame's hit map.
///
/// A left press on a region clicks the innermost region under the pointer;
/// on the close control it dismisses the panel. Movement updates hover.
pub fn mouse_event_to_message(mouse: MouseEvent, hits: &HitMap) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match hits.target_at(mouse.column, mouse.row)? {
                HitTarget::Region(id) => Some(Message::Click(id)),
                HitTarget::Dismiss => Some(Message::Dismiss),
                HitTarget::Panel => None,
            }
        }
        MouseEventKind::Moved => Some(Message::Hover(hits.region_at(mouse.column, mouse.row))),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll(hits: &HitMap) -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    let message = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_message(mouse, hits),
        _ => None,
    };
    Ok(message)
}
