//! Keyboard focus over clickable regions, in document order (wrapping).

use crate::state::AppState;

pub(crate) fn focus_next(state: &mut AppState) {
    let order = state.diagram.clickable();
    if order.is_empty() {
        state.focus = None;
        return;
    }
    let next = match state.focus.and_then(|f| order.iter().position(|id| *id == f)) {
        Some(pos) => (pos + 1) % order.len(),
        None => 0,
    };
    state.focus = Some(order[next]);
}

pub(crate) fn focus_prev(state: &mut AppState) {
    let order = state.diagram.clickable();
    if order.is_empty() {
        state.focus = None;
        return;
    }
    let prev = match state.focus.and_then(|f| order.iter().position(|id| *id == f)) {
        Some(0) | None => order.len() - 1,
        Some(pos) => pos - 1,
    };
    state.focus = Some(order[prev]);
}
