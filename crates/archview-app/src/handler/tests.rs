//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::state::{AppState, Selection};
use archview_core::{describe, ComponentId, RegionId};

fn region(state: &AppState, label: &str) -> RegionId {
    state.diagram.find_by_label(label).unwrap()
}

/// Run a message and any follow-ups to completion, like the event loop does.
fn process(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

// ─────────────────────────────────────────────────────────
// Selection state machine
// ─────────────────────────────────────────────────────────

#[test]
fn test_initial_state_has_no_selection() {
    let state = AppState::new();
    assert_eq!(state.selection, Selection::Idle);
}

#[test]
fn test_click_every_region_shows_its_component() {
    let mut state = AppState::new();
    for id in state.diagram.clickable() {
        let expected = state.diagram.get(id).unwrap().binding.unwrap().target;
        process(&mut state, Message::Click(id));
        assert_eq!(state.selection, Selection::Showing(expected));
        let record = describe(state.selected().unwrap());
        assert_eq!(record, describe(expected));
    }
}

#[test]
fn test_click_same_region_twice_is_idempotent() {
    let mut state = AppState::new();
    let waf = region(&state, "AWS WAF");

    process(&mut state, Message::Click(waf));
    process(&mut state, Message::Click(waf));

    assert_eq!(state.selection, Selection::Showing(ComponentId::Waf));
}

#[test]
fn test_click_other_region_overwrites_without_idle() {
    let mut state = AppState::new();
    let s3 = region(&state, "Amazon S3");
    let cw = region(&state, "CloudWatch");

    process(&mut state, Message::Click(s3));
    assert_eq!(state.selection, Selection::Showing(ComponentId::S3));

    let result = update(&mut state, Message::Click(cw));
    assert!(result.message.is_none());
    assert_eq!(state.selection, Selection::Showing(ComponentId::CloudWatch));
}

#[test]
fn test_dismiss_from_every_component() {
    for id in ComponentId::ALL {
        let mut state = AppState::new();
        process(&mut state, Message::Select(id));
        process(&mut state, Message::Dismiss);
        assert_eq!(state.selection, Selection::Idle);
    }
}

#[test]
fn test_dismiss_when_idle_stays_idle() {
    let mut state = AppState::new();
    process(&mut state, Message::Dismiss);
    assert_eq!(state.selection, Selection::Idle);
}

// ─────────────────────────────────────────────────────────
// Propagation isolation
// ─────────────────────────────────────────────────────────

#[test]
fn test_nested_click_selects_inner_not_container() {
    let mut state = AppState::new();
    for (label, expected) in [
        ("Application Load Balancer", ComponentId::Alb),
        ("EC2 Instance", ComponentId::Ec2),
        ("RDS Primary", ComponentId::Rds),
        ("RDS Standby", ComponentId::Rds),
        ("ElastiCache", ComponentId::ElastiCache),
    ] {
        let pos = region(&state, label);
        process(&mut state, Message::Click(pos));
        assert_eq!(state.selection, Selection::Showing(expected), "{label}");
    }
}

#[test]
fn test_nested_click_is_a_single_transition() {
    let mut state = AppState::new();
    let alb = region(&state, "Application Load Balancer");

    // One update, no follow-up message, selection written once
    let result = update(&mut state, Message::Click(alb));
    assert_eq!(result, UpdateResult::none());
    assert_eq!(
        crate::dispatch::click_targets(&state.diagram, alb),
        vec![ComponentId::Alb]
    );
}

#[test]
fn test_click_on_container_background_selects_container() {
    let mut state = AppState::new();
    let pos = region(&state, "Public Subnet");
    process(&mut state, Message::Click(pos));
    assert_eq!(state.selection, Selection::Showing(ComponentId::Vpc));
}

#[test]
fn test_click_on_unbound_region_keeps_selection() {
    let mut state = AppState::new();
    process(&mut state, Message::Select(ComponentId::Route53));
    let pos = region(&state, "Internet / Users");
    process(&mut state, Message::Click(pos));
    assert_eq!(state.selection, Selection::Showing(ComponentId::Route53));
}

#[test]
fn test_hover_never_changes_selection() {
    let mut state = AppState::new();
    let cf = region(&state, "CloudFront");
    process(&mut state, Message::Hover(Some(cf)));
    assert_eq!(state.hover, Some(cf));
    assert_eq!(state.selection, Selection::Idle);

    process(&mut state, Message::Hover(None));
    assert_eq!(state.hover, None);
}

// ─────────────────────────────────────────────────────────
// Keyboard
// ─────────────────────────────────────────────────────────

#[test]
fn test_q_and_ctrl_c_quit() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

#[test]
fn test_quit_message_sets_quitting() {
    let mut state = AppState::new();
    process(&mut state, Message::Key(InputKey::Char('q')));
    assert!(state.should_quit());
}

#[test]
fn test_esc_dismisses_when_showing() {
    let mut state = AppState::new();
    process(&mut state, Message::Select(ComponentId::Vpc));
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::Dismiss));

    process(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.selection, Selection::Idle);
}

#[test]
fn test_esc_clears_focus_when_idle() {
    let mut state = AppState::new();
    process(&mut state, Message::FocusNext);
    assert!(state.focus.is_some());

    process(&mut state, Message::Key(InputKey::Esc));
    assert!(state.focus.is_none());
    assert_eq!(handle_key(&state, InputKey::Esc), None);
}

#[test]
fn test_tab_walks_clickables_in_order_and_wraps() {
    let mut state = AppState::new();
    let order = state.diagram.clickable();

    for expected in &order {
        process(&mut state, Message::Key(InputKey::Tab));
        assert_eq!(state.focus, Some(*expected));
    }
    process(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.focus, order.first().copied());
}

#[test]
fn test_backtab_from_nothing_focuses_last() {
    let mut state = AppState::new();
    process(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.focus, state.diagram.clickable().last().copied());

    process(&mut state, Message::Key(InputKey::BackTab));
    let order = state.diagram.clickable();
    assert_eq!(state.focus, Some(order[order.len() - 2]));
}

#[test]
fn test_enter_activates_focused_region() {
    let mut state = AppState::new();
    let alb = region(&state, "Application Load Balancer");
    state.focus = Some(alb);

    let result = update(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(result.message, Some(Message::ActivateFocused));

    process(&mut state, Message::ActivateFocused);
    assert_eq!(state.selection, Selection::Showing(ComponentId::Alb));
}

#[test]
fn test_enter_without_focus_does_nothing() {
    let mut state = AppState::new();
    process(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.selection, Selection::Idle);
}

#[test]
fn test_click_moves_focus_to_clicked_node() {
    let mut state = AppState::new();
    let s3 = region(&state, "Amazon S3");
    process(&mut state, Message::Click(s3));
    assert_eq!(state.focus, Some(s3));
}

#[test]
fn test_unmapped_key_is_ignored() {
    let state = AppState::new();
    assert_eq!(handle_key(&state, InputKey::Char('z')), None);
}
