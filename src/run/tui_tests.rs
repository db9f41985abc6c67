#![allow(clippy::unwrap_used)]

use super::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn apply(code: KeyCode) -> Option<Action> {
    match map_key(key(code)) {
        Some(Input::Apply(action)) => Some(action),
        _ => None,
    }
}

// ── Quit / help ──────────────────────────────────────────────

#[test]
fn test_quit_keys() {
    assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Input::Quit));
    assert_eq!(
        map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Input::Quit)
    );
}

#[test]
fn test_plain_c_is_ignored() {
    assert_eq!(map_key(key(KeyCode::Char('c'))), None);
}

#[test]
fn test_help_key() {
    assert_eq!(map_key(key(KeyCode::Char('?'))), Some(Input::Help));
}

// ── View actions ─────────────────────────────────────────────

#[test]
fn test_tab_toggles_view() {
    assert_eq!(apply(KeyCode::Tab), Some(Action::ToggleView));
}

#[test]
fn test_focus_keys() {
    assert_eq!(apply(KeyCode::Left), Some(Action::FocusPrev));
    assert_eq!(apply(KeyCode::Char('h')), Some(Action::FocusPrev));
    assert_eq!(apply(KeyCode::Right), Some(Action::FocusNext));
    assert_eq!(apply(KeyCode::Char('l')), Some(Action::FocusNext));
}

#[test]
fn test_movement_keys() {
    assert_eq!(apply(KeyCode::Up), Some(Action::Move(Nav::Up)));
    assert_eq!(apply(KeyCode::Char('k')), Some(Action::Move(Nav::Up)));
    assert_eq!(apply(KeyCode::Down), Some(Action::Move(Nav::Down)));
    assert_eq!(apply(KeyCode::Char('j')), Some(Action::Move(Nav::Down)));
    assert_eq!(apply(KeyCode::Home), Some(Action::Move(Nav::Home)));
    assert_eq!(apply(KeyCode::Char('g')), Some(Action::Move(Nav::Home)));
    assert_eq!(apply(KeyCode::End), Some(Action::Move(Nav::End)));
    assert_eq!(apply(KeyCode::Char('G')), Some(Action::Move(Nav::End)));
    assert_eq!(apply(KeyCode::PageUp), Some(Action::Move(Nav::PageUp)));
    assert_eq!(apply(KeyCode::PageDown), Some(Action::Move(Nav::PageDown)));
}

#[test]
fn test_sort_key() {
    assert_eq!(apply(KeyCode::Char('s')), Some(Action::CycleSort));
}

#[test]
fn test_filter_keys_follow_tab_order() {
    assert_eq!(apply(KeyCode::Char('1')), Some(Action::SetFilter(Category::All)));
    assert_eq!(apply(KeyCode::Char('2')), Some(Action::SetFilter(Category::Food)));
    assert_eq!(apply(KeyCode::Char('3')), Some(Action::SetFilter(Category::Transport)));
    assert_eq!(apply(KeyCode::Char('4')), Some(Action::SetFilter(Category::Shopping)));
    assert_eq!(apply(KeyCode::Char('5')), Some(Action::SetFilter(Category::Travel)));
    assert_eq!(apply(KeyCode::Char('6')), Some(Action::SetFilter(Category::Utilities)));
    assert_eq!(apply(KeyCode::Char('7')), Some(Action::SetFilter(Category::Other)));
}

#[test]
fn test_unbound_keys() {
    assert_eq!(map_key(key(KeyCode::Char('8'))), None);
    assert_eq!(map_key(key(KeyCode::Char('0'))), None);
    assert_eq!(map_key(key(KeyCode::Enter)), None);
    assert_eq!(map_key(key(KeyCode::Esc)), None);
}
