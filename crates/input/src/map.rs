//! Mapping from terminal events to launcher actions.

use crate::types::{LauncherAction, PointerEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to launcher actions.
///
/// `in_game` selects the binding set: on the menu, `q` closes the window;
/// inside a game it is left to the game, and only Ctrl+C closes the window.
pub fn handle_key_event(key: KeyEvent, in_game: bool) -> Option<LauncherAction> {
    if is_window_close(key, in_game) {
        return Some(LauncherAction::CloseWindow);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(LauncherAction::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(LauncherAction::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(LauncherAction::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(LauncherAction::Right)
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(LauncherAction::Confirm),
        KeyCode::Esc | KeyCode::Backspace => Some(LauncherAction::Back),

        _ => None,
    }
}

/// Check if a key closes the launcher window.
pub fn is_window_close(key: KeyEvent, in_game: bool) -> bool {
    let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'));
    ctrl_c || (quit && !in_game)
}

/// Map mouse input to pointer events. Only left clicks and movement matter.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<PointerEvent> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Pressed { x, y }),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(PointerEvent::Moved { x, y }),
        _ => None,
    }
}
