//! Key mapping from terminal events to menu actions.

use crate::types::MenuAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to menu actions.
///
/// The digit keys match the on-screen menu; the letters are mnemonics.
pub fn handle_key_event(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Char('1') | KeyCode::Char('p') | KeyCode::Char('P') => Some(MenuAction::Play),
        KeyCode::Char('2') | KeyCode::Char('r') | KeyCode::Char('R') => Some(MenuAction::Reserve),
        KeyCode::Char('3') | KeyCode::Char('u') | KeyCode::Char('U') => Some(MenuAction::Restore),
        KeyCode::Char('4') | KeyCode::Char('t') | KeyCode::Char('T') => {
            Some(MenuAction::SwapFrontTop)
        }
        KeyCode::Char('5') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(MenuAction::SwapThree)
        }
        _ => None,
    }
}

/// Check if key should exit the menu.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
