//! Global key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::domain::entities::EntityKind;

/// Classifies keys handled before they reach the active panel.
pub struct EventHandler;

impl EventHandler {
    /// Only presses are acted on; repeats and releases are dropped.
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }

    /// Checks if key is a quit event.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c' | 'q'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Returns the tab a function key switches to.
    #[must_use]
    pub fn tab_shortcut(key: &KeyEvent) -> Option<EntityKind> {
        match key.code {
            KeyCode::F(n @ 1..=3) => EntityKind::ALL.get(usize::from(n) - 1).copied(),
            _ => None,
        }
    }
}
