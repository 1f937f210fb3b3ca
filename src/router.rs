//! Translation of raw key input into picker actions.

use crossterm::event::KeyEvent;

use crate::config::{KeyResolver, PickAction};
use crate::navigation::Target;

/// What a key press asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Highlight(Target),
    /// Release focus from the bound element.
    Dismiss,
    /// Select the highlighted item, if any.
    Confirm,
    /// Unbound key, left untouched.
    Ignore,
}

impl KeyAction {
    /// Bound keys take over the host's default handling of the event.
    pub const fn prevents_default(self) -> bool {
        !matches!(self, Self::Ignore)
    }
}

pub fn route_key(resolver: &KeyResolver, key: &KeyEvent) -> KeyAction {
    match resolver.resolve(key) {
        Some(PickAction::Previous) => KeyAction::Highlight(Target::Previous),
        Some(PickAction::Next) => KeyAction::Highlight(Target::Next),
        Some(PickAction::Dismiss) => KeyAction::Dismiss,
        Some(PickAction::Confirm) => KeyAction::Confirm,
        None => KeyAction::Ignore,
    }
}
