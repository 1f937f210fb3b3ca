use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};

use crate::config::key::{Key, KeyBinding};

/// Keys that drive the picker's keyboard handling.
///
/// Keys not bound here are ignored by the event router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerKeybindings {
    pub previous: KeyBinding,
    pub next: KeyBinding,
    pub dismiss: KeyBinding,
    pub confirm: KeyBinding,
}

impl Default for PickerKeybindings {
    fn default() -> Self {
        Self {
            previous: Key::new(KeyCode::Up).into(),
            next: Key::new(KeyCode::Down).into(),
            dismiss: Key::new(KeyCode::Esc).into(),
            confirm: Key::new(KeyCode::Enter).into(),
        }
    }
}
