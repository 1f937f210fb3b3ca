use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::config::keybindings::PickerKeybindings;

/// Keyboard actions the picker understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickAction {
    Previous,
    Next,
    Dismiss,
    Confirm,
}

impl PickAction {
    pub const ALL: [Self; 4] = [Self::Previous, Self::Next, Self::Dismiss, Self::Confirm];
}

/// Maps key events to picker actions using the configured bindings.
#[derive(Debug, Clone, Default)]
pub struct KeyResolver {
    pub keybindings: Arc<PickerKeybindings>,
}

impl KeyResolver {
    pub const fn new(keybindings: Arc<PickerKeybindings>) -> Self {
        Self { keybindings }
    }

    pub fn matches(&self, event: &KeyEvent, action: PickAction) -> bool {
        let kb = &self.keybindings;
        match action {
            PickAction::Previous => kb.previous.matches(event),
            PickAction::Next => kb.next.matches(event),
            PickAction::Dismiss => kb.dismiss.matches(event),
            PickAction::Confirm => kb.confirm.matches(event),
        }
    }

    /// First action bound to `event`, in [`PickAction::ALL`] order.
    pub fn resolve(&self, event: &KeyEvent) -> Option<PickAction> {
        PickAction::ALL
            .into_iter()
            .find(|action| self.matches(event, *action))
    }

    pub fn display(&self, action: PickAction) -> String {
        let kb = &self.keybindings;
        match action {
            PickAction::Previous => kb.previous.display(),
            PickAction::Next => kb.next.display(),
            PickAction::Dismiss => kb.dismiss.display(),
            PickAction::Confirm => kb.confirm.display(),
        }
    }
}
