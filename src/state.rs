//! Authoritative interaction state of a picker instance.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::debounce::PendingDebounce;
use crate::visibility::Visibility;

/// How search text reaches the picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputMode {
    /// The user types a query; searches are debounced and reported.
    #[default]
    #[serde(rename = "text")]
    TextDriven,
    /// The picker is opened from a toggle button; typed keys are not reported.
    #[serde(rename = "toggle")]
    ToggleDriven,
}

/// State read by render functions and mutated only by the controller.
///
/// `E` is the host's element handle, see [`crate::Platform::Element`].
#[derive(Debug)]
pub struct InteractionState<T, E> {
    pub(crate) input_mode: InputMode,
    pub(crate) search_text: String,
    pub(crate) debounce_interval: Duration,
    pub(crate) pending_debounce: Option<PendingDebounce>,
    pub(crate) focus_target: Option<E>,
    pub(crate) items: Vec<T>,
    pub(crate) visibility: Visibility,
    pub(crate) highlighted_index: Option<usize>,
    pub(crate) last_index: Option<usize>,
}

impl<T, E> InteractionState<T, E> {
    pub(crate) fn new(input_mode: InputMode, items: Vec<T>, search_text: String, debounce_interval: Duration) -> Self {
        let last_index = items.len().checked_sub(1);
        Self {
            input_mode,
            search_text,
            debounce_interval,
            pending_debounce: None,
            focus_target: None,
            items,
            visibility: Visibility::Off,
            highlighted_index: None,
            last_index,
        }
    }

    pub const fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub const fn debounce_interval(&self) -> Duration {
        self.debounce_interval
    }

    /// Whether a search is waiting for its quiet period to elapse.
    pub const fn is_debouncing(&self) -> bool {
        self.pending_debounce.is_some()
    }

    pub const fn focus_target(&self) -> Option<&E> {
        self.focus_target.as_ref()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub const fn highlighted_index(&self) -> Option<usize> {
        self.highlighted_index
    }

    /// Index of the last item, `None` for an empty list.
    pub const fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    /// The highlighted item, if the highlight points at one.
    pub fn highlighted_item(&self) -> Option<&T> {
        self.highlighted_index.and_then(|i| self.items.get(i))
    }

    /// Replace the item list and recompute its bounds. The highlight is left
    /// to the caller.
    pub(crate) fn set_items(&mut self, items: Vec<T>) {
        self.last_index = items.len().checked_sub(1);
        self.items = items;
    }

    /// Highlight the first item, or nothing if the list is empty.
    pub(crate) const fn highlight_first(&mut self) {
        self.highlighted_index = match self.last_index {
            Some(_) => Some(0),
            None => None,
        };
    }
}
