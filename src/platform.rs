//! Side-effecting primitives supplied by the embedding host.

use crossterm::event::KeyEvent;

/// Host environment the controller calls into for focus and event handling.
///
/// Elements are opaque handles. The controller stores at most one of them and
/// only ever passes it back to [`Platform::focus`] and [`Platform::blur`]; it
/// never owns the element it refers to.
pub trait Platform {
    /// Handle to an interactive element in the host UI tree.
    type Element: Clone + std::fmt::Debug;

    /// Raw input event delivered by the host UI layer.
    type Event;

    /// Move input focus to `element`.
    fn focus(&self, element: &Self::Element);

    /// Release input focus from `element`.
    fn blur(&self, element: &Self::Element);

    /// Suppress whatever the host would do with `event` by default.
    fn prevent_default(&self, event: &Self::Event);

    /// Resolve the element that originated `event`, if it can be focused.
    fn element_from_event(&self, event: &Self::Event) -> Option<Self::Element>;

    /// The key carried by `event`, if it is a keyboard event.
    fn key_of(&self, event: &Self::Event) -> Option<KeyEvent>;
}
