//! Reconfiguration pushed down by the embedding host.

use std::fmt;
use std::time::Duration;

use crate::render::RenderFn;
use crate::state::InteractionState;

/// Fields the host may update on a live picker. Anything left `None` keeps
/// its current value.
pub struct Reconfigure<T, V, E> {
    pub items: Option<Vec<T>>,
    pub debounce_interval: Option<Duration>,
    pub render: Option<RenderFn<InteractionState<T, E>, V>>,
}

impl<T, V, E> Default for Reconfigure<T, V, E> {
    fn default() -> Self {
        Self {
            items: None,
            debounce_interval: None,
            render: None,
        }
    }
}

impl<T, V, E> Reconfigure<T, V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<T>) -> Self {
        self.items = Some(items);
        self
    }

    /// Negative values count as zero.
    #[must_use]
    pub fn with_debounce_ms(mut self, ms: i64) -> Self {
        self.debounce_interval = Some(Duration::from_millis(ms.max(0).unsigned_abs()));
        self
    }

    #[must_use]
    pub fn with_render(mut self, render: impl Fn(&InteractionState<T, E>) -> V + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Fold the state-affecting fields into `state`.
    ///
    /// A new item list keeps the current highlight when it still points into
    /// the list and clears it otherwise.
    pub(crate) fn apply_to(&mut self, state: &mut InteractionState<T, E>) {
        if let Some(interval) = self.debounce_interval {
            state.debounce_interval = interval;
        }
        if let Some(items) = self.items.take() {
            state.set_items(items);
            if let Some(index) = state.highlighted_index
                && state.last_index.is_none_or(|last| index > last)
            {
                state.highlighted_index = None;
            }
        }
    }

    pub(crate) const fn changes_state(&self) -> bool {
        self.items.is_some() || self.debounce_interval.is_some()
    }
}

impl<T: fmt::Debug, V, E> fmt::Debug for Reconfigure<T, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reconfigure")
            .field("items", &self.items)
            .field("debounce_interval", &self.debounce_interval)
            .field("render", &self.render.is_some())
            .finish()
    }
}
