//! State paired with its last rendered view.

use std::fmt;

/// Caller-supplied function turning state into a view.
pub type RenderFn<S, V> = Box<dyn Fn(&S) -> V>;

/// Holds the state together with the view rendered from it.
///
/// The view is recomputed only by [`RenderBridge::update`] and
/// [`RenderBridge::set_render`]; reading it never renders.
pub struct RenderBridge<S, V> {
    state: S,
    view: V,
    render: RenderFn<S, V>,
}

impl<S, V> RenderBridge<S, V> {
    pub fn new(state: S, render: RenderFn<S, V>) -> Self {
        let view = render(&state);
        Self { state, view, render }
    }

    pub const fn state(&self) -> &S {
        &self.state
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Mutate the state and re-render from the result.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> R {
        let result = f(&mut self.state);
        self.view = (self.render)(&self.state);
        result
    }

    /// Swap the render function and re-render the unchanged state with it.
    pub fn set_render(&mut self, render: RenderFn<S, V>) {
        self.render = render;
        self.view = (self.render)(&self.state);
    }

    /// Mutable access that skips re-rendering. Only for fields the view
    /// does not depend on, such as timer bookkeeping during teardown.
    pub(crate) const fn state_mut_unrendered(&mut self) -> &mut S {
        &mut self.state
    }
}

impl<S: fmt::Debug, V: fmt::Debug> fmt::Debug for RenderBridge<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderBridge")
            .field("state", &self.state)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}
