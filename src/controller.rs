//! The picker's state controller.
//!
//! Every interaction is expressed as a [`Command`] and applied by
//! [`Controller::dispatch`], which runs it to completion before returning.
//! The only work that outlives a command is the debounce timer started by a
//! search; its expiry comes back through an internal channel that the host
//! drains with [`Controller::process_next`] or [`Controller::drain`].
//!
//! Outward effects are reported as [`Notification`]s on the receiver returned
//! from [`Controller::new`].

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, trace};

use crate::config::{KeyResolver, PickerKeybindings, PickerOptions};
use crate::debounce::{DebounceTimer, PendingDebounce, TimerMessage};
use crate::host::Reconfigure;
use crate::navigation::{Target, navigate};
use crate::platform::Platform;
use crate::render::{RenderBridge, RenderFn};
use crate::router::{KeyAction, route_key};
use crate::state::{InputMode, InteractionState};
use crate::visibility::Visibility;

/// Everything a host can ask the picker to do.
pub enum Command<T, V, P: Platform, O = serde_json::Value> {
    /// Update the search text and open the list.
    Search(String),
    /// Move the highlight. Ignored while the list is hidden.
    Highlight(Target),
    /// Report the item at the index. Ignored while hidden or out of range.
    Select(usize),
    /// Remember the element that originated the event for focus handling.
    CaptureRef(P::Event),
    Focus,
    Blur,
    /// Keyboard input from the bound element.
    Key(P::Event),
    /// Stop a click from reaching the host's other listeners.
    PreventClick(P::Event),
    SetVisibility(Visibility),
    ToggleVisibility,
    ReplaceItems(Vec<T>),
    /// Forward a custom payload to the host unchanged.
    Raise(O),
    /// Merge new host configuration while keeping interaction state.
    Receive(Reconfigure<T, V, P::Element>),
}

impl<T, V, P: Platform, O> Command<T, V, P, O> {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Search(_) => "search",
            Self::Highlight(_) => "highlight",
            Self::Select(_) => "select",
            Self::CaptureRef(_) => "capture_ref",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Key(_) => "key",
            Self::PreventClick(_) => "prevent_click",
            Self::SetVisibility(_) => "set_visibility",
            Self::ToggleVisibility => "toggle_visibility",
            Self::ReplaceItems(_) => "replace_items",
            Self::Raise(_) => "raise",
            Self::Receive(_) => "receive",
        }
    }
}

impl<T, V, P: Platform, O> fmt::Debug for Command<T, V, P, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command::{}", self.name())
    }
}

/// Messages the picker sends to its host. `O` is the payload type of
/// host-defined actions passed through [`Command::Raise`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification<T, O = serde_json::Value> {
    /// The search text settled after the debounce interval.
    Searched(String),
    Selected(T),
    VisibilityChanged(Visibility),
    Emit(O),
}

/// Construction options for a [`Controller`].
pub struct SelectConfig<T, V, E> {
    mode: InputMode,
    items: Vec<T>,
    initial_search: Option<String>,
    debounce_interval: Duration,
    keybindings: PickerKeybindings,
    render: RenderFn<InteractionState<T, E>, V>,
}

impl<T, V, E> SelectConfig<T, V, E> {
    pub fn new(render: impl Fn(&InteractionState<T, E>) -> V + 'static) -> Self {
        Self {
            mode: InputMode::default(),
            items: Vec::new(),
            initial_search: None,
            debounce_interval: Duration::ZERO,
            keybindings: PickerKeybindings::default(),
            render: Box::new(render),
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<T>) -> Self {
        self.items = items;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: InputMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_initial_search(mut self, text: impl Into<String>) -> Self {
        self.initial_search = Some(text.into());
        self
    }

    /// Negative values count as zero.
    #[must_use]
    pub fn with_debounce_ms(mut self, ms: i64) -> Self {
        self.debounce_interval = Duration::from_millis(ms.max(0).unsigned_abs());
        self
    }

    #[must_use]
    pub fn with_keybindings(mut self, keybindings: PickerKeybindings) -> Self {
        self.keybindings = keybindings;
        self
    }

    /// Apply options loaded from a config file.
    #[must_use]
    pub fn with_options(mut self, options: &PickerOptions) -> Self {
        self.mode = options.mode;
        self.debounce_interval = options.debounce_interval();
        if let Some(text) = &options.initial_search {
            self.initial_search = Some(text.clone());
        }
        self
    }
}

impl<T, V, E> fmt::Debug for SelectConfig<T, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectConfig")
            .field("mode", &self.mode)
            .field("items", &self.items.len())
            .field("initial_search", &self.initial_search)
            .field("debounce_interval", &self.debounce_interval)
            .finish_non_exhaustive()
    }
}

/// Owns the interaction state of one picker and applies commands to it.
///
/// Must be used from within a tokio runtime, since searches spawn their
/// debounce timer as a task. Dropping the controller cancels a pending timer.
pub struct Controller<T, V, P: Platform, O = serde_json::Value> {
    bridge: RenderBridge<InteractionState<T, P::Element>, V>,
    platform: P,
    resolver: KeyResolver,
    timer: DebounceTimer,
    timer_rx: UnboundedReceiver<TimerMessage>,
    notify_tx: UnboundedSender<Notification<T, O>>,
}

impl<T, V, P, O> Controller<T, V, P, O>
where
    T: Clone + fmt::Debug,
    P: Platform,
    O: fmt::Debug,
{
    pub fn new(config: SelectConfig<T, V, P::Element>, platform: P) -> (Self, UnboundedReceiver<Notification<T, O>>) {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let (notify_tx, notify_rx) = mpsc::unbounded_channel();

        let state = InteractionState::new(
            config.mode,
            config.items,
            config.initial_search.unwrap_or_default(),
            config.debounce_interval,
        );

        let controller = Self {
            bridge: RenderBridge::new(state, config.render),
            platform,
            resolver: KeyResolver::new(config.keybindings.into()),
            timer: DebounceTimer::new(timer_tx),
            timer_rx,
            notify_tx,
        };
        (controller, notify_rx)
    }

    pub const fn state(&self) -> &InteractionState<T, P::Element> {
        self.bridge.state()
    }

    /// The view rendered after the last state change.
    pub const fn view(&self) -> &V {
        self.bridge.view()
    }

    pub const fn visibility(&self) -> Visibility {
        self.bridge.state().visibility()
    }

    pub fn highlighted_item(&self) -> Option<&T> {
        self.bridge.state().highlighted_item()
    }

    /// Apply `command` synchronously.
    pub fn dispatch(&mut self, command: Command<T, V, P, O>) {
        debug!(command = command.name(), "Dispatching command");

        match command {
            Command::Search(text) => self.search(text),
            Command::Highlight(target) => self.highlight(target),
            Command::Select(index) => self.select(index),
            Command::CaptureRef(event) => {
                let element = self.platform.element_from_event(&event);
                if element.is_none() {
                    trace!("Event has no focusable origin, clearing focus target");
                }
                self.bridge.update(|state| state.focus_target = element);
            }
            Command::Focus => {
                if let Some(element) = self.bridge.state().focus_target() {
                    self.platform.focus(element);
                }
            }
            Command::Blur => self.blur(),
            Command::Key(event) => self.key(&event),
            Command::PreventClick(event) => self.platform.prevent_default(&event),
            Command::SetVisibility(visibility) => self.set_visibility(visibility),
            Command::ToggleVisibility => self.set_visibility(!self.visibility()),
            Command::ReplaceItems(items) => self.bridge.update(|state| {
                state.set_items(items);
                state.highlighted_index = None;
            }),
            Command::Raise(payload) => self.notify(Notification::Emit(payload)),
            Command::Receive(config) => self.receive(config),
        }
    }

    /// Wait for the next timer message and apply it.
    ///
    /// Cancel safe, so it can sit in a `tokio::select!` next to the host's
    /// own event source.
    pub async fn process_next(&mut self) {
        if let Some(message) = self.timer_rx.recv().await {
            self.on_timer(message);
        }
    }

    /// Apply every timer message that is already queued, without waiting.
    pub fn drain(&mut self) {
        while let Ok(message) = self.timer_rx.try_recv() {
            self.on_timer(message);
        }
    }

    fn search(&mut self, text: String) {
        // Expiries that already arrived belong to the previous text.
        self.drain();

        let timer = &mut self.timer;
        self.bridge.update(|state| {
            state.search_text = text;
            state.visibility = Visibility::On;
            match state.input_mode {
                InputMode::TextDriven => {
                    timer.restart(&mut state.pending_debounce, state.debounce_interval);
                }
                // Keystroke accumulation for toggle-driven pickers is not supported.
                InputMode::ToggleDriven => trace!("Search in toggle mode is not reported"),
            }
        });
    }

    fn highlight(&mut self, target: Target) {
        if !self.visibility().is_on() {
            trace!(?target, "List hidden, ignoring highlight");
            return;
        }
        self.bridge.update(|state| {
            state.highlighted_index = navigate(state.highlighted_index, state.last_index, target);
        });
    }

    fn select(&mut self, index: usize) {
        if !self.visibility().is_on() {
            trace!(index, "List hidden, ignoring select");
            return;
        }
        match self.bridge.state().items().get(index).cloned() {
            Some(item) => self.notify(Notification::Selected(item)),
            None => trace!(index, "No item at index"),
        }
    }

    fn blur(&self) {
        if let Some(element) = self.bridge.state().focus_target() {
            self.platform.blur(element);
        }
    }

    fn key(&mut self, event: &P::Event) {
        if !self.visibility().is_on() {
            self.bridge.update(|state| state.visibility = Visibility::On);
        }

        let Some(key) = self.platform.key_of(event) else {
            trace!("Key command without a key event");
            return;
        };

        let action = route_key(&self.resolver, &key);
        if action.prevents_default() {
            self.platform.prevent_default(event);
        }

        match action {
            KeyAction::Highlight(target) => self.highlight(target),
            KeyAction::Dismiss => self.blur(),
            KeyAction::Confirm => {
                if let Some(index) = self.bridge.state().highlighted_index() {
                    self.select(index);
                }
            }
            KeyAction::Ignore => trace!(?key, "Unbound key"),
        }
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        if self.visibility() == visibility {
            trace!(%visibility, "Visibility unchanged");
            return;
        }
        self.bridge.update(|state| {
            state.visibility = visibility;
            if visibility.is_on() {
                state.highlight_first();
            }
        });
        self.notify(Notification::VisibilityChanged(visibility));
    }

    fn receive(&mut self, mut config: Reconfigure<T, V, P::Element>) {
        match config.render.take() {
            Some(render) => {
                config.apply_to(self.bridge.state_mut_unrendered());
                self.bridge.set_render(render);
            }
            None if config.changes_state() => self.bridge.update(|state| config.apply_to(state)),
            None => {}
        }
    }

    fn on_timer(&mut self, message: TimerMessage) {
        let TimerMessage::Elapsed(ticket) = message;

        let pending = self.bridge.state().pending_debounce.as_ref().map(PendingDebounce::ticket);
        if pending != Some(ticket) {
            trace!(ticket, "Ignoring stale debounce timer");
            return;
        }

        let text = self.bridge.update(|state| {
            DebounceTimer::complete(&mut state.pending_debounce, ticket);
            state.highlight_first();
            state.search_text.clone()
        });
        self.notify(Notification::Searched(text));
    }

    fn notify(&self, notification: Notification<T, O>) {
        debug!(?notification, "Notifying host");
        if self.notify_tx.send(notification).is_err() {
            debug!("Notification receiver dropped");
        }
    }
}

impl<T, V, P: Platform, O> Controller<T, V, P, O> {
    /// Cancel any pending debounce and re-render. Expiries still queued are
    /// discarded.
    pub fn shutdown(&mut self) {
        self.bridge.update(|state| DebounceTimer::cancel(&mut state.pending_debounce));
    }
}

impl<T, V, P: Platform, O> Drop for Controller<T, V, P, O> {
    fn drop(&mut self) {
        DebounceTimer::cancel(&mut self.bridge.state_mut_unrendered().pending_debounce);
    }
}

impl<T: fmt::Debug, V: fmt::Debug, P: Platform, O> fmt::Debug for Controller<T, V, P, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("bridge", &self.bridge)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use crossterm::event::KeyCode;
    use serde_json::json;
    use tokio::sync::mpsc::error::TryRecvError;

    use super::*;
    use crate::platform::testing::{Call, FakeEvent, RecordingPlatform};

    type TestController = Controller<&'static str, String, RecordingPlatform>;
    type Notifications = UnboundedReceiver<Notification<&'static str>>;

    fn summary(state: &InteractionState<&'static str, &'static str>) -> String {
        format!(
            "{}|{}|{:?}",
            state.visibility(),
            state.search_text(),
            state.highlighted_index()
        )
    }

    fn picker(items: &[&'static str], debounce_ms: i64) -> (TestController, Notifications, RecordingPlatform) {
        let platform = RecordingPlatform::default();
        let config = SelectConfig::new(summary)
            .with_items(items.to_vec())
            .with_debounce_ms(debounce_ms);
        let (controller, notifications) = Controller::new(config, platform.clone());
        (controller, notifications, platform)
    }

    fn collect(notifications: &mut Notifications) -> Vec<Notification<&'static str>> {
        let mut out = Vec::new();
        while let Ok(n) = notifications.try_recv() {
            out.push(n);
        }
        out
    }

    fn key(code: KeyCode) -> Command<&'static str, String, RecordingPlatform> {
        Command::Key(FakeEvent::key(code))
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_select_scenario() {
        let (mut picker, mut notifications, _) = picker(&["a", "b", "c"], 0);

        picker.dispatch(Command::Search("x".into()));
        assert!(picker.state().is_debouncing());
        picker.process_next().await;

        assert_eq!(collect(&mut notifications), [Notification::Searched("x".into())]);
        assert_eq!(picker.state().highlighted_index(), Some(0));
        assert!(!picker.state().is_debouncing());

        picker.dispatch(key(KeyCode::Down));
        assert_eq!(picker.state().highlighted_index(), Some(1));

        picker.dispatch(key(KeyCode::Enter));
        assert_eq!(collect(&mut notifications), [Notification::Selected("b")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_coalesces_searches() {
        let (mut picker, mut notifications, _) = picker(&["a"], 100);

        picker.dispatch(Command::Search("a".into()));
        tokio::time::sleep(Duration::from_millis(30)).await;
        picker.dispatch(Command::Search("ab".into()));
        tokio::time::sleep(Duration::from_millis(30)).await;
        picker.dispatch(Command::Search("abc".into()));

        picker.process_next().await;
        tokio::time::sleep(Duration::from_secs(1)).await;
        picker.drain();

        assert_eq!(collect(&mut notifications), [Notification::Searched("abc".into())]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_searched_reports_text_at_expiry() {
        let (mut picker, mut notifications, _) = picker(&["a"], 50);

        picker.dispatch(Command::Search("first".into()));
        tokio::time::sleep(Duration::from_millis(10)).await;
        picker.dispatch(Command::Search("second".into()));
        tokio::time::sleep(Duration::from_millis(200)).await;
        picker.drain();

        let notes = collect(&mut notifications);
        assert_eq!(notes, [Notification::Searched("second".into())]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_without_waiting_does_not_notify() {
        let (mut picker, mut notifications, _) = picker(&["a"], 100);

        picker.dispatch(Command::Search("a".into()));
        picker.drain();

        assert_eq!(notifications.try_recv(), Err(TryRecvError::Empty));
        assert_eq!(picker.visibility(), Visibility::On);
        assert_eq!(picker.state().search_text(), "a");
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_search() {
        let (mut picker, mut notifications, _) = picker(&["a"], 20);

        picker.dispatch(Command::Search("a".into()));
        picker.shutdown();
        assert!(!picker.state().is_debouncing());

        tokio::time::sleep(Duration::from_millis(100)).await;
        picker.drain();
        assert_eq!(notifications.try_recv(), Err(TryRecvError::Empty));
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_search_reports_before_next_search() {
        let (mut picker, mut notifications, _) = picker(&["a"], 10);

        picker.dispatch(Command::Search("a".into()));
        tokio::time::sleep(Duration::from_millis(50)).await;
        picker.dispatch(Command::Search("ab".into()));
        tokio::time::sleep(Duration::from_millis(50)).await;
        picker.drain();

        assert_eq!(
            collect(&mut notifications),
            [Notification::Searched("a".into()), Notification::Searched("ab".into())]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_expiry_after_shutdown_is_discarded() {
        let (mut picker, mut notifications, _) = picker(&["a"], 10);

        picker.dispatch(Command::Search("a".into()));
        tokio::time::sleep(Duration::from_millis(50)).await;
        picker.shutdown();
        picker.drain();

        assert_eq!(notifications.try_recv(), Err(TryRecvError::Empty));
        assert_eq!(picker.state().highlighted_index(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_rerenders_view() {
        let config = SelectConfig::new(|state: &InteractionState<&'static str, &'static str>| state.is_debouncing())
            .with_debounce_ms(100);
        let (mut picker, _notifications): (Controller<_, _, RecordingPlatform>, _) =
            Controller::new(config, RecordingPlatform::default());

        picker.dispatch(Command::Search("a".into()));
        assert!(*picker.view());
        picker.shutdown();
        assert!(!*picker.view());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_pending_timer() {
        let (mut picker, mut notifications, _) = picker(&["a"], 100);
        let metrics = tokio::runtime::Handle::current().metrics();

        picker.dispatch(Command::Search("a".into()));
        assert_eq!(metrics.num_alive_tasks(), 1);

        drop(picker);
        tokio::task::yield_now().await;

        assert_eq!(metrics.num_alive_tasks(), 0);
        assert_eq!(notifications.recv().await, None);
    }

    #[test]
    fn test_raise_with_custom_payload_type() {
        #[derive(Debug, Clone, PartialEq, Eq)]
        enum Action {
            Create(String),
        }

        let config = SelectConfig::new(summary);
        let (mut picker, mut notifications): (Controller<_, _, RecordingPlatform, Action>, _) =
            Controller::new(config, RecordingPlatform::default());

        picker.dispatch(Command::Raise(Action::Create("new".into())));
        assert_eq!(
            notifications.try_recv(),
            Ok(Notification::Emit(Action::Create("new".into())))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_mode_search_is_not_debounced() {
        let platform = RecordingPlatform::default();
        let config = SelectConfig::new(summary)
            .with_items(vec!["a", "b"])
            .with_mode(InputMode::ToggleDriven);
        let (mut picker, mut notifications): (TestController, _) = Controller::new(config, platform);

        picker.dispatch(Command::Search("b".into()));
        assert!(!picker.state().is_debouncing());
        assert_eq!(picker.visibility(), Visibility::On);

        tokio::time::sleep(Duration::from_millis(50)).await;
        picker.drain();
        assert_eq!(notifications.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_navigation_wraps() {
        let (mut picker, _notifications, _) = picker(&["a", "b", "c"], 0);
        picker.dispatch(Command::SetVisibility(Visibility::On));

        picker.dispatch(Command::Highlight(Target::Previous));
        assert_eq!(picker.state().highlighted_index(), Some(2));

        picker.dispatch(Command::Highlight(Target::Next));
        assert_eq!(picker.state().highlighted_index(), Some(0));

        picker.dispatch(Command::Highlight(Target::Index(1)));
        assert_eq!(picker.highlighted_item(), Some(&"b"));
    }

    #[test]
    fn test_highlight_ignored_while_hidden() {
        let (mut picker, _notifications, _) = picker(&["a", "b"], 0);
        picker.dispatch(Command::Highlight(Target::Next));
        assert_eq!(picker.state().highlighted_index(), None);
    }

    #[test]
    fn test_select_out_of_range() {
        let (mut picker, mut notifications, _) = picker(&["a", "b", "c"], 0);
        picker.dispatch(Command::SetVisibility(Visibility::On));
        let _ = collect(&mut notifications);
        let before = picker.view().clone();

        picker.dispatch(Command::Select(5));

        assert_eq!(notifications.try_recv(), Err(TryRecvError::Empty));
        assert_eq!(picker.view(), &before);
    }

    #[test]
    fn test_select_ignored_while_hidden() {
        let (mut picker, mut notifications, _) = picker(&["a"], 0);
        picker.dispatch(Command::Select(0));
        assert_eq!(notifications.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn test_set_visibility_is_idempotent() {
        let (mut picker, mut notifications, _) = picker(&["a", "b"], 0);

        picker.dispatch(Command::SetVisibility(Visibility::On));
        picker.dispatch(Command::SetVisibility(Visibility::On));

        assert_eq!(
            collect(&mut notifications),
            [Notification::VisibilityChanged(Visibility::On)]
        );
        assert_eq!(picker.state().highlighted_index(), Some(0));
    }

    #[test]
    fn test_toggle_visibility() {
        let (mut picker, mut notifications, _) = picker(&["a"], 0);

        picker.dispatch(Command::ToggleVisibility);
        assert_eq!(picker.visibility(), Visibility::On);
        picker.dispatch(Command::ToggleVisibility);
        assert_eq!(picker.visibility(), Visibility::Off);

        assert_eq!(
            collect(&mut notifications),
            [
                Notification::VisibilityChanged(Visibility::On),
                Notification::VisibilityChanged(Visibility::Off),
            ]
        );
    }

    #[test]
    fn test_replace_items_resets_highlight() {
        let (mut picker, _notifications, _) = picker(&["a", "b", "c"], 0);
        picker.dispatch(Command::SetVisibility(Visibility::On));
        picker.dispatch(Command::Highlight(Target::Index(2)));

        picker.dispatch(Command::ReplaceItems(vec!["x", "y"]));

        assert_eq!(picker.state().highlighted_index(), None);
        assert_eq!(picker.state().last_index(), Some(1));
        assert_eq!(picker.view(), "on||None");
    }

    #[test]
    fn test_escape_blurs_captured_element_once() {
        let (mut picker, mut notifications, platform) = picker(&["a"], 0);
        picker.dispatch(Command::CaptureRef(FakeEvent::Click(Some("input"))));

        picker.dispatch(key(KeyCode::Esc));

        assert_eq!(platform.count(&Call::Blur("input")), 1);
        assert_eq!(platform.count(&Call::PreventDefault), 1);
        assert_eq!(notifications.try_recv(), Err(TryRecvError::Empty));
        assert_eq!(picker.state().highlighted_index(), None);
    }

    #[test]
    fn test_key_opens_list_without_notifying() {
        let (mut picker, mut notifications, platform) = picker(&["a"], 0);

        picker.dispatch(key(KeyCode::Char('q')));

        assert_eq!(picker.visibility(), Visibility::On);
        assert_eq!(notifications.try_recv(), Err(TryRecvError::Empty));
        assert!(platform.calls().is_empty());
    }

    #[test]
    fn test_enter_without_highlight_selects_nothing() {
        let (mut picker, mut notifications, platform) = picker(&["a"], 0);

        picker.dispatch(key(KeyCode::Enter));

        assert_eq!(notifications.try_recv(), Err(TryRecvError::Empty));
        assert_eq!(platform.count(&Call::PreventDefault), 1);
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let (mut picker, _notifications, _) = picker(&["a", "b", "c"], 0);

        picker.dispatch(key(KeyCode::Up));
        assert_eq!(picker.state().highlighted_index(), Some(2));
        picker.dispatch(key(KeyCode::Up));
        assert_eq!(picker.state().highlighted_index(), Some(1));
        picker.dispatch(key(KeyCode::Down));
        assert_eq!(picker.state().highlighted_index(), Some(2));
    }

    #[test]
    fn test_focus_and_blur_use_captured_element() {
        let (mut picker, _notifications, platform) = picker(&["a"], 0);

        picker.dispatch(Command::Focus);
        assert!(platform.calls().is_empty());

        picker.dispatch(Command::CaptureRef(FakeEvent::Click(Some("button"))));
        picker.dispatch(Command::Focus);
        picker.dispatch(Command::Blur);
        assert_eq!(platform.calls(), [Call::Focus("button"), Call::Blur("button")]);

        picker.dispatch(Command::CaptureRef(FakeEvent::Click(None)));
        assert_eq!(picker.state().focus_target(), None);
        picker.dispatch(Command::Blur);
        assert_eq!(platform.calls().len(), 2);
    }

    #[test]
    fn test_prevent_click() {
        let (mut picker, _notifications, platform) = picker(&["a"], 0);
        picker.dispatch(Command::PreventClick(FakeEvent::Click(Some("button"))));
        assert_eq!(platform.calls(), [Call::PreventDefault]);
        assert_eq!(picker.visibility(), Visibility::Off);
    }

    #[test]
    fn test_raise_emits_payload() {
        let (mut picker, mut notifications, _) = picker(&[], 0);
        picker.dispatch(Command::Raise(json!({ "action": "create", "name": "new" })));
        assert_eq!(
            collect(&mut notifications),
            [Notification::Emit(json!({ "action": "create", "name": "new" }))]
        );
    }

    #[test]
    fn test_receive_preserves_interaction_state() {
        let (mut picker, _notifications, _) = picker(&["a", "b", "c"], 0);
        picker.dispatch(Command::SetVisibility(Visibility::On));
        picker.dispatch(Command::Highlight(Target::Next));

        picker.dispatch(Command::Receive(
            Reconfigure::new()
                .with_items(vec!["a", "b", "c", "d"])
                .with_debounce_ms(300),
        ));

        assert_eq!(picker.state().highlighted_index(), Some(1));
        assert_eq!(picker.state().last_index(), Some(3));
        assert_eq!(picker.state().debounce_interval(), Duration::from_millis(300));
        assert_eq!(picker.visibility(), Visibility::On);
    }

    #[test]
    fn test_receive_render_rerenders_current_state() {
        let (mut picker, _notifications, _) = picker(&["a", "b"], 0);
        picker.dispatch(Command::SetVisibility(Visibility::On));

        picker.dispatch(Command::Receive(Reconfigure::new().with_render(|state| {
            format!("{} items", state.items().len())
        })));

        assert_eq!(picker.view(), "2 items");
        assert_eq!(picker.state().highlighted_index(), Some(0));
    }

    #[test]
    fn test_view_renders_once_per_change() {
        let renders = Rc::new(Cell::new(0));
        let counter = Rc::clone(&renders);
        let config = SelectConfig::new(move |state: &InteractionState<&'static str, &'static str>| {
            counter.set(counter.get() + 1);
            state.highlighted_index()
        })
        .with_items(vec!["a", "b"]);
        let (mut picker, _notifications): (Controller<_, _, RecordingPlatform>, _) =
            Controller::new(config, RecordingPlatform::default());
        assert_eq!(renders.get(), 1);

        picker.dispatch(Command::SetVisibility(Visibility::On));
        picker.dispatch(Command::SetVisibility(Visibility::On));
        picker.dispatch(Command::Select(0));
        let _ = picker.view();
        assert_eq!(renders.get(), 2);

        picker.dispatch(Command::Highlight(Target::Next));
        assert_eq!(*picker.view(), Some(1));
        assert_eq!(renders.get(), 3);
    }

    #[test]
    fn test_initial_search_and_options() {
        let options = PickerOptions {
            mode: InputMode::ToggleDriven,
            debounce_ms: -1,
            initial_search: Some("hello".into()),
        };
        let config = SelectConfig::new(summary).with_options(&options);
        let (picker, _notifications): (TestController, _) = Controller::new(config, RecordingPlatform::default());

        assert_eq!(picker.state().search_text(), "hello");
        assert_eq!(picker.state().input_mode(), InputMode::ToggleDriven);
        assert_eq!(picker.state().debounce_interval(), Duration::ZERO);
        assert_eq!(picker.view(), "off|hello|None");
    }
}
