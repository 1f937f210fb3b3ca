use std::path::PathBuf;

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use lazypick::config::{self, AppConfig, KeyResolver, PickAction};
use lazypick::search::Matcher;
use lazypick::{Command, Controller, Notification, Reconfigure, SelectConfig, Target};
use serde_json::json;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::screen::TerminalPlatform;
use crate::tui::{Event, Tui};
use crate::ui::{self, PickerView};

const FRAME_RATE: f64 = 30.0;

type Picker = Controller<String, PickerView, TerminalPlatform>;

/// How the picker session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An item from the list was selected.
    Selected(String),
    /// The raw query was accepted instead of an item.
    Accepted(String),
}

pub struct App {
    picker: Picker,
    notifications: UnboundedReceiver<Notification<String>>,
    platform: TerminalPlatform,
    resolver: KeyResolver,
    source: Vec<String>,
    matcher: Matcher,
    query: String,
    help: String,
    config_path: Option<PathBuf>,
    outcome: Option<Outcome>,
    should_quit: bool,
}

impl App {
    pub fn new(items: Vec<String>, config: AppConfig, config_path: Option<PathBuf>) -> Self {
        let platform = TerminalPlatform::default();
        let resolver = KeyResolver::new(config.keybindings.clone().into());
        let help = format!(
            "{} / {} move · {} pick · alt+Enter accept query · Tab toggle · {} quit",
            resolver.display(PickAction::Previous),
            resolver.display(PickAction::Next),
            resolver.display(PickAction::Confirm),
            resolver.display(PickAction::Dismiss),
        );

        let select = SelectConfig::new(ui::render)
            .with_items(items.clone())
            .with_options(&config.picker)
            .with_keybindings(config.keybindings);
        let (picker, notifications) = Controller::new(select, platform.clone());

        Self {
            query: picker.state().search_text().to_string(),
            picker,
            notifications,
            platform,
            resolver,
            source: items,
            matcher: Matcher::new(),
            help,
            config_path,
            outcome: None,
            should_quit: false,
        }
    }

    pub async fn run(mut self) -> Result<Option<Outcome>> {
        let mut tui = Tui::new(FRAME_RATE)?;
        tui.enter()?;

        self.focus_prompt();
        if !self.query.is_empty() {
            self.picker.dispatch(Command::Search(self.query.clone()));
        }

        loop {
            let next = tokio::select! {
                event = tui.next_event() => Some(event),
                () = self.picker.process_next() => None,
            };
            match next {
                Some(Some(event)) => self.handle_event(event, &mut tui)?,
                Some(None) => break,
                None => {}
            }

            self.handle_notifications();
            if self.should_quit {
                break;
            }
        }

        self.picker.shutdown();
        tui.exit().await?;
        info!(outcome = ?self.outcome, "Picker closed");
        Ok(self.outcome)
    }

    fn handle_event(&mut self, event: Event, tui: &mut Tui) -> Result<()> {
        match event {
            Event::Quit => self.should_quit = true,
            Event::Render | Event::Resize(..) => {
                tui.draw(|frame| ui::draw(frame, self.picker.view(), &self.help, &self.platform))?;
            }
            Event::Error(error) => warn!(%error, "Terminal event error"),
            Event::FocusGained => self.focus_prompt(),
            Event::FocusLost => debug!("Terminal lost focus"),
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(event, mouse);
            }
            Event::Mouse(_) => {}
        }
        Ok(())
    }

    fn handle_click(&mut self, event: Event, mouse: MouseEvent) {
        self.picker.dispatch(Command::PreventClick(event.clone()));
        self.picker.dispatch(Command::CaptureRef(event));
        self.picker.dispatch(Command::Focus);
        if let Some(row) = self.platform.list_row_at(mouse.column, mouse.row) {
            self.picker.dispatch(Command::Highlight(Target::Index(row)));
            self.picker.dispatch(Command::Select(row));
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => self.reload_config(),
            (KeyCode::Enter, KeyModifiers::ALT) => {
                self.picker.dispatch(Command::Raise(json!({ "accept": self.query })));
            }
            (KeyCode::Tab, _) => self.picker.dispatch(Command::ToggleVisibility),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.query.push(c);
                self.picker.dispatch(Command::Search(self.query.clone()));
            }
            (KeyCode::Backspace, _) => {
                self.query.pop();
                self.picker.dispatch(Command::Search(self.query.clone()));
            }
            _ => {
                self.picker.dispatch(Command::Key(Event::Key(key)));
                if self.resolver.matches(&key, PickAction::Dismiss) {
                    debug!(focused = ?self.platform.focused(), "Picker dismissed");
                    self.should_quit = true;
                }
            }
        }
    }

    fn handle_notifications(&mut self) {
        while let Ok(notification) = self.notifications.try_recv() {
            match notification {
                Notification::Searched(text) => {
                    let items = self.matcher.filter(&self.source, &text);
                    debug!(query = %text, matches = items.len(), "Search settled");
                    self.picker.dispatch(Command::Receive(Reconfigure::new().with_items(items)));
                }
                Notification::Selected(item) => {
                    self.outcome = Some(Outcome::Selected(item));
                    self.should_quit = true;
                }
                Notification::Emit(payload) => {
                    if let Some(query) = payload.get("accept").and_then(|v| v.as_str()) {
                        self.outcome = Some(Outcome::Accepted(query.to_string()));
                        self.should_quit = true;
                    }
                }
                Notification::VisibilityChanged(visibility) => {
                    debug!(%visibility, "List visibility changed");
                }
            }
        }
    }

    fn reload_config(&mut self) {
        let loaded = match &self.config_path {
            Some(path) => config::load_from(path),
            None => config::load(),
        };
        match loaded {
            Ok(config) => {
                info!(debounce_ms = config.picker.debounce_ms, "Reloaded config");
                self.picker
                    .dispatch(Command::Receive(Reconfigure::new().with_debounce_ms(config.picker.debounce_ms)));
            }
            Err(error) => warn!(%error, "Failed to reload config"),
        }
    }

    /// Bind the prompt as the picker's focus target and focus it.
    fn focus_prompt(&mut self) {
        self.picker.dispatch(Command::CaptureRef(Event::FocusGained));
        self.picker.dispatch(Command::Focus);
    }
}
