//! Terminal host for the picker.
//!
//! [`Tui`] owns the terminal (raw mode, alternate screen, mouse capture) and
//! turns crossterm input plus a frame clock into a single [`Event`] stream.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::Result;
use crossterm::cursor;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseEvent,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use futures::{FutureExt, StreamExt};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::warn;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(500);

pub type Backend = CrosstermBackend<Stdout>;

#[derive(Clone, Debug)]
pub enum Event {
    Quit,
    Error(String),
    Render,
    FocusGained,
    FocusLost,
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

pub struct Tui {
    terminal: Terminal<Backend>,
    task: Option<JoinHandle<()>>,
    cancellation_token: CancellationToken,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    frame_rate: f64,
}

impl Tui {
    pub fn new(frame_rate: f64) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal: Terminal::new(Backend::new(std::io::stdout()))?,
            task: None,
            cancellation_token: CancellationToken::new(),
            event_rx,
            event_tx,
            frame_rate,
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        self.start();
        Ok(())
    }

    pub async fn exit(&mut self) -> Result<()> {
        self.stop().await;
        Self::restore()
    }

    fn restore() -> Result<()> {
        if crossterm::terminal::is_raw_mode_enabled()? {
            crossterm::execute!(
                std::io::stdout(),
                DisableFocusChange,
                DisableMouseCapture,
                LeaveAlternateScreen,
                cursor::Show
            )?;
            crossterm::terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    pub async fn next_event(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    fn start(&mut self) {
        self.cancellation_token.cancel();
        self.cancellation_token = CancellationToken::new();
        self.task = Some(tokio::spawn(Self::event_loop(
            self.event_tx.clone(),
            self.cancellation_token.clone(),
            self.frame_rate,
        )));
    }

    async fn stop(&mut self) {
        self.cancellation_token.cancel();
        let Some(task) = self.task.take() else {
            return;
        };
        let abort = task.abort_handle();
        if tokio::time::timeout(SHUTDOWN_TIMEOUT, task).await.is_err() {
            warn!("Terminal event loop did not stop in time, aborting");
            abort.abort();
        }
    }

    async fn event_loop(event_tx: UnboundedSender<Event>, cancellation_token: CancellationToken, frame_rate: f64) {
        let mut event_stream = EventStream::new();
        let mut frame_interval = tokio::time::interval(Duration::from_secs_f64(1.0 / frame_rate));

        #[cfg(unix)]
        {
            let event_tx = event_tx.clone();
            let token = cancellation_token.clone();
            tokio::spawn(async move {
                let Ok(mut sigterm) = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                else {
                    warn!("Could not install SIGTERM handler");
                    return;
                };
                tokio::select! {
                    () = token.cancelled() => {}
                    _ = sigterm.recv() => {
                        let _ = event_tx.send(Event::Quit);
                    }
                }
            });
        }

        loop {
            let event = tokio::select! {
                () = cancellation_token.cancelled() => break,
                _ = frame_interval.tick() => Event::Render,
                crossterm_event = event_stream.next().fuse() => match crossterm_event {
                    Some(Ok(CrosstermEvent::Key(key))) => {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                            Event::Quit
                        } else {
                            Event::Key(key)
                        }
                    }
                    Some(Ok(CrosstermEvent::Mouse(mouse))) => Event::Mouse(mouse),
                    Some(Ok(CrosstermEvent::Resize(width, height))) => Event::Resize(width, height),
                    Some(Ok(CrosstermEvent::FocusGained)) => Event::FocusGained,
                    Some(Ok(CrosstermEvent::FocusLost)) => Event::FocusLost,
                    Some(Ok(CrosstermEvent::Paste(_))) => continue,
                    Some(Err(e)) => Event::Error(e.to_string()),
                    None => break,
                },
            };
            if event_tx.send(event).is_err() {
                break;
            }
        }
        cancellation_token.cancel();
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
        if let Err(error) = Self::restore() {
            warn!(%error, "Failed to restore terminal");
        }
    }
}
