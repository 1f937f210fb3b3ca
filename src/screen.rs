//! Screen regions and the terminal's implementation of [`Platform`].

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{KeyEvent, MouseEventKind};
use lazypick::Platform;
use ratatui::layout::{Position, Rect};
use tracing::trace;

use crate::tui::Event;

/// Focusable areas of the picker screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Prompt,
    List,
}

/// Where things were drawn on the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub prompt: Rect,
    pub list: Rect,
    /// Index of the first visible list row.
    pub list_offset: usize,
}

/// Focus bookkeeping for a terminal, where "focus" only decides which region
/// receives typed input.
#[derive(Debug, Clone, Default)]
pub struct TerminalPlatform {
    focused: Rc<Cell<Option<Region>>>,
    layout: Rc<Cell<ScreenLayout>>,
}

impl TerminalPlatform {
    pub fn focused(&self) -> Option<Region> {
        self.focused.get()
    }

    pub fn set_layout(&self, layout: ScreenLayout) {
        self.layout.set(layout);
    }

    pub fn region_at(&self, column: u16, row: u16) -> Option<Region> {
        let layout = self.layout.get();
        let position = Position::new(column, row);
        if layout.prompt.contains(position) {
            Some(Region::Prompt)
        } else if layout.list.contains(position) {
            Some(Region::List)
        } else {
            None
        }
    }

    /// Item index under a click, accounting for the list border and scroll.
    pub fn list_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let layout = self.layout.get();
        let inner = layout.list.inner(ratatui::layout::Margin::new(1, 1));
        inner
            .contains(Position::new(column, row))
            .then(|| layout.list_offset + usize::from(row - inner.y))
    }
}

impl Platform for TerminalPlatform {
    type Element = Region;
    type Event = Event;

    fn focus(&self, element: &Region) {
        self.focused.set(Some(*element));
    }

    fn blur(&self, element: &Region) {
        if self.focused.get() == Some(*element) {
            self.focused.set(None);
        }
    }

    fn prevent_default(&self, event: &Event) {
        // Terminals have no default action to suppress.
        trace!(?event, "Prevent default");
    }

    fn element_from_event(&self, event: &Event) -> Option<Region> {
        match event {
            Event::FocusGained => Some(Region::Prompt),
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                self.region_at(mouse.column, mouse.row)
            }
            _ => None,
        }
    }

    fn key_of(&self, event: &Event) -> Option<KeyEvent> {
        match event {
            Event::Key(key) => Some(*key),
            _ => None,
        }
    }
}
