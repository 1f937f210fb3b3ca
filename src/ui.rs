//! Rendering for the terminal picker.
//!
//! [`render`] is the picker's render function: it turns interaction state
//! into a plain [`PickerView`]. [`draw`] paints that view with ratatui.

use lazypick::{InputMode, InteractionState};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::screen::{Region, ScreenLayout, TerminalPlatform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub query: String,
    pub open: bool,
    pub searching: bool,
    pub mode: InputMode,
    pub rows: Vec<String>,
    pub highlighted: Option<usize>,
}

pub fn render(state: &InteractionState<String, Region>) -> PickerView {
    PickerView {
        query: state.search_text().to_string(),
        open: state.visibility().is_on(),
        searching: state.is_debouncing(),
        mode: state.input_mode(),
        rows: state.items().to_vec(),
        highlighted: state.highlighted_index(),
    }
}

pub fn draw(frame: &mut Frame, view: &PickerView, help: &str, platform: &TerminalPlatform) {
    let [prompt_area, list_area, help_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let border = if platform.focused().is_some() { Color::Magenta } else { Color::DarkGray };
    let title = match (view.mode, view.searching) {
        (InputMode::ToggleDriven, _) => " Filter ",
        (InputMode::TextDriven, true) => " Search … ",
        (InputMode::TextDriven, false) => " Search ",
    };
    let prompt = Paragraph::new(Line::from(format!("{}▏", view.query))).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(title),
    );
    frame.render_widget(prompt, prompt_area);

    let mut list_offset = 0;
    if view.open {
        let items: Vec<ListItem> = view.rows.iter().map(|row| ListItem::new(row.as_str())).collect();
        let list = List::new(items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} items ", view.rows.len())),
            )
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(view.highlighted);
        frame.render_stateful_widget(list, list_area, &mut state);
        list_offset = state.offset();
    }

    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    platform.set_layout(ScreenLayout {
        prompt: prompt_area,
        list: if view.open { list_area } else { ratatui::layout::Rect::default() },
        list_offset,
    });
}
