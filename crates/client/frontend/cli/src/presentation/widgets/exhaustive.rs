//! Side panel for "name all the countries": the guess box and the list of
//! names found so far.

use client_frontend_core::QuizViewModel;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{presentation::theme::RatatuiTheme, state::CliState};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    model: &QuizViewModel,
    state: &CliState,
    theme: &RatatuiTheme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let prompt = if model.is_finished() {
        Line::from(Span::styled("Done", theme.dim()))
    } else {
        Line::from(vec![
            Span::raw(state.input.as_str()),
            Span::styled("_", theme.selection_marker()),
        ])
    };
    let input = Paragraph::new(prompt).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Country "),
    );
    frame.render_widget(input, chunks[0]);

    // Newest guess at the top.
    let items: Vec<ListItem> = model
        .history()
        .iter()
        .rev()
        .map(|name| ListItem::new(name.as_str()).style(Style::default().fg(Color::LightGreen)))
        .collect();
    let title = format!(" Named {} ", model.history().len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, chunks[1]);
}
