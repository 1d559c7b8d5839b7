//! Side panel for "random guess": the numbered options of the current round.

use client_frontend_core::QuizViewModel;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::{presentation::theme::RatatuiTheme, state::CliState};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    model: &QuizViewModel,
    state: &CliState,
    theme: &RatatuiTheme,
) {
    let items: Vec<ListItem> = model
        .options()
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let is_selected = idx == state.selected;
            let base = Style::default().fg(Color::White);
            ListItem::new(Line::from(vec![
                Span::styled(
                    if is_selected { "► " } else { "  " },
                    theme.selection_marker(),
                ),
                Span::styled(format!("{}. ", idx + 1), theme.dim()),
                Span::styled(
                    option.as_str(),
                    if is_selected { theme.emphasize(base) } else { base },
                ),
            ]))
        })
        .collect();

    let title = match model.round_number() {
        Some(number) => format!(" Round {number} "),
        None => " No round ".to_string(),
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(title)
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(list, area);
}
