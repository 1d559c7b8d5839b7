//! Footer widget displaying key bindings for the active mode.

use client_frontend_core::QuizViewModel;
use quiz_core::QuizMode;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, model: &QuizViewModel, theme: &RatatuiTheme) {
    let bindings: &[(&str, &str)] = if model.is_finished() {
        &[("Enter/Esc", " Menu  "), ("Ctrl+C", " Quit")]
    } else {
        match model.mode() {
            QuizMode::Exhaustive => &[
                ("Type", " Country  "),
                ("Enter", " Guess  "),
                ("←→↑↓", " Turn  "),
                ("PgUp/PgDn", " Zoom  "),
                ("Esc", " Menu  "),
                ("Ctrl+C", " Quit"),
            ],
            QuizMode::Random => &[
                ("1-9", " Answer  "),
                ("Tab", " Select  "),
                ("Enter", " Confirm  "),
                ("n", " Next  "),
                ("←→↑↓", " Turn  "),
                ("PgUp/PgDn", " Zoom  "),
                ("Esc", " Menu  "),
                ("q", " Quit"),
            ],
        }
    };

    let spans: Vec<Span> = bindings
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, theme.key_hint()),
                Span::styled(*label, theme.dim()),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(paragraph, area);
}
