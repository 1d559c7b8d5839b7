//! Header widget displaying mode, progress, and the latest feedback.

use client_frontend_core::QuizViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, model: &QuizViewModel, theme: &RatatuiTheme) {
    let mut spans = vec![
        Span::raw("Mode: "),
        Span::styled(
            model.mode().to_string(),
            theme.emphasize(Style::default().fg(Color::Cyan)),
        ),
        Span::raw(" | "),
        Span::styled(model.progress_label(), Style::default().fg(Color::LightGreen)),
    ];

    if let Some(round) = model.round_number() {
        spans.push(Span::raw(" | Round "));
        spans.push(Span::styled(
            round.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(feedback) = model.feedback() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(feedback.message(), theme.style_feedback(feedback)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(" Geography Quiz "),
    );

    frame.render_widget(paragraph, area);
}
