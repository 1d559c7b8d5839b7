//! Colors and text styles shared by the quiz widgets.
use client_frontend_core::message::MessageLevel;
use quiz_core::Feedback;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui styling rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::LightGreen),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn style_feedback(&self, feedback: Feedback) -> Style {
        self.style_message(feedback.into())
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn coastline(&self) -> Color {
        Color::Gray
    }

    /// Marker color for the highlighted country.
    pub fn highlight(&self) -> Color {
        Color::Yellow
    }

    /// Marker color for countries already found.
    pub fn found(&self) -> Color {
        Color::LightGreen
    }

    pub fn selection_marker(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn emphasize(&self, base_style: Style) -> Style {
        base_style.add_modifier(Modifier::BOLD)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }
}
