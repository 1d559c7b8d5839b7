//! Main render entry point composing the quiz widgets.
use anyhow::Result;
use client_frontend_core::{QuizViewModel, message::MessageLog};
use quiz_core::QuizMode;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::{
    config::UiConfig,
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::CliState,
};

/// Everything a frame needs, borrowed from the event loop.
pub struct RenderContext<'a> {
    pub model: &'a QuizViewModel,
    pub messages: &'a MessageLog,
    pub state: &'a CliState,
    pub ui: &'a UiConfig,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                           // Header
                Constraint::Min(0),                              // Globe + side panel
                Constraint::Length(ctx.ui.message_panel_height), // Messages
                Constraint::Length(2),                           // Footer
            ])
            .split(frame.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(ctx.ui.history_panel_width),
            ])
            .split(rows[1]);

        widgets::header::render(frame, rows[0], ctx.model, &theme);
        widgets::globe::render(frame, body[0], ctx.model, &theme);
        match ctx.model.mode() {
            QuizMode::Exhaustive => {
                widgets::exhaustive::render(frame, body[1], ctx.model, ctx.state, &theme)
            }
            QuizMode::Random => {
                widgets::random::render(frame, body[1], ctx.model, ctx.state, &theme)
            }
        }

        let visible = ctx.ui.message_panel_height.saturating_sub(2) as usize;
        let recent: Vec<_> = ctx.messages.recent(visible).cloned().collect();
        widgets::messages::render(frame, rows[2], &recent, &theme);

        widgets::footer::render(frame, rows[3], ctx.model, &theme);
    })?;

    Ok(())
}
