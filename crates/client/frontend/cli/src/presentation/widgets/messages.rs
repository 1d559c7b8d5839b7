//! Messages widget displaying recent quiz events.

use client_frontend_core::message::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the message log panel.
///
/// `messages` is newest first and is drawn bottom-to-top so the newest line
/// sits at the bottom.
pub fn render(frame: &mut Frame, area: Rect, messages: &[MessageEntry], theme: &RatatuiTheme) {
    let items: Vec<ListItem> = messages
        .iter()
        .map(|entry| ListItem::new(format_message(entry)).style(theme.style_message(entry.level)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

fn format_message(entry: &MessageEntry) -> String {
    match entry.round {
        Some(round) => format!("[{round}] {}", entry.text),
        None => entry.text.clone(),
    }
}
