//! Home screen for choosing a quiz mode.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use quiz_core::QuizMode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::presentation::terminal::Tui;

const MENU: [(QuizMode, &str, &str); 2] = [
    (
        QuizMode::Exhaustive,
        "Name all the countries",
        "type every country you can think of",
    ),
    (
        QuizMode::Random,
        "Random guess",
        "pick the highlighted country from a list",
    ),
];

/// Shows the mode menu until the player picks one.
///
/// Returns `None` when the player quits from the menu.
pub fn choose_mode(terminal: &mut Tui) -> Result<Option<QuizMode>> {
    let mut selected = 0;

    loop {
        terminal.draw(|f| render_home(f, selected))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                selected = selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if selected + 1 < MENU.len() {
                    selected += 1;
                }
            }
            KeyCode::Char('1') => return Ok(Some(MENU[0].0)),
            KeyCode::Char('2') => return Ok(Some(MENU[1].0)),
            KeyCode::Enter => return Ok(Some(MENU[selected].0)),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(None);
            }
            KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
            _ => {}
        }
    }
}

fn render_home(frame: &mut Frame, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title banner
            Constraint::Min(0),    // Modes
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_menu(frame, chunks[1], selected);
    render_footer(frame, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "GEOGRAPHY QUIZ",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "How well do you know the world?",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(title, area);
}

fn render_menu(frame: &mut Frame, area: Rect, selected: usize) {
    let items: Vec<ListItem> = MENU
        .iter()
        .enumerate()
        .map(|(idx, (_, label, hint))| {
            let is_selected = idx == selected;
            ListItem::new(Line::from(vec![
                Span::styled(
                    if is_selected { "► " } else { "  " },
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    *label,
                    if is_selected {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Cyan)
                    },
                ),
                Span::styled(
                    format!("  {hint}"),
                    if is_selected {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    },
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Choose Mode ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = [
        ("↑/↓", " Navigate  "),
        ("1/2", " Pick  "),
        ("Enter", " Start  "),
        ("q/Esc", " Quit"),
    ];
    let spans: Vec<Span> = hints
        .into_iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(key, Style::default().fg(Color::Yellow)),
                Span::styled(label, Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    let footer = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
