//! Terminal setup/teardown helpers for the CLI UI.
use anyhow::Result;
use crossterm::{
    event::{
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches the terminal into raw alternate-screen mode until the guard drops.
///
/// Key release reporting is requested where the terminal supports it so held
/// controls can stop exactly on release.
pub fn enter() -> Result<TerminalGuard> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let release_events = matches!(supports_keyboard_enhancement(), Ok(true));
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    tracing::debug!(release_events, "terminal entered");

    Ok(TerminalGuard { release_events })
}

/// Creates a drawing surface over the already-entered terminal.
pub fn attach() -> Result<Tui> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

pub fn restore(release_events: bool) -> Result<()> {
    if release_events {
        execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
    }
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

pub struct TerminalGuard {
    release_events: bool,
}

impl TerminalGuard {
    /// Whether key release events are reported.
    pub fn release_events(&self) -> bool {
        self.release_events
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore(self.release_events);
    }
}
