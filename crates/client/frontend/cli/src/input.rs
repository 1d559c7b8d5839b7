//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use quiz_core::{Control, QuizMode};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Leave the quiz and return to mode selection.
    Home,
    /// Append a character to the guess buffer.
    Type(char),
    Backspace,
    /// Submit the typed guess, or the selected option in random mode.
    Submit,
    /// Answer with the option at this index.
    Choose(usize),
    SelectNext,
    SelectPrev,
    /// Skip to a fresh round.
    NextRound,
    /// A view control went down.
    Press(Control),
    /// A view control came up. Only reported by terminals with key release
    /// support.
    Release(Control),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into quiz commands for one mode.
pub struct InputHandler {
    mode: QuizMode,
}

impl InputHandler {
    pub fn new(mode: QuizMode) -> Self {
        Self { mode }
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.kind {
            KeyEventKind::Press => {}
            KeyEventKind::Release => {
                return control_for(key.code).map_or(KeyAction::None, KeyAction::Release);
            }
            // Held controls repeat inside the runtime.
            KeyEventKind::Repeat => return KeyAction::None,
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }
        if key.code == KeyCode::Esc {
            return KeyAction::Home;
        }
        if let Some(control) = control_for(key.code) {
            return KeyAction::Press(control);
        }

        match self.mode {
            QuizMode::Exhaustive => Self::handle_exhaustive(key),
            QuizMode::Random => Self::handle_random(key),
        }
    }

    fn handle_exhaustive(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(ch) => KeyAction::Type(ch),
            _ => KeyAction::None,
        }
    }

    fn handle_random(key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Char(digit @ '1'..='9') => {
                KeyAction::Choose(digit as usize - '1' as usize)
            }
            KeyCode::Tab => KeyAction::SelectNext,
            KeyCode::BackTab => KeyAction::SelectPrev,
            KeyCode::Char('n') => KeyAction::NextRound,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

fn control_for(code: KeyCode) -> Option<Control> {
    match code {
        KeyCode::Left => Some(Control::RotateWest),
        KeyCode::Right => Some(Control::RotateEast),
        KeyCode::Up => Some(Control::TiltNorth),
        KeyCode::Down => Some(Control::TiltSouth),
        KeyCode::PageUp => Some(Control::ZoomIn),
        KeyCode::PageDown => Some(Control::ZoomOut),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn exhaustive_mode_types_letters() {
        let input = InputHandler::new(QuizMode::Exhaustive);
        assert_eq!(input.handle_key(key(KeyCode::Char('q'))), KeyAction::Type('q'));
        assert_eq!(input.handle_key(key(KeyCode::Char('1'))), KeyAction::Type('1'));
        assert_eq!(input.handle_key(key(KeyCode::Backspace)), KeyAction::Backspace);
        assert_eq!(input.handle_key(key(KeyCode::Enter)), KeyAction::Submit);
    }

    #[test]
    fn random_mode_picks_options() {
        let input = InputHandler::new(QuizMode::Random);
        assert_eq!(input.handle_key(key(KeyCode::Char('1'))), KeyAction::Choose(0));
        assert_eq!(input.handle_key(key(KeyCode::Char('4'))), KeyAction::Choose(3));
        assert_eq!(input.handle_key(key(KeyCode::Tab)), KeyAction::SelectNext);
        assert_eq!(input.handle_key(key(KeyCode::BackTab)), KeyAction::SelectPrev);
        assert_eq!(input.handle_key(key(KeyCode::Char('n'))), KeyAction::NextRound);
        assert_eq!(input.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn arrows_drive_the_globe_in_both_modes() {
        for mode in [QuizMode::Exhaustive, QuizMode::Random] {
            let input = InputHandler::new(mode);
            assert_eq!(
                input.handle_key(key(KeyCode::Left)),
                KeyAction::Press(Control::RotateWest)
            );
            assert_eq!(
                input.handle_key(key(KeyCode::PageUp)),
                KeyAction::Press(Control::ZoomIn)
            );
            assert_eq!(input.handle_key(key(KeyCode::Esc)), KeyAction::Home);
        }
    }

    #[test]
    fn release_and_repeat_events() {
        let input = InputHandler::new(QuizMode::Exhaustive);
        assert_eq!(
            input.handle_key(with_kind(KeyCode::Up, KeyEventKind::Release)),
            KeyAction::Release(Control::TiltNorth)
        );
        assert_eq!(
            input.handle_key(with_kind(KeyCode::Up, KeyEventKind::Repeat)),
            KeyAction::None
        );
        assert_eq!(
            input.handle_key(with_kind(KeyCode::Char('a'), KeyEventKind::Release)),
            KeyAction::None
        );
    }

    #[test]
    fn ctrl_c_quits_while_typing() {
        let input = InputHandler::new(QuizMode::Exhaustive);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key(ctrl_c), KeyAction::Quit);
    }
}
