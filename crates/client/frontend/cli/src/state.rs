//! Local UI state that never leaves the terminal frontend.
use quiz_core::Control;

/// Mutable state the event loop keeps next to the runtime snapshot.
#[derive(Clone, Debug, Default)]
pub struct CliState {
    /// Exhaustive mode: text typed since the last submission.
    pub input: String,
    /// Random mode: index of the option under the selection marker.
    pub selected: usize,
    /// Control currently held down, when the terminal reports releases.
    pub held: Option<Control>,
}

impl CliState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Settles the buffer after a guess. A miss stays for editing.
    pub fn finish_submission(&mut self, correct: bool) {
        if correct {
            self.input.clear();
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Returns true if `control` was not already held.
    pub fn hold(&mut self, control: Control) -> bool {
        self.held.replace(control) != Some(control)
    }

    /// Returns true if `control` was the held one.
    pub fn release(&mut self, control: Control) -> bool {
        if self.held == Some(control) {
            self.held = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = CliState::new();
        state.select_prev(4);
        assert_eq!(state.selected, 3);
        state.select_next(4);
        assert_eq!(state.selected, 0);

        state.select_next(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn wrong_guess_stays_in_the_buffer() {
        let mut state = CliState::new();
        for ch in "Pexu".chars() {
            state.type_char(ch);
        }
        state.finish_submission(false);
        assert_eq!(state.input, "Pexu");

        state.backspace();
        state.backspace();
        state.type_char('r');
        state.type_char('u');
        state.finish_submission(true);
        assert!(state.input.is_empty());
    }

    #[test]
    fn only_the_held_control_releases() {
        let mut state = CliState::new();
        assert!(state.hold(Control::RotateEast));
        assert!(!state.hold(Control::RotateEast));
        assert!(!state.release(Control::TiltNorth));
        assert!(state.release(Control::RotateEast));
        assert!(state.held.is_none());
    }
}
