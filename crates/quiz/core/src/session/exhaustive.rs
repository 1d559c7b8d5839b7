//! Free-text mode: name every country in any order.
use crate::geo::Atlas;

use super::{Feedback, Phase, QuizMachine, RegionId, SessionError, Target};

/// Result of a well-formed exhaustive-mode submission.
#[derive(Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    /// A new country was named. `complete` is set when it was the last one.
    Correct {
        region: RegionId,
        target: Target,
        complete: bool,
    },
    /// The name matches a country that was already named.
    AlreadyGuessed,
    /// The name matches no country in the dataset.
    Unknown,
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

#[derive(Clone, Debug)]
pub struct ExhaustiveSession {
    machine: QuizMachine,
    input: String,
    history: Vec<String>,
}

impl ExhaustiveSession {
    pub fn new(atlas: &Atlas) -> Self {
        Self {
            machine: QuizMachine::new(atlas),
            input: String::new(),
            history: Vec::new(),
        }
    }

    pub fn start(&mut self) {
        self.machine.start();
    }

    pub fn machine(&self) -> &QuizMachine {
        &self.machine
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Names guessed so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Submits the current input buffer.
    ///
    /// The buffer is cleared only on a correct guess so the player can fix
    /// a typo in place.
    pub fn submit(&mut self) -> Result<GuessOutcome, SessionError> {
        let text = std::mem::take(&mut self.input);
        let outcome = self.submit_guess(&text);
        if !matches!(outcome, Ok(GuessOutcome::Correct { .. })) {
            self.input = text;
        }
        outcome
    }

    /// Checks `text` against the unselected countries.
    ///
    /// Matching is case-insensitive on the whole name. Surrounding
    /// whitespace is ignored.
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, SessionError> {
        let guess = text.trim();
        if guess.is_empty() {
            return Err(SessionError::InvalidGuess);
        }
        self.machine.ensure_active()?;

        let arena = self.machine.arena();
        let Some(region) = arena.find_available(guess) else {
            return Ok(if arena.find(guess).is_some() {
                self.machine.reject(Feedback::AlreadyGuessed);
                GuessOutcome::AlreadyGuessed
            } else {
                self.machine.reject(Feedback::UnknownCountry);
                GuessOutcome::Unknown
            });
        };

        let target = self.machine.mark_guessed_correctly(region)?.clone();
        self.history.push(target.name.clone());
        self.input.clear();

        let complete = self.machine.arena().available_count() == 0;
        if complete {
            self.machine.finish(Phase::Complete, Feedback::AllNamed);
        }

        Ok(GuessOutcome::Correct {
            region,
            target,
            complete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{ArcTable, CountryRegion, Coordinate, ShapeKind};

    fn atlas() -> Atlas {
        Atlas::new(
            vec![
                CountryRegion::new("France", ShapeKind::Polygon, vec![vec![0]]),
                CountryRegion::new("Chad", ShapeKind::Polygon, vec![vec![1]]),
                CountryRegion::new("Peru", ShapeKind::Polygon, vec![vec![2]]),
            ],
            ArcTable::new(vec![
                vec![[2.0, 46.0]],
                vec![[18.0, 15.0]],
                vec![[-75.0, -10.0]],
            ]),
        )
    }

    fn started() -> ExhaustiveSession {
        let mut session = ExhaustiveSession::new(&atlas());
        session.start();
        session
    }

    #[test]
    fn correct_guess_scores_and_points_view() {
        let mut session = started();

        let outcome = session.submit_guess("  france ").unwrap();
        let GuessOutcome::Correct {
            target, complete, ..
        } = outcome
        else {
            panic!("expected a correct guess");
        };

        assert_eq!(target.name, "France");
        assert_eq!(target.coordinate, Coordinate::new(46.0, 2.0));
        assert!(!complete);
        assert_eq!(session.machine().score(), 1);
        assert_eq!(session.history(), ["France"]);
    }

    #[test]
    fn duplicate_guess_changes_nothing() {
        let mut session = started();
        session.submit_guess("Chad").unwrap();

        let outcome = session.submit_guess("CHAD").unwrap();
        assert_eq!(outcome, GuessOutcome::AlreadyGuessed);
        assert_eq!(session.machine().score(), 1);
        assert_eq!(session.machine().arena().selected_count(), 1);
        assert_eq!(session.machine().feedback(), Some(Feedback::AlreadyGuessed));
    }

    #[test]
    fn unknown_and_partial_names_are_rejected() {
        let mut session = started();

        assert_eq!(session.submit_guess("Atlantis").unwrap(), GuessOutcome::Unknown);
        assert_eq!(session.submit_guess("Fra").unwrap(), GuessOutcome::Unknown);
        assert_eq!(session.machine().feedback(), Some(Feedback::UnknownCountry));
        assert_eq!(session.machine().score(), 0);
    }

    #[test]
    fn blank_guess_is_invalid() {
        let mut session = started();
        assert_eq!(session.submit_guess("   ").unwrap_err(), SessionError::InvalidGuess);
        assert_eq!(session.machine().feedback(), None);
    }

    #[test]
    fn score_tracks_selection_until_complete() {
        let mut session = started();

        for (i, name) in ["peru", "France", "chad"].iter().enumerate() {
            let outcome = session.submit_guess(name).unwrap();
            let machine = session.machine();
            assert_eq!(machine.score() as usize, machine.arena().selected_count());
            assert_eq!(machine.score() as usize, i + 1);
            if let GuessOutcome::Correct { complete, .. } = outcome {
                assert_eq!(complete, i == 2);
            }
        }

        assert_eq!(session.machine().phase(), Phase::Complete);
        assert_eq!(session.machine().feedback(), Some(Feedback::AllNamed));
        assert_eq!(
            session.submit_guess("France").unwrap_err(),
            SessionError::SessionComplete
        );
    }

    #[test]
    fn submit_clears_buffer_only_when_correct() {
        let mut session = started();

        session.set_input("Frnace");
        session.submit().unwrap();
        assert_eq!(session.input(), "Frnace");

        session.set_input("France");
        session.submit().unwrap();
        assert_eq!(session.input(), "");
    }

    #[test]
    fn guesses_before_start_are_refused() {
        let mut session = ExhaustiveSession::new(&atlas());
        assert_eq!(session.submit_guess("Peru").unwrap_err(), SessionError::NotStarted);
    }
}
