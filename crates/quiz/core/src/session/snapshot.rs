//! Mode-agnostic session wrapper and its read-only snapshot.
use crate::config::QuizConfig;
use crate::geo::Atlas;

use super::{
    AnswerOutcome, ExhaustiveSession, Feedback, GuessOutcome, Phase, QuizMachine, RandomSession,
    Round, SessionError, Target,
};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum QuizMode {
    #[default]
    Exhaustive,
    Random,
}

/// A running quiz in either mode.
#[derive(Clone, Debug)]
pub enum QuizSession {
    Exhaustive(ExhaustiveSession),
    Random(RandomSession),
}

impl QuizSession {
    /// Creates an idle session. Random mode draws rounds from `seed`.
    pub fn new(mode: QuizMode, atlas: &Atlas, config: &QuizConfig, seed: u64) -> Self {
        match mode {
            QuizMode::Exhaustive => Self::Exhaustive(ExhaustiveSession::new(atlas)),
            QuizMode::Random => Self::Random(RandomSession::seeded(atlas, config, seed)),
        }
    }

    pub fn mode(&self) -> QuizMode {
        match self {
            Self::Exhaustive(_) => QuizMode::Exhaustive,
            Self::Random(_) => QuizMode::Random,
        }
    }

    pub fn machine(&self) -> &QuizMachine {
        match self {
            Self::Exhaustive(session) => session.machine(),
            Self::Random(session) => session.machine(),
        }
    }

    /// Activates the session. Random mode also deals its first round.
    pub fn start(&mut self) -> Result<(), SessionError> {
        match self {
            Self::Exhaustive(session) => {
                session.start();
                Ok(())
            }
            Self::Random(session) => session.start().map(|_| ()),
        }
    }

    pub fn target(&self) -> Option<&Target> {
        self.machine().target()
    }

    /// Exhaustive-mode guess. Random sessions treat the text as an answer.
    ///
    /// Exhaustive guesses go through the session's input buffer, which keeps
    /// the text unless the guess was correct.
    pub fn submit_guess(&mut self, text: &str) -> Result<SubmitOutcome, SessionError> {
        match self {
            Self::Exhaustive(session) => {
                session.set_input(text);
                session.submit().map(SubmitOutcome::Guess)
            }
            Self::Random(session) => session.answer(text).map(SubmitOutcome::Answer),
        }
    }

    /// Random-mode option pick. Exhaustive sessions reject it.
    pub fn choose_option(&mut self, option: &str) -> Result<AnswerOutcome, SessionError> {
        match self {
            Self::Random(session) => session.answer(option),
            Self::Exhaustive(_) => Err(SessionError::NoActiveRound),
        }
    }

    /// Random-mode skip to a fresh round. Exhaustive sessions reject it.
    pub fn next_round(&mut self) -> Result<&Round, SessionError> {
        match self {
            Self::Random(session) => session.next_round(),
            Self::Exhaustive(_) => Err(SessionError::NoActiveRound),
        }
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot::capture(self)
    }
}

/// Outcome of [`QuizSession::submit_guess`] in either mode.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Guess(GuessOutcome),
    Answer(AnswerOutcome),
}

impl SubmitOutcome {
    pub fn is_correct(&self) -> bool {
        match self {
            Self::Guess(outcome) => outcome.is_correct(),
            Self::Answer(outcome) => matches!(outcome, AnswerOutcome::Correct { .. }),
        }
    }
}

/// Immutable view of a session for rendering and subscribers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizSnapshot {
    pub mode: QuizMode,
    pub phase: Phase,
    pub score: u32,
    pub total: usize,
    pub available: usize,
    pub target: Option<Target>,
    pub feedback: Option<Feedback>,
    /// Regions already used in either mode, for "found" styling. Random mode
    /// includes the region on offer.
    pub found: Vec<Target>,
    /// Exhaustive mode: names guessed so far, oldest first.
    pub history: Vec<String>,
    /// Exhaustive mode: the pending input buffer.
    pub input: String,
    /// Random mode: the current round, if any.
    pub round: Option<Round>,
}

impl QuizSnapshot {
    pub fn capture(session: &QuizSession) -> Self {
        let machine = session.machine();
        let (history, input, round) = match session {
            QuizSession::Exhaustive(session) => (
                session.history().to_vec(),
                session.input().to_owned(),
                None,
            ),
            QuizSession::Random(session) => (Vec::new(), String::new(), session.round().cloned()),
        };

        Self {
            mode: session.mode(),
            phase: machine.phase(),
            score: machine.score(),
            total: machine.arena().len(),
            available: machine.arena().available_count(),
            target: machine.target().cloned(),
            feedback: machine.feedback(),
            found: machine.found().to_vec(),
            history,
            input,
            round,
        }
    }

    pub fn selected(&self) -> usize {
        self.total - self.available
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Name shown as the highlighted country in random mode.
    pub fn highlighted(&self) -> Option<&str> {
        self.round.as_ref().map(|round| round.correct.as_str())
    }

    pub fn feedback_message(&self) -> Option<&'static str> {
        self.feedback.map(Feedback::message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{ArcTable, CountryRegion, ShapeKind};

    fn atlas() -> Atlas {
        Atlas::new(
            vec![
                CountryRegion::new("Chile", ShapeKind::Polygon, vec![vec![0]]),
                CountryRegion::new("Japan", ShapeKind::Polygon, vec![vec![1]]),
            ],
            ArcTable::new(vec![vec![[-71.0, -35.0]], vec![[138.0, 36.0]]]),
        )
    }

    #[test]
    fn exhaustive_snapshot_tracks_history() {
        let config = QuizConfig::default();
        let mut session = QuizSession::new(QuizMode::Exhaustive, &atlas(), &config, 0);
        session.start().unwrap();
        assert!(session.submit_guess("japan").unwrap().is_correct());

        let snapshot = session.snapshot();
        assert_eq!(snapshot.mode, QuizMode::Exhaustive);
        assert_eq!(snapshot.score, 1);
        assert_eq!(snapshot.selected(), 1);
        assert_eq!(snapshot.history, vec!["Japan".to_string()]);
        assert_eq!(snapshot.feedback_message(), Some("Correct!"));
        assert!(snapshot.round.is_none());
        assert_eq!(snapshot.input, "");
    }

    #[test]
    fn exhaustive_snapshot_keeps_a_wrong_guess_for_editing() {
        let config = QuizConfig::default();
        let mut session = QuizSession::new(QuizMode::Exhaustive, &atlas(), &config, 0);
        session.start().unwrap();

        assert!(!session.submit_guess("Japna").unwrap().is_correct());
        assert_eq!(session.snapshot().input, "Japna");

        assert!(session.submit_guess("Japan").unwrap().is_correct());
        assert_eq!(session.snapshot().input, "");
    }

    #[test]
    fn random_snapshot_exposes_round() {
        let config = QuizConfig::default();
        let mut session = QuizSession::new(QuizMode::Random, &atlas(), &config, 4);
        session.start().unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.round.as_ref().map(|r| r.options.len()), Some(2));
        assert_eq!(
            snapshot.highlighted(),
            snapshot.target.as_ref().map(|t| t.name.as_str())
        );
        assert_eq!(snapshot.available, 1);
    }

    #[test]
    fn random_snapshot_lists_found_regions() {
        let config = QuizConfig::default();
        let mut session = QuizSession::new(QuizMode::Random, &atlas(), &config, 4);
        session.start().unwrap();

        let first = session.snapshot();
        let offered = first.target.clone().expect("round target");
        assert_eq!(first.found, vec![offered.clone()]);

        let correct = first.highlighted().map(str::to_owned).expect("round");
        // A correct answer deals the next round straight away.
        assert!(session.choose_option(&correct).unwrap() != AnswerOutcome::Incorrect);

        let second = session.snapshot();
        assert_eq!(second.found.len(), 2);
        assert_eq!(second.found[0], offered);
        assert_eq!(second.found.last(), second.target.as_ref());
        assert!(second.history.is_empty());
    }

    #[test]
    fn mode_specific_calls_are_rejected_across_modes() {
        let config = QuizConfig::default();
        let mut session = QuizSession::new(QuizMode::Exhaustive, &atlas(), &config, 0);
        session.start().unwrap();
        assert_eq!(
            session.choose_option("Chile").unwrap_err(),
            SessionError::NoActiveRound
        );
        assert!(session.next_round().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_survives_json_with_found_regions() {
        let config = QuizConfig::default();
        let mut session = QuizSession::new(QuizMode::Random, &atlas(), &config, 4);
        session.start().unwrap();

        let snapshot = session.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"mode\":\"random\""));
        assert!(json.contains("\"found\""));

        let decoded: QuizSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn mode_parses_from_snake_case() {
        assert_eq!("random".parse::<QuizMode>().ok(), Some(QuizMode::Random));
        assert_eq!(QuizMode::Exhaustive.to_string(), "exhaustive");
    }
}
