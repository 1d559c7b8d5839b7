//! Event types for different topics.

use quiz_core::{Control, Feedback, Phase, QuizSnapshot, Round, ViewState};
use serde::{Deserialize, Serialize};

/// Events related to quiz progress. Every variant carries the snapshot taken
/// right after the transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum QuizEvent {
    /// The session moved from idle to active.
    SessionStarted { snapshot: Box<QuizSnapshot> },

    /// A submission matched and scored.
    GuessAccepted {
        name: String,
        snapshot: Box<QuizSnapshot>,
    },

    /// A submission was well-formed but did not score.
    GuessRejected {
        feedback: Feedback,
        snapshot: Box<QuizSnapshot>,
    },

    /// Random mode dealt a new multiple-choice round.
    RoundDealt {
        round: Round,
        snapshot: Box<QuizSnapshot>,
    },

    /// The session reached a terminal phase.
    SessionFinished {
        phase: Phase,
        score: u32,
        snapshot: Box<QuizSnapshot>,
    },
}

impl QuizEvent {
    pub fn snapshot(&self) -> &QuizSnapshot {
        match self {
            Self::SessionStarted { snapshot }
            | Self::GuessAccepted { snapshot, .. }
            | Self::GuessRejected { snapshot, .. }
            | Self::RoundDealt { snapshot, .. }
            | Self::SessionFinished { snapshot, .. } => snapshot,
        }
    }
}

/// Why the requested view changed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RetargetCause {
    /// The quiz pointed the view at a new country.
    Target,
    /// A directional or zoom control was applied.
    Control(Control),
}

/// Events related to the requested globe view (lightweight).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewEvent {
    pub view: ViewState,
    pub cause: RetargetCause,
}
