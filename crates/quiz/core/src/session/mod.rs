//! Quiz session state machine.
//!
//! Both modes share one [`QuizMachine`] that owns the region arena, the
//! score, and the current target. [`ExhaustiveSession`] and
//! [`RandomSession`] drive it with mode-specific input handling, and
//! [`QuizSession`] wraps either for callers that only know the mode at
//! runtime.
mod arena;
mod error;
mod exhaustive;
mod machine;
mod random;
mod snapshot;

pub use arena::{RegionArena, RegionId, names_match};
pub use error::SessionError;
pub use exhaustive::{ExhaustiveSession, GuessOutcome};
pub use machine::{Feedback, Phase, QuizMachine, Target};
pub use random::{AnswerOutcome, RandomSession, Round};
pub use snapshot::{QuizMode, QuizSession, QuizSnapshot, SubmitOutcome};
