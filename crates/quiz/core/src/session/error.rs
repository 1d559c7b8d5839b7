use crate::error::{ErrorSeverity, QuizError};
use crate::geo::GeometryError;

use super::RegionId;

/// Errors surfaced by the quiz state machine.
///
/// Every variant except [`SessionError::Geometry`] leaves the session state
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionError {
    /// Empty or whitespace-only submission.
    #[error("guess is empty")]
    InvalidGuess,

    /// Random mode has no unselected countries left to offer.
    #[error("no countries left to offer")]
    ExhaustedPool,

    /// Exhaustive mode already has every country named.
    #[error("every country has already been named")]
    SessionComplete,

    #[error("session has not been started")]
    NotStarted,

    #[error("no round is in progress")]
    NoActiveRound,

    #[error("region {0} does not exist")]
    UnknownRegion(RegionId),

    #[error("region '{name}' was already selected")]
    AlreadySelected { name: String },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl QuizError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidGuess
            | Self::SessionComplete
            | Self::NotStarted
            | Self::NoActiveRound => ErrorSeverity::Validation,
            Self::ExhaustedPool => ErrorSeverity::Recoverable,
            Self::UnknownRegion(_) | Self::AlreadySelected { .. } => ErrorSeverity::Internal,
            // The dataset was validated at load; hitting this mid-session is a bug.
            Self::Geometry(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidGuess => "SESSION_INVALID_GUESS",
            Self::ExhaustedPool => "SESSION_EXHAUSTED_POOL",
            Self::SessionComplete => "SESSION_COMPLETE",
            Self::NotStarted => "SESSION_NOT_STARTED",
            Self::NoActiveRound => "SESSION_NO_ACTIVE_ROUND",
            Self::UnknownRegion(_) => "SESSION_UNKNOWN_REGION",
            Self::AlreadySelected { .. } => "SESSION_ALREADY_SELECTED",
            Self::Geometry(err) => err.error_code(),
        }
    }
}
