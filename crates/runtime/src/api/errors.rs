//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and the quiz state machine so
//! clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use quiz_core::{ErrorSeverity, GeometryError, QuizError, SessionError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires an atlas to be configured before building")]
    MissingAtlas,

    #[error("atlas failed validation")]
    InvalidAtlas(#[source] GeometryError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl RuntimeError {
    /// Severity used by frontends to decide between a message and an exit.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Session(err) => err.severity(),
            Self::InvalidAtlas(_) | Self::MissingAtlas => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Internal,
        }
    }

    /// Returns the session error when this is a rule rejection.
    pub fn as_session(&self) -> Option<&SessionError> {
        match self {
            Self::Session(err) => Some(err),
            _ => None,
        }
    }
}
