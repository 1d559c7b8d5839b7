//! Common error infrastructure for quiz-core.
//!
//! Domain-specific errors ([`crate::GeometryError`], [`crate::SessionError`])
//! live next to the modules that raise them. This module provides the shared
//! classification used by the runtime to decide whether a failure is fatal to
//! session start or merely rejected input.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the session continues; the caller may pick another action
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency, indicates a bug
/// - **Fatal**: the external dataset is corrupt, the session cannot start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the session can keep running after this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error indicates a bug or corrupt input data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all quiz-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait QuizError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Stable across releases; used in logs and tests.
    fn error_code(&self) -> &'static str;
}
