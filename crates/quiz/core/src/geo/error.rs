use crate::error::{ErrorSeverity, QuizError};

/// Failures raised while resolving a country outline to a coordinate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryError {
    /// The outline references no arc points, so its mean is undefined.
    #[error("region '{region}' has no resolvable boundary points")]
    EmptyGeometry { region: String },

    /// The outline references an arc the table does not contain.
    #[error("region '{region}' references missing arc {index}")]
    MissingArc { region: String, index: i64 },
}

impl QuizError for GeometryError {
    fn severity(&self) -> ErrorSeverity {
        // Both variants mean the external dataset is malformed.
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyGeometry { .. } => "GEOMETRY_EMPTY",
            Self::MissingArc { .. } => "GEOMETRY_MISSING_ARC",
        }
    }
}
