use std::path::PathBuf;

use quiz_core::{ErrorSeverity, GeometryError, QuizError};

/// Errors raised while reading quiz content from disk.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse topology JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("arc {0} has a position with fewer than two coordinates")]
    MalformedArc(usize),

    #[error("topology has no object named '{0}'")]
    MissingObject(String),

    #[error("topology contains no usable country geometries")]
    NoRegions,

    /// A region failed to resolve during load-time validation.
    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeometryError),
}

impl ContentError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Geometry(err) => err.severity(),
            _ => ErrorSeverity::Fatal,
        }
    }
}
