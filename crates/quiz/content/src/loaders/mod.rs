//! Content loaders for reading quiz data from files.
//!
//! Loaders turn JSON/TOML files into `quiz-core` types.

pub mod config;
pub mod factory;
pub mod topology;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use topology::{TopologyLoader, WORLD_OBJECT};

use std::path::Path;

use crate::ContentError;

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, ContentError>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}
