//! Quiz configuration loader.

use std::path::Path;

use quiz_core::QuizConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for quiz tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults; out-of-range values are sanitized.
    pub fn load(path: &Path) -> LoadResult<QuizConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<QuizConfig> {
        let config: QuizConfig = toml::from_str(content)?;
        Ok(config.sanitized())
    }
}
