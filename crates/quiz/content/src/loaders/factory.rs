//! Content factory for building quiz inputs from a data directory.

use std::path::{Path, PathBuf};

use quiz_core::{Atlas, QuizConfig};

use crate::loaders::{ConfigLoader, LoadResult, TopologyLoader};

/// Content factory that loads all quiz content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── world.json    (required)
/// └── config.toml   (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
    atlas_path: Option<PathBuf>,
}

impl ContentFactory {
    pub const ATLAS_FILE: &'static str = "world.json";
    pub const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            atlas_path: None,
        }
    }

    /// Reads the topology from `path` instead of `data_dir/world.json`.
    pub fn with_atlas_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.atlas_path = Some(path.into());
        self
    }

    pub fn atlas_path(&self) -> PathBuf {
        self.atlas_path
            .clone()
            .unwrap_or_else(|| self.data_dir.join(Self::ATLAS_FILE))
    }

    /// Load and validate the world topology.
    pub fn load_atlas(&self) -> LoadResult<Atlas> {
        TopologyLoader::load(&self.atlas_path())
    }

    /// Load quiz tuning from `config.toml`, falling back to defaults when the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<QuizConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(QuizConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentError;
    use tempfile::TempDir;

    const WORLD: &str = r#"{
        "type": "Topology",
        "objects": { "world": { "type": "GeometryCollection", "geometries": [
            { "type": "Polygon", "arcs": [[0]], "properties": { "name": "Wakanda" } }
        ] } },
        "arcs": [[[10, 20], [14, 24]]]
    }"#;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.atlas_path(), Path::new("/tmp/data/world.json"));

        let factory = factory.with_atlas_path("/srv/maps/custom.json");
        assert_eq!(factory.atlas_path(), Path::new("/srv/maps/custom.json"));
    }

    #[test]
    fn loads_atlas_and_config_from_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("world.json"), WORLD).unwrap();
        std::fs::write(dir.path().join("config.toml"), "max_options = 3\n").unwrap();

        let factory = ContentFactory::new(dir.path());
        let atlas = factory.load_atlas().unwrap();
        assert_eq!(atlas.len(), 1);
        assert_eq!(factory.load_config().unwrap().max_options, 3);
    }

    #[test]
    fn missing_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), QuizConfig::default());
    }

    #[test]
    fn missing_atlas_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = ContentFactory::new(dir.path()).load_atlas().unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
