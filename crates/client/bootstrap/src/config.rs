//! Client bootstrap configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to bootstrap a client runtime.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    pub channels: ChannelConfig,
    /// Directory holding `world.json` and an optional `config.toml`.
    pub data_dir: PathBuf,
    /// Explicit topology file, overriding `data_dir/world.json`.
    pub atlas_path: Option<PathBuf>,
    /// Random-mode shuffle seed. Logged at startup so a session can be replayed.
    pub seed: u64,
    pub session_id: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            channels: ChannelConfig::default(),
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            atlas_path: None,
            seed: 0,
            session_id: default_session_id(),
        }
    }
}

impl BootstrapConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GEOQUIZ_DATA_DIR` - Dataset directory (default: `./data`)
    /// - `GEOQUIZ_ATLAS` - Topology file path (default: `<data dir>/world.json`)
    /// - `GEOQUIZ_SEED` - Random-mode seed (default: random)
    /// - `GEOQUIZ_SESSION_ID` - Session identifier for log files (default: timestamp)
    /// - `GEOQUIZ_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `GEOQUIZ_EVENT_BUFFER` - Event broadcast capacity (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("GEOQUIZ_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config.atlas_path = env::var("GEOQUIZ_ATLAS").ok().map(PathBuf::from);

        config.seed = read_env::<u64>("GEOQUIZ_SEED").unwrap_or_else(rand::random);

        if let Ok(session_id) = env::var("GEOQUIZ_SESSION_ID") {
            if !session_id.trim().is_empty() {
                config.session_id = session_id;
            }
        }

        if let Some(capacity) = read_env::<usize>("GEOQUIZ_COMMAND_BUFFER") {
            config.channels.command_buffer = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("GEOQUIZ_EVENT_BUFFER") {
            config.channels.event_buffer = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub command_buffer: usize,
    pub event_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            command_buffer: 32,
            event_buffer: 100,
        }
    }
}

fn default_session_id() -> String {
    format!("session_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_data() {
        let config = BootstrapConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.atlas_path.is_none());
        assert_eq!(config.channels.command_buffer, 32);
        assert_eq!(config.channels.event_buffer, 100);
        assert!(config.session_id.starts_with("session_"));
    }
}
