//! Frontend configuration shared by every UI implementation.

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GEOQUIZ_MESSAGE_CAPACITY` - Lines kept in the message log (default: 64)
    pub fn from_env() -> Self {
        let capacity = read_env::<usize>("GEOQUIZ_MESSAGE_CAPACITY")
            .unwrap_or(MessageConfig::DEFAULT_CAPACITY);
        Self::new(MessageConfig::with_capacity(capacity))
    }
}

/// Sizing of the player-facing message log.
#[derive(Clone, Debug)]
pub struct MessageConfig {
    /// Never zero.
    pub capacity: usize,
}

impl MessageConfig {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
        }
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
