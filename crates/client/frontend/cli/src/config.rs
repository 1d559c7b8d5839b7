//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_HISTORY_PANEL_WIDTH` - Width of the side panel listing guesses
    ///   or options, in columns (default: 28)
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 7)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<u16>("CLI_HISTORY_PANEL_WIDTH") {
            config.ui.history_panel_width = width.max(12);
        }
        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Width of the side panel in columns (including borders).
    pub history_panel_width: u16,
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            history_panel_width: 28,
            message_panel_height: 7,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
