//! CLI frontend implementation.
use anyhow::Result;
use async_trait::async_trait;
use client_frontend_core::{
    Frontend, FrontendConfig, FrontendExit, MessageLog, QuizEventConsumer, QuizViewModel,
};
use runtime::{RuntimeHandle, Topic};

use crate::{config::CliConfig, event_loop::EventLoop, presentation::terminal};

/// Terminal frontend for one quiz session.
///
/// The terminal must already be in raw alternate-screen mode; the binary
/// enters it once via [`terminal::enter`] and keeps it across sessions.
pub struct CliFrontend {
    config: FrontendConfig,
    cli_config: CliConfig,
    release_events: bool,
}

impl CliFrontend {
    pub fn new(config: FrontendConfig, cli_config: CliConfig, release_events: bool) -> Self {
        Self {
            config,
            cli_config,
            release_events,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<FrontendExit> {
        let mut terminal = terminal::attach()?;

        // Subscribe before the first snapshot so nothing falls between them.
        let events = handle.subscribe(Topic::Quiz);
        let snapshot = handle.query_snapshot().await?;
        let view = handle.mount_view();

        let mut model = QuizViewModel::new(snapshot);
        model.apply_frame(view.current());

        let mut log = MessageLog::new(self.config.messages.capacity);
        log.push_text(format!("{} countries to find", model.snapshot().total));
        if let Some(round) = model.round_number() {
            log.push_text(format!("Round {round}: which country is highlighted?"));
        }

        tracing::info!(mode = %model.mode(), "CLI frontend started");

        let event_loop = EventLoop::new(
            handle,
            events,
            view,
            QuizEventConsumer::new(log),
            model,
            self.cli_config.ui.clone(),
            self.release_events,
        );
        event_loop.run(&mut terminal).await
    }
}
