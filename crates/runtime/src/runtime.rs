//! High-level runtime orchestrator.
//!
//! The runtime owns the session worker, wires up command/event channels, and
//! exposes a builder-based API for clients to drive a quiz.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::info;

use quiz_core::{Atlas, QuizConfig, QuizMode, QuizSession, ViewState};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::workers::{Command, SessionWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub quiz: QuizConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Seed for random-mode shuffles. Equal seeds replay equal rounds.
    pub seed: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            quiz: QuizConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
            seed: 0,
        }
    }
}

/// Main runtime that orchestrates one quiz session
///
/// Design: Runtime owns the worker and coordinates shutdown.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    mode: QuizMode,
    session_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every clone of the handle is dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.session_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    atlas: Option<Atlas>,
    mode: QuizMode,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            atlas: None,
            mode: QuizMode::default(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the required country atlas
    pub fn atlas(mut self, atlas: Atlas) -> Self {
        self.atlas = Some(atlas);
        self
    }

    pub fn mode(mut self, mode: QuizMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Build the runtime and start the session
    ///
    /// Every region is resolved before the worker is spawned, so a corrupt
    /// atlas fails here rather than mid-session. Events published while
    /// starting have no subscribers yet; query a snapshot for the initial
    /// state.
    pub async fn build(self) -> Result<Runtime> {
        let atlas = self.atlas.ok_or(RuntimeError::MissingAtlas)?;
        atlas.validate().map_err(RuntimeError::InvalidAtlas)?;

        let quiz = self.config.quiz.sanitized();
        let session = QuizSession::new(self.mode, &atlas, &quiz, self.config.seed);

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let (view_tx, view_rx) = watch::channel(ViewState::initial(&quiz));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let mut worker = SessionWorker::new(
            session,
            quiz.clone(),
            command_rx,
            event_bus.clone(),
            view_tx,
        );
        worker.start()?;

        let handle = RuntimeHandle::new(command_tx, event_bus, view_rx, quiz);

        let session_worker_handle = tokio::spawn(async move {
            worker.run().await;
        });
        info!(mode = %self.mode, seed = self.config.seed, "runtime started");

        Ok(Runtime {
            handle,
            mode: self.mode,
            session_worker_handle,
        })
    }
}
