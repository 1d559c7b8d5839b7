//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! submitting guesses, driving the view controls, or streaming events from
//! specific topics.
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot, watch};

use quiz_core::{AnswerOutcome, Control, QuizConfig, QuizSnapshot, Round, SubmitOutcome, ViewState};

use super::errors::{Result, RuntimeError};
use super::view::ViewAnimation;
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
    view_rx: watch::Receiver<ViewState>,
    config: Arc<QuizConfig>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        event_bus: EventBus,
        view_rx: watch::Receiver<ViewState>,
        config: QuizConfig,
    ) -> Self {
        Self {
            command_tx,
            event_bus,
            view_rx,
            config: Arc::new(config),
        }
    }

    /// Submit free text. In exhaustive mode this is a country guess; in
    /// random mode it is compared against the current round's answer.
    ///
    /// Rule rejections (empty input, finished session) come back as
    /// [`RuntimeError::Session`]; a wrong or repeated guess is a normal
    /// outcome, not an error.
    pub async fn submit_guess(&self, text: impl Into<String>) -> Result<SubmitOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::SubmitGuess {
                text: text.into(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Pick one of the current round's options (random mode).
    pub async fn choose_option(&self, option: impl Into<String>) -> Result<AnswerOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::ChooseOption {
                option: option.into(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Abandon the current round and deal a new one (random mode).
    pub async fn next_round(&self) -> Result<Round> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::NextRound { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Apply `control` once and keep repeating it until
    /// [`release_control`](Self::release_control) is called.
    ///
    /// Pressing another control replaces the held one. Returns the requested
    /// view after the first application.
    pub async fn press_control(&self, control: Control) -> Result<ViewState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::PressControl {
                control,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Stop repeating the held control, if any.
    pub async fn release_control(&self) -> Result<()> {
        self.command_tx
            .send(Command::ReleaseControl)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Query the current quiz state (read-only snapshot)
    pub async fn query_snapshot(&self) -> Result<QuizSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QuerySnapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// The view most recently requested by the quiz or a control.
    ///
    /// This is where the globe is heading, not where the animation currently
    /// is; see [`mount_view`](Self::mount_view) for the animated frames.
    pub fn requested_view(&self) -> ViewState {
        *self.view_rx.borrow()
    }

    /// Start animating the globe toward every requested view.
    ///
    /// The animation lives exactly as long as the returned value; dropping it
    /// cancels its timer.
    pub fn mount_view(&self) -> ViewAnimation {
        ViewAnimation::mount(self.view_rx.clone(), &self.config)
    }

    /// Configuration the session was started with.
    pub fn quiz_config(&self) -> &QuizConfig {
        &self.config
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Quiz` - Session start, guesses, rounds, and completion
    /// - `Topic::View` - Requested view changes from retargets and controls
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut quiz_rx = handle.subscribe(Topic::Quiz);
    /// while let Ok(event) = quiz_rx.recv().await {
    ///     // Handle quiz events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }
}
