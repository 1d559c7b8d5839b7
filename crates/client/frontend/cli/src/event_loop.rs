//! Event loop orchestrating runtime events, globe frames, user input, and
//! rendering.
use anyhow::Result;
use client_frontend_core::{EventConsumer, FrontendExit, QuizViewModel};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent};
use quiz_core::{Control, QuizError, QuizMode, SessionError};
use runtime::{Event as RuntimeEvent, RuntimeError, RuntimeHandle, ViewAnimation};
use tokio::{
    sync::broadcast::{self, error::RecvError},
    time::{self, Duration, Interval, MissedTickBehavior},
};

use crate::{
    config::UiConfig,
    input::{InputHandler, KeyAction},
    presentation::{
        terminal::Tui,
        ui::{self, RenderContext},
    },
    state::CliState,
};

const FRAME_INTERVAL_MS: u64 = 16;

/// Terminal input polling cadence. Ticks missed while a frame renders are
/// dropped rather than burst.
fn input_ticker() -> Interval {
    let mut ticker = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

pub struct EventLoop<C>
where
    C: EventConsumer,
{
    handle: RuntimeHandle,
    events: broadcast::Receiver<RuntimeEvent>,
    view: ViewAnimation,
    input: InputHandler,
    consumer: C,
    model: QuizViewModel,
    state: CliState,
    ui: UiConfig,
    /// Whether the terminal reports key releases. Without them each press is
    /// a single control step.
    release_events: bool,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        handle: RuntimeHandle,
        events: broadcast::Receiver<RuntimeEvent>,
        view: ViewAnimation,
        consumer: C,
        model: QuizViewModel,
        ui: UiConfig,
        release_events: bool,
    ) -> Self {
        Self {
            input: InputHandler::new(model.mode()),
            handle,
            events,
            view,
            consumer,
            model,
            state: CliState::new(),
            ui,
            release_events,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<FrontendExit> {
        self.render(terminal)?;
        let mut frames_open = true;
        let mut input_tick = input_ticker();

        loop {
            tokio::select! {
                result = self.events.recv() => {
                    if let Some(exit) = self.handle_runtime_event(result, terminal).await? {
                        return self.leave(exit).await;
                    }
                }
                frame = self.view.changed(), if frames_open => match frame {
                    Some(frame) => {
                        if self.model.apply_frame(frame).requires_redraw {
                            self.render(terminal)?;
                        }
                    }
                    None => frames_open = false,
                },
                _ = input_tick.tick() => {
                    if let Some(exit) = self.handle_input_tick(terminal).await? {
                        return self.leave(exit).await;
                    }
                }
            }
        }
    }

    /// Lets go of any held control so the runtime stops repeating it.
    async fn leave(&mut self, exit: FrontendExit) -> Result<FrontendExit> {
        if self.state.held.take().is_some() {
            let _ = self.handle.release_control().await;
        }
        tracing::info!(?exit, score = self.model.snapshot().score, "leaving quiz");
        Ok(exit)
    }

    async fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<Option<FrontendExit>> {
        match result {
            Ok(event) => {
                let round_before = self.model.round_number();
                let impact = self
                    .model
                    .apply_event(&event)
                    .combine(self.consumer.on_event(&event));
                if self.model.round_number() != round_before {
                    self.state.selected = 0;
                }
                if impact.requires_redraw {
                    self.render(terminal)?;
                }
                Ok(None)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(Some(FrontendExit::Home))
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
                let snapshot = self.handle.query_snapshot().await?;
                self.model.resync(snapshot);
                self.render(terminal)?;
                Ok(None)
            }
        }
    }

    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<Option<FrontendExit>> {
        while term_event::poll(Duration::ZERO)? {
            match term_event::read()? {
                TermEvent::Key(key) => {
                    if let Some(exit) = self.handle_key(key, terminal).await? {
                        return Ok(Some(exit));
                    }
                }
                TermEvent::Resize(_, _) => self.render(terminal)?,
                _ => {}
            }
        }
        Ok(None)
    }

    async fn handle_key(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<Option<FrontendExit>> {
        match self.input.handle_key(key) {
            KeyAction::Quit => return Ok(Some(FrontendExit::Quit)),
            KeyAction::Home => return Ok(Some(FrontendExit::Home)),
            KeyAction::Submit if self.model.is_finished() => {
                return Ok(Some(FrontendExit::Home));
            }
            KeyAction::Type(ch) => {
                if !self.model.is_finished() {
                    self.state.type_char(ch);
                    self.render(terminal)?;
                }
            }
            KeyAction::Backspace => {
                self.state.backspace();
                self.render(terminal)?;
            }
            KeyAction::Submit => match self.model.mode() {
                QuizMode::Exhaustive => {
                    let result = self.handle.submit_guess(self.state.input.clone()).await;
                    let correct = matches!(&result, Ok(outcome) if outcome.is_correct());
                    self.state.finish_submission(correct);
                    self.report(result.map(drop))?;
                    self.render(terminal)?;
                }
                QuizMode::Random => self.choose(self.state.selected).await?,
            },
            KeyAction::Choose(index) => {
                if index < self.model.options().len() {
                    self.state.selected = index;
                    self.choose(index).await?;
                }
            }
            KeyAction::SelectNext => {
                self.state.select_next(self.model.options().len());
                self.render(terminal)?;
            }
            KeyAction::SelectPrev => {
                self.state.select_prev(self.model.options().len());
                self.render(terminal)?;
            }
            KeyAction::NextRound => {
                let result = self.handle.next_round().await.map(drop);
                self.report(result)?;
                self.render(terminal)?;
            }
            KeyAction::Press(control) => self.press(control).await?,
            KeyAction::Release(control) => {
                if self.state.release(control) {
                    self.handle.release_control().await?;
                }
            }
            KeyAction::None => {}
        }
        Ok(None)
    }

    async fn choose(&mut self, index: usize) -> Result<()> {
        let Some(option) = self.model.options().get(index).cloned() else {
            return Ok(());
        };
        let result = self.handle.choose_option(option).await.map(drop);
        self.report(result)
    }

    async fn press(&mut self, control: Control) -> Result<()> {
        if !self.release_events {
            self.handle.press_control(control).await?;
            self.handle.release_control().await?;
            return Ok(());
        }
        if self.state.hold(control) {
            self.handle.press_control(control).await?;
        }
        Ok(())
    }

    /// Surfaces rejected commands in the message log. Only a dead runtime is
    /// fatal to the loop.
    fn report(&mut self, result: runtime::Result<()>) -> Result<()> {
        let Err(err) = result else {
            return Ok(());
        };
        if matches!(
            err,
            RuntimeError::CommandChannelClosed | RuntimeError::ReplyChannelClosed(_)
        ) {
            return Err(err.into());
        }

        match err.as_session() {
            Some(SessionError::InvalidGuess) => {}
            Some(session_err) => {
                tracing::debug!(
                    severity = session_err.severity().as_str(),
                    error = %session_err,
                    "command rejected"
                );
                self.consumer
                    .message_log_mut()
                    .push_error(session_err.to_string());
            }
            None => {
                tracing::error!(error = %err, "command failed");
                self.consumer.message_log_mut().push_error(err.to_string());
            }
        }
        Ok(())
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            model: &self.model,
            messages: self.consumer.message_log(),
            state: &self.state,
            ui: &self.ui,
        };
        ui::render(terminal, &ctx)
    }
}
