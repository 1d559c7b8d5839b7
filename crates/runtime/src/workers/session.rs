//! Session worker that owns the authoritative [`QuizSession`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), applies
//! them to the state machine one at a time, and publishes events to the
//! EventBus. It also owns the requested view and repeats a held control on
//! a fixed period until it is released.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{Duration, Instant};
use tracing::{debug, info, trace};

use quiz_core::{
    AnswerOutcome, Control, GuessOutcome, Phase, QuizConfig, QuizSession, QuizSnapshot, RegionId,
    Round, SessionError, SubmitOutcome, ViewState,
};

use crate::api::Result;
use crate::events::{Event, EventBus, QuizEvent, RetargetCause, ViewEvent};

/// Commands that can be sent to the session worker
pub enum Command {
    /// Submit free text. Exhaustive mode treats it as a guess, random mode as
    /// an answer.
    SubmitGuess {
        text: String,
        reply: oneshot::Sender<Result<SubmitOutcome>>,
    },
    /// Pick one of the offered options (random mode).
    ChooseOption {
        option: String,
        reply: oneshot::Sender<Result<AnswerOutcome>>,
    },
    /// Deal a fresh round, leaving the current one unanswered (random mode).
    NextRound {
        reply: oneshot::Sender<Result<Round>>,
    },
    /// Apply a control once and keep repeating it until released.
    PressControl {
        control: Control,
        reply: oneshot::Sender<ViewState>,
    },
    /// Stop repeating the held control.
    ReleaseControl,
    /// Query the current quiz state (read-only).
    QuerySnapshot {
        reply: oneshot::Sender<QuizSnapshot>,
    },
}

struct HeldControl {
    control: Control,
    next: Instant,
}

/// Background task that processes quiz commands.
pub struct SessionWorker {
    session: QuizSession,
    config: QuizConfig,
    view: ViewState,
    pointed_at: Option<RegionId>,
    held: Option<HeldControl>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    view_tx: watch::Sender<ViewState>,
}

impl SessionWorker {
    /// Creates a new session worker.
    pub fn new(
        session: QuizSession,
        config: QuizConfig,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        view_tx: watch::Sender<ViewState>,
    ) -> Self {
        let view = *view_tx.borrow();
        Self {
            session,
            config,
            view,
            pointed_at: None,
            held: None,
            command_rx,
            event_bus,
            view_tx,
        }
    }

    /// Activates the session before the worker loop starts.
    ///
    /// Random mode deals its first round here, so a failure (an empty pool)
    /// surfaces to the builder instead of the first caller.
    pub fn start(&mut self) -> std::result::Result<(), SessionError> {
        self.session.start()?;

        let snapshot = self.session.snapshot();
        info!(
            mode = %snapshot.mode,
            total = snapshot.total,
            "quiz session started"
        );
        self.publish_quiz(QuizEvent::SessionStarted {
            snapshot: Box::new(snapshot.clone()),
        });
        if let Some(round) = snapshot.round.clone() {
            self.publish_quiz(QuizEvent::RoundDealt {
                round,
                snapshot: Box::new(snapshot),
            });
        }
        self.follow_target();
        Ok(())
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            let repeat_at = self.held.as_ref().map(|held| held.next);
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                _ = tokio::time::sleep_until(repeat_at.unwrap_or_else(Instant::now)), if repeat_at.is_some() => {
                    self.repeat_held();
                }
            }
        }
        debug!("session worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SubmitGuess { text, reply } => {
                let result = self.handle_submit(&text);
                if reply.send(result).is_err() {
                    debug!("SubmitGuess reply channel closed (caller dropped)");
                }
            }
            Command::ChooseOption { option, reply } => {
                let result = self.handle_choose(&option);
                if reply.send(result).is_err() {
                    debug!("ChooseOption reply channel closed (caller dropped)");
                }
            }
            Command::NextRound { reply } => {
                let result = self.handle_next_round();
                if reply.send(result).is_err() {
                    debug!("NextRound reply channel closed (caller dropped)");
                }
            }
            Command::PressControl { control, reply } => {
                self.apply_control(control);
                self.held = Some(HeldControl {
                    control,
                    next: Instant::now() + self.repeat_period(),
                });
                if reply.send(self.view).is_err() {
                    debug!("PressControl reply channel closed (caller dropped)");
                }
            }
            Command::ReleaseControl => {
                if let Some(held) = self.held.take() {
                    debug!(control = %held.control, "control released");
                }
            }
            Command::QuerySnapshot { reply } => {
                if reply.send(self.session.snapshot()).is_err() {
                    debug!("QuerySnapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_submit(&mut self, text: &str) -> Result<SubmitOutcome> {
        let outcome = self.session.submit_guess(text).inspect_err(|err| {
            debug!(error = %err, "submission rejected");
        })?;

        match &outcome {
            SubmitOutcome::Guess(guess) => self.after_guess(guess),
            SubmitOutcome::Answer(answer) => self.after_answer(answer),
        }
        Ok(outcome)
    }

    fn handle_choose(&mut self, option: &str) -> Result<AnswerOutcome> {
        let outcome = self.session.choose_option(option).inspect_err(|err| {
            debug!(error = %err, "option rejected");
        })?;
        self.after_answer(&outcome);
        Ok(outcome)
    }

    fn handle_next_round(&mut self) -> Result<Round> {
        let phase_before = self.session.machine().phase();
        match self.session.next_round() {
            Ok(round) => {
                let round = round.clone();
                debug!(round = round.number, options = round.options.len(), "round skipped");
                self.publish_round(round.clone());
                self.follow_target();
                Ok(round)
            }
            Err(err) => {
                if phase_before != self.session.machine().phase() {
                    self.publish_finished();
                }
                Err(err.into())
            }
        }
    }

    fn after_guess(&mut self, outcome: &GuessOutcome) {
        match outcome {
            GuessOutcome::Correct {
                target, complete, ..
            } => {
                debug!(name = %target.name, "guess accepted");
                self.publish_quiz(QuizEvent::GuessAccepted {
                    name: target.name.clone(),
                    snapshot: Box::new(self.session.snapshot()),
                });
                self.follow_target();
                if *complete {
                    self.publish_finished();
                }
            }
            GuessOutcome::AlreadyGuessed | GuessOutcome::Unknown => self.publish_rejected(),
        }
    }

    fn after_answer(&mut self, outcome: &AnswerOutcome) {
        match outcome {
            AnswerOutcome::Correct {
                answered,
                exhausted,
            } => {
                debug!(name = %answered, "answer accepted");
                self.publish_quiz(QuizEvent::GuessAccepted {
                    name: answered.clone(),
                    snapshot: Box::new(self.session.snapshot()),
                });
                if *exhausted {
                    self.publish_finished();
                } else if let Some(round) = self.session.snapshot().round {
                    self.publish_round(round);
                    self.follow_target();
                }
            }
            AnswerOutcome::Incorrect => self.publish_rejected(),
        }
    }

    /// Points the requested view at the session target when it changed.
    ///
    /// The coordinate was fully resolved by the state machine before it became
    /// the target, so the animator only ever sees complete values.
    fn follow_target(&mut self) {
        let Some(target) = self.session.target() else {
            return;
        };
        if self.pointed_at == Some(target.region) {
            return;
        }
        self.pointed_at = Some(target.region);

        let coordinate = target.coordinate;
        debug!(name = %target.name, %coordinate, "retargeting view");
        self.set_view(
            self.view
                .with_orientation(coordinate.latitude, coordinate.longitude),
            RetargetCause::Target,
        );
    }

    fn apply_control(&mut self, control: Control) {
        let view = control.apply(self.view, &self.config);
        self.set_view(view, RetargetCause::Control(control));
    }

    fn repeat_held(&mut self) {
        let period = self.repeat_period();
        let Some(held) = self.held.as_mut() else {
            return;
        };
        let control = held.control;
        held.next += period;
        trace!(%control, "repeating held control");
        self.apply_control(control);
    }

    fn repeat_period(&self) -> Duration {
        Duration::from_millis(self.config.hold_repeat_ms.max(1))
    }

    fn set_view(&mut self, view: ViewState, cause: RetargetCause) {
        self.view = view;
        // Stored even without a mounted view so the next mount starts from it.
        self.view_tx.send_replace(view);
        self.event_bus.publish(Event::View(ViewEvent { view, cause }));
    }

    fn publish_rejected(&self) {
        let snapshot = self.session.snapshot();
        if let Some(feedback) = snapshot.feedback {
            debug!(message = feedback.message(), "submission did not score");
            self.publish_quiz(QuizEvent::GuessRejected {
                feedback,
                snapshot: Box::new(snapshot),
            });
        }
    }

    fn publish_round(&self, round: Round) {
        self.publish_quiz(QuizEvent::RoundDealt {
            round,
            snapshot: Box::new(self.session.snapshot()),
        });
    }

    fn publish_finished(&self) {
        let snapshot = self.session.snapshot();
        info!(
            phase = %snapshot.phase,
            score = snapshot.score,
            total = snapshot.total,
            "quiz session finished"
        );
        debug_assert!(matches!(snapshot.phase, Phase::Complete | Phase::Exhausted));
        self.publish_quiz(QuizEvent::SessionFinished {
            phase: snapshot.phase,
            score: snapshot.score,
            snapshot: Box::new(snapshot),
        });
    }

    fn publish_quiz(&self, event: QuizEvent) {
        self.event_bus.publish(Event::Quiz(event));
    }
}
