//! Utilities for reacting to runtime events inside UI layers.
use runtime::{Event, QuizEvent};

use quiz_core::Phase;

use crate::message::{MessageEntry, MessageLevel, MessageLog};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}

/// Turns quiz events into player-facing log lines.
pub struct QuizEventConsumer {
    log: MessageLog,
}

impl QuizEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self { log }
    }
}

impl EventConsumer for QuizEventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        let Event::Quiz(event) = event else {
            // View changes show up in the orientation panel, not the log.
            return EventImpact::none();
        };

        let round = event.snapshot().round.as_ref().map(|round| round.number);
        let entry = match event {
            QuizEvent::SessionStarted { snapshot } => MessageEntry::new(
                format!("{} countries to find", snapshot.total),
                None,
                MessageLevel::Info,
            ),
            QuizEvent::GuessAccepted { name, .. } => {
                MessageEntry::new(format!("Correct! {name}"), round, MessageLevel::Success)
            }
            QuizEvent::GuessRejected { feedback, .. } => {
                MessageEntry::new(feedback.message(), round, (*feedback).into())
            }
            QuizEvent::RoundDealt { round, .. } => MessageEntry::new(
                format!("Round {}: which country is highlighted?", round.number),
                Some(round.number),
                MessageLevel::Info,
            ),
            QuizEvent::SessionFinished { phase, score, snapshot } => {
                let text = match phase {
                    Phase::Complete => {
                        format!("All countries named! Final score {score} / {}", snapshot.total)
                    }
                    _ => format!("No countries left. Correct guesses: {score}"),
                };
                MessageEntry::new(text, None, MessageLevel::Success)
            }
        };
        self.log.push(entry);
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}
