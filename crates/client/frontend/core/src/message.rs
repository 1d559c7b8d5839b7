//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

use quiz_core::Feedback;

/// Severity level for UI messages produced from runtime events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl From<Feedback> for MessageLevel {
    fn from(feedback: Feedback) -> Self {
        if feedback.is_positive() {
            Self::Success
        } else {
            Self::Warning
        }
    }
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    /// Random-mode round the message belongs to, if any.
    pub round: Option<u32>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, round: Option<u32>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            round,
            level,
        }
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Info));
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Error));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_are_evicted() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push_error("three");

        let texts: Vec<_> = log.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, ["two", "three"]);
        assert_eq!(log.recent(1).next().map(|e| e.level), Some(MessageLevel::Error));
    }

    #[test]
    fn zero_capacity_keeps_one_entry() {
        let mut log = MessageLog::new(0);
        log.push_text("a");
        log.push_text("b");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn feedback_maps_to_level() {
        assert_eq!(MessageLevel::from(Feedback::Correct), MessageLevel::Success);
        assert_eq!(MessageLevel::from(Feedback::TryAgain), MessageLevel::Warning);
    }
}
