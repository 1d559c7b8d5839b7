//! View model assembled from runtime snapshots and animation frames.
//!
//! The runtime publishes a full [`QuizSnapshot`] with every quiz event, so the
//! view model simply keeps the latest one. Orientation comes separately from
//! the mounted [`ViewFrame`] stream.
use quiz_core::{Coordinate, Feedback, Phase, QuizMode, QuizSnapshot, Target};
use runtime::{Event, ViewFrame};

use crate::event::EventImpact;

#[derive(Clone, Debug)]
pub struct QuizViewModel {
    snapshot: QuizSnapshot,
    orientation: Coordinate,
    zoom: f64,
    settled: bool,
}

impl QuizViewModel {
    pub fn new(snapshot: QuizSnapshot) -> Self {
        Self {
            snapshot,
            orientation: Coordinate::ORIGIN,
            zoom: 1.0,
            settled: true,
        }
    }

    pub fn apply_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::Quiz(event) => {
                self.snapshot = event.snapshot().clone();
                EventImpact::redraw()
            }
            Event::View(_) => EventImpact::none(),
        }
    }

    pub fn apply_frame(&mut self, frame: ViewFrame) -> EventImpact {
        let changed = frame.orientation != self.orientation
            || frame.zoom != self.zoom
            || frame.settled != self.settled;
        self.orientation = frame.orientation;
        self.zoom = frame.zoom;
        self.settled = frame.settled;
        if changed {
            EventImpact::redraw()
        } else {
            EventImpact::none()
        }
    }

    /// Replaces the snapshot wholesale, e.g. after a lagged event stream.
    pub fn resync(&mut self, snapshot: QuizSnapshot) {
        self.snapshot = snapshot;
    }

    pub fn snapshot(&self) -> &QuizSnapshot {
        &self.snapshot
    }

    pub fn mode(&self) -> QuizMode {
        self.snapshot.mode
    }

    pub fn orientation(&self) -> Coordinate {
        self.orientation
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn is_finished(&self) -> bool {
        self.snapshot.is_finished()
    }

    /// `score / total` in exhaustive mode, the guess count in random mode.
    pub fn progress_label(&self) -> String {
        match self.snapshot.mode {
            QuizMode::Exhaustive => format!("{} / {}", self.snapshot.score, self.snapshot.total),
            QuizMode::Random => format!("Correct guesses: {}", self.snapshot.score),
        }
    }

    /// Country the globe should highlight. Exhaustive mode highlights nothing.
    pub fn highlighted(&self) -> Option<&str> {
        self.snapshot.highlighted()
    }

    /// Name the globe is pointed at, if any.
    pub fn target_name(&self) -> Option<&str> {
        self.snapshot.target.as_ref().map(|target| target.name.as_str())
    }

    pub fn history(&self) -> &[String] {
        &self.snapshot.history
    }

    /// Countries already used. In random mode the one on offer is excluded so
    /// it can be drawn as the highlight instead.
    pub fn found(&self) -> impl Iterator<Item = &Target> {
        let offered = match self.snapshot.mode {
            QuizMode::Random => self.snapshot.target.as_ref().map(|target| target.region),
            QuizMode::Exhaustive => None,
        };
        self.snapshot
            .found
            .iter()
            .filter(move |target| Some(target.region) != offered)
    }

    pub fn options(&self) -> &[String] {
        self.snapshot
            .round
            .as_ref()
            .map(|round| round.options.as_slice())
            .unwrap_or_default()
    }

    pub fn round_number(&self) -> Option<u32> {
        self.snapshot.round.as_ref().map(|round| round.number)
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.snapshot.feedback
    }

    /// Closing line shown once the session reaches a terminal phase.
    pub fn summary(&self) -> Option<String> {
        match self.snapshot.phase {
            Phase::Complete => Some(format!(
                "All countries named! Final score {}",
                self.progress_label()
            )),
            Phase::Exhausted => Some(format!(
                "No countries left. {}",
                self.progress_label()
            )),
            Phase::Idle | Phase::Active => None,
        }
    }
}
