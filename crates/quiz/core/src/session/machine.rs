//! Shared state machine core used by both quiz modes.
//!
//! Selection and scoring are separate, named transitions:
//!
//! - [`QuizMachine::offer_as_target`] marks a region used and points the view
//!   at it without scoring (random mode, at round generation)
//! - [`QuizMachine::mark_guessed_correctly`] marks a region used, points the
//!   view at it, and scores (exhaustive mode)
//! - [`QuizMachine::confirm_answer`] scores without touching any region
//!   (random mode, at answer time)
//!
//! The centroid is always resolved before any mutation, so a geometry failure
//! leaves the session exactly as it was.
use std::sync::Arc;

use crate::geo::{ArcTable, Atlas, Coordinate, resolve_centroid};

use super::{RegionArena, RegionId, SessionError};

/// Lifecycle of a quiz session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Idle,
    Active,
    /// Exhaustive mode: every region has been named.
    Complete,
    /// Random mode: no region is left to offer.
    Exhausted,
}

impl Phase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Exhausted)
    }
}

/// Transient user-facing result of the last transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feedback {
    Correct,
    TryAgain,
    AlreadyGuessed,
    UnknownCountry,
    AllNamed,
    PoolExhausted,
}

impl Feedback {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Correct => "Correct!",
            Self::TryAgain => "Try Again!",
            Self::AlreadyGuessed => "Already guessed",
            Self::UnknownCountry => "Not a country",
            Self::AllNamed => "All countries named!",
            Self::PoolExhausted => "No countries left",
        }
    }

    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Correct | Self::AllNamed)
    }
}

/// The region the view should currently point at.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub region: RegionId,
    pub name: String,
    pub coordinate: Coordinate,
}

#[derive(Clone, Debug)]
pub struct QuizMachine {
    arena: RegionArena,
    arcs: Arc<ArcTable>,
    phase: Phase,
    score: u32,
    target: Option<Target>,
    /// Every region selected so far, in selection order.
    found: Vec<Target>,
    feedback: Option<Feedback>,
}

impl QuizMachine {
    pub fn new(atlas: &Atlas) -> Self {
        Self {
            arena: RegionArena::from_atlas(atlas),
            arcs: Arc::clone(atlas.arcs()),
            phase: Phase::Idle,
            score: 0,
            target: None,
            found: Vec::new(),
            feedback: None,
        }
    }

    pub fn arena(&self) -> &RegionArena {
        &self.arena
    }

    pub fn arcs(&self) -> &Arc<ArcTable> {
        &self.arcs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    /// Regions already used, oldest first. Random mode includes the region
    /// currently on offer.
    pub fn found(&self) -> &[Target] {
        &self.found
    }

    /// `Idle -> Active`. Starting an already started session is a no-op.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Active;
        }
    }

    /// Fails unless the session is `Active`.
    pub fn ensure_active(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Active => Ok(()),
            Phase::Idle => Err(SessionError::NotStarted),
            Phase::Complete => Err(SessionError::SessionComplete),
            Phase::Exhausted => Err(SessionError::ExhaustedPool),
        }
    }

    /// Resolves the target coordinate of `id` without mutating anything.
    pub fn resolve(&self, id: RegionId) -> Result<Coordinate, SessionError> {
        let region = self
            .arena
            .get(id)
            .ok_or(SessionError::UnknownRegion(id))?;
        Ok(resolve_centroid(region, &self.arcs)?)
    }

    /// Marks `id` used and points the view at it. Does not score.
    pub fn offer_as_target(&mut self, id: RegionId) -> Result<&Target, SessionError> {
        self.ensure_active()?;
        self.select_and_target(id)
    }

    /// Marks `id` used, points the view at it, and scores one point.
    pub fn mark_guessed_correctly(&mut self, id: RegionId) -> Result<&Target, SessionError> {
        self.ensure_active()?;
        self.select_and_target(id)?;
        self.score += 1;
        self.feedback = Some(Feedback::Correct);
        self.target.as_ref().ok_or(SessionError::UnknownRegion(id))
    }

    /// Scores one point for an answer to an already offered target.
    pub fn confirm_answer(&mut self) -> Result<u32, SessionError> {
        self.ensure_active()?;
        self.score += 1;
        self.feedback = Some(Feedback::Correct);
        Ok(self.score)
    }

    /// Records an incorrect submission. No region or score changes.
    pub fn reject(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
    }

    /// Moves into a terminal phase with a closing message.
    pub(crate) fn finish(&mut self, phase: Phase, feedback: Feedback) {
        debug_assert!(phase.is_terminal());
        self.phase = phase;
        self.feedback = Some(feedback);
    }

    fn select_and_target(&mut self, id: RegionId) -> Result<&Target, SessionError> {
        let coordinate = self.resolve(id)?;
        let region = self.arena.select(id)?;
        let target = Target {
            region: id,
            name: region.name.clone(),
            coordinate,
        };
        self.found.push(target.clone());

        Ok(self.target.insert(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{CountryRegion, ShapeKind};

    fn atlas() -> Atlas {
        Atlas::new(
            vec![
                CountryRegion::new("Alpha", ShapeKind::Polygon, vec![vec![0]]),
                CountryRegion::new("Broken", ShapeKind::Polygon, vec![vec![5]]),
            ],
            ArcTable::new(vec![vec![[10.0, 20.0]]]),
        )
    }

    #[test]
    fn transitions_require_active_phase() {
        let mut machine = QuizMachine::new(&atlas());
        assert_eq!(
            machine.offer_as_target(RegionId(0)).unwrap_err(),
            SessionError::NotStarted
        );
        machine.start();
        assert_eq!(machine.phase(), Phase::Active);
        assert!(machine.offer_as_target(RegionId(0)).is_ok());
    }

    #[test]
    fn offer_selects_without_scoring() {
        let mut machine = QuizMachine::new(&atlas());
        machine.start();

        let target = machine.offer_as_target(RegionId(0)).unwrap().clone();
        assert_eq!(target.coordinate, Coordinate::new(20.0, 10.0));
        assert_eq!(machine.score(), 0);
        assert_eq!(machine.arena().selected_count(), 1);
        assert_eq!(machine.found(), &[target]);
    }

    #[test]
    fn mark_guessed_scores_and_targets() {
        let mut machine = QuizMachine::new(&atlas());
        machine.start();

        machine.mark_guessed_correctly(RegionId(0)).unwrap();
        assert_eq!(machine.score(), 1);
        assert_eq!(machine.feedback(), Some(Feedback::Correct));
        assert_eq!(machine.target().map(|t| t.name.as_str()), Some("Alpha"));
    }

    #[test]
    fn geometry_failure_leaves_state_untouched() {
        let mut machine = QuizMachine::new(&atlas());
        machine.start();

        let err = machine.mark_guessed_correctly(RegionId(1)).unwrap_err();
        assert!(matches!(err, SessionError::Geometry(_)));
        assert_eq!(machine.score(), 0);
        assert_eq!(machine.arena().selected_count(), 0);
        assert!(machine.target().is_none());
        assert!(machine.found().is_empty());
    }
}
