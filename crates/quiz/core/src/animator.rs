//! Orientation Animator: incremental stepping toward a target orientation.
//!
//! The animator is a plain state machine driven by [`OrientationAnimator::tick`].
//! Scheduling ticks on a timer is the caller's job (see the runtime's view
//! animation task); this module owns only `current` and `target`.
//!
//! Per tick, each axis advances by at most the step size toward the target.
//! Once both axes are within one step on the same tick, the orientation snaps
//! to the target and the animator settles. No wrapping or clamping happens
//! here: callers normalize targets before handing them over.
use crate::config::QuizConfig;
use crate::geo::Coordinate;

/// Outcome of a single animator tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Moved toward the target; more ticks are needed.
    Moved(Coordinate),
    /// Snapped onto the target on this tick.
    Arrived(Coordinate),
    /// Already settled; nothing to do until the next retarget.
    Idle(Coordinate),
}

impl Step {
    pub fn coordinate(&self) -> Coordinate {
        match *self {
            Self::Moved(c) | Self::Arrived(c) | Self::Idle(c) => c,
        }
    }

    /// Returns true if this tick produced a new orientation.
    pub fn is_progress(&self) -> bool {
        !matches!(self, Self::Idle(_))
    }
}

#[derive(Clone, Debug)]
pub struct OrientationAnimator {
    current: Coordinate,
    target: Coordinate,
    step_size: f64,
    settled: bool,
}

impl OrientationAnimator {
    /// Creates a settled animator resting at `start`.
    pub fn new(start: Coordinate, step_size: f64) -> Self {
        Self {
            current: start,
            target: start,
            step_size,
            settled: true,
        }
    }

    pub fn from_config(start: Coordinate, config: &QuizConfig) -> Self {
        Self::new(start, config.step_size)
    }

    pub fn current(&self) -> Coordinate {
        self.current
    }

    pub fn target(&self) -> Coordinate {
        self.target
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Replaces the target and resumes stepping from the current orientation.
    ///
    /// The previous target is discarded even if it was never reached.
    pub fn retarget(&mut self, target: Coordinate) {
        debug_assert!(target.is_finite(), "animator target must be finite");
        self.target = target;
        self.settled = false;
    }

    /// Advances one tick.
    pub fn tick(&mut self) -> Step {
        if self.settled {
            return Step::Idle(self.current);
        }

        let lat_diff = self.target.latitude - self.current.latitude;
        let lon_diff = self.target.longitude - self.current.longitude;

        if lat_diff.abs() < self.step_size && lon_diff.abs() < self.step_size {
            self.current = self.target;
            self.settled = true;
            return Step::Arrived(self.current);
        }

        self.current = Coordinate::new(
            self.current.latitude + approach(lat_diff, self.step_size),
            self.current.longitude + approach(lon_diff, self.step_size),
        );
        Step::Moved(self.current)
    }

    /// Lazily yields every orientation until the animator settles.
    ///
    /// The final item is the target itself.
    pub fn frames(&mut self) -> impl Iterator<Item = Coordinate> + '_ {
        std::iter::from_fn(move || match self.tick() {
            Step::Moved(c) | Step::Arrived(c) => Some(c),
            Step::Idle(_) => None,
        })
    }
}

fn approach(diff: f64, step: f64) -> f64 {
    if diff == 0.0 {
        0.0
    } else {
        diff.signum() * step.min(diff.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_animator_is_idle() {
        let mut animator = OrientationAnimator::new(Coordinate::ORIGIN, 4.0);
        assert!(animator.is_settled());
        assert_eq!(animator.tick(), Step::Idle(Coordinate::ORIGIN));
    }

    #[test]
    fn converges_within_bound_and_reduces_distance() {
        let target = Coordinate::new(50.0, 170.0);
        let mut animator = OrientationAnimator::new(Coordinate::ORIGIN, 4.0);
        animator.retarget(target);

        let bound = (50.0f64.max(170.0) / 4.0).ceil() as usize + 1;
        let mut previous = Coordinate::ORIGIN;
        let mut ticks = 0;

        loop {
            let step = animator.tick();
            ticks += 1;
            assert!(ticks <= bound, "did not converge within {bound} ticks");

            let now = step.coordinate();
            let prev_lat = (target.latitude - previous.latitude).abs();
            let prev_lon = (target.longitude - previous.longitude).abs();
            let lat = (target.latitude - now.latitude).abs();
            let lon = (target.longitude - now.longitude).abs();

            match step {
                Step::Moved(_) => {
                    assert!(lat <= prev_lat);
                    assert!(lon < prev_lon, "longitude is still far and must shrink");
                    if prev_lat > 0.0 {
                        assert!(lat < prev_lat);
                    }
                }
                Step::Arrived(c) => {
                    assert_eq!(c, target);
                    break;
                }
                Step::Idle(_) => panic!("settled before arriving"),
            }
            previous = now;
        }

        assert_eq!(ticks, 43);
        assert!(animator.is_settled());
        assert_eq!(animator.current(), target);
    }

    #[test]
    fn axis_finishes_independently_but_snap_needs_both() {
        let mut animator = OrientationAnimator::new(Coordinate::ORIGIN, 4.0);
        animator.retarget(Coordinate::new(2.0, 20.0));

        assert_eq!(animator.tick(), Step::Moved(Coordinate::new(2.0, 4.0)));
        assert_eq!(animator.tick(), Step::Moved(Coordinate::new(2.0, 8.0)));
    }

    #[test]
    fn retarget_mid_flight_continues_from_current() {
        let mut animator = OrientationAnimator::new(Coordinate::ORIGIN, 4.0);
        animator.retarget(Coordinate::new(40.0, 40.0));
        animator.tick();
        animator.tick();
        assert_eq!(animator.current(), Coordinate::new(8.0, 8.0));

        animator.retarget(Coordinate::new(0.0, 0.0));
        assert_eq!(animator.tick(), Step::Moved(Coordinate::new(4.0, 4.0)));
        assert_eq!(animator.tick(), Step::Moved(Coordinate::new(0.0, 0.0)));
        assert_eq!(animator.tick(), Step::Arrived(Coordinate::ORIGIN));
        assert_eq!(animator.tick(), Step::Idle(Coordinate::ORIGIN));
    }

    #[test]
    fn frames_end_on_target() {
        let target = Coordinate::new(-9.0, 3.0);
        let mut animator = OrientationAnimator::new(Coordinate::ORIGIN, 4.0);
        animator.retarget(target);

        let frames: Vec<_> = animator.frames().collect();
        assert_eq!(frames.last(), Some(&target));
        assert_eq!(frames.len(), 3);
    }
}
