//! Timer-driven globe animation bound to a view's lifetime.
//!
//! A [`ViewAnimation`] owns one background task that steps an
//! [`OrientationAnimator`] on a fixed interval. The task sleeps while the
//! animator is settled and wakes on the next requested view. Dropping the
//! animation aborts the task, so no tick outlives the view that mounted it.
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior};
use tracing::{debug, trace};

use quiz_core::{Coordinate, OrientationAnimator, QuizConfig, Step, ViewState};

/// One rendered frame of the globe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewFrame {
    pub orientation: Coordinate,
    pub zoom: f64,
    /// True once the orientation rests on the requested view.
    pub settled: bool,
}

impl ViewFrame {
    fn at(orientation: Coordinate, zoom: f64, settled: bool) -> Self {
        Self {
            orientation,
            zoom,
            settled,
        }
    }
}

/// Handle to a mounted globe animation.
pub struct ViewAnimation {
    frame_rx: watch::Receiver<ViewFrame>,
    task: JoinHandle<()>,
}

impl ViewAnimation {
    /// Starts animating from the initial orientation toward the requested view.
    pub(crate) fn mount(requests: watch::Receiver<ViewState>, config: &QuizConfig) -> Self {
        let start = ViewState::initial(config);
        let animator = OrientationAnimator::from_config(start.orientation, config);
        let period = Duration::from_millis(config.tick_interval_ms.max(1));

        let (frame_tx, frame_rx) =
            watch::channel(ViewFrame::at(start.orientation, start.zoom, true));
        let task = tokio::spawn(animate(animator, requests, frame_tx, period));
        debug!(?period, "view animation mounted");

        Self { frame_rx, task }
    }

    /// The most recent frame.
    pub fn current(&self) -> ViewFrame {
        *self.frame_rx.borrow()
    }

    /// Waits for the next frame. Returns `None` once the animation has stopped
    /// for good (the runtime shut down and the last flight finished).
    pub async fn changed(&mut self) -> Option<ViewFrame> {
        self.frame_rx.changed().await.ok()?;
        Some(*self.frame_rx.borrow_and_update())
    }

    /// Returns the latest frame if it has not been seen yet.
    pub fn poll_frame(&mut self) -> Option<ViewFrame> {
        match self.frame_rx.has_changed() {
            Ok(true) => Some(*self.frame_rx.borrow_and_update()),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for ViewAnimation {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn animate(
    mut animator: OrientationAnimator,
    mut requests: watch::Receiver<ViewState>,
    frames: watch::Sender<ViewFrame>,
    period: Duration,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let requested = *requests.borrow_and_update();
    let mut zoom = requested.zoom;
    animator.retarget(requested.orientation);

    let mut requests_open = true;
    loop {
        let settled = animator.is_settled();
        if settled && !requests_open {
            break;
        }

        tokio::select! {
            changed = requests.changed(), if requests_open => {
                if changed.is_err() {
                    requests_open = false;
                    continue;
                }
                let requested = *requests.borrow_and_update();
                zoom = requested.zoom;
                animator.retarget(requested.orientation);
                trace!(orientation = %requested.orientation, "view retargeted");
                // The next tick is one full period after the retarget.
                ticker.reset();
                if frames
                    .send(ViewFrame::at(animator.current(), zoom, false))
                    .is_err()
                {
                    break;
                }
            }
            _ = ticker.tick(), if !settled => {
                let step = animator.tick();
                trace!(?step, "view tick");
                let frame = ViewFrame::at(step.coordinate(), zoom, matches!(step, Step::Arrived(_)));
                if step.is_progress() && frames.send(frame).is_err() {
                    break;
                }
            }
        }
    }
    debug!("view animation stopped");
}
