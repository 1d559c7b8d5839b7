/// Quiz configuration constants and tunable parameters.
///
/// Values are fixed for the lifetime of a session; the animator and controls
/// read them once at construction rather than per call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuizConfig {
    /// Size of the multiple-choice window in random mode.
    pub max_options: usize,
    /// Angular distance (degrees) the orientation moves per animation tick.
    pub step_size: f64,
    /// Wall-clock period between animation ticks, in milliseconds.
    pub tick_interval_ms: u64,
    /// Degrees applied by one rotate or tilt control step.
    pub control_step_degrees: f64,
    /// Repeat period while a directional control is held, in milliseconds.
    pub hold_repeat_ms: u64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub zoom_step: f64,
}

impl QuizConfig {
    pub const DEFAULT_MAX_OPTIONS: usize = 4;
    pub const DEFAULT_STEP_SIZE: f64 = 4.0;
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 10;
    pub const DEFAULT_CONTROL_STEP_DEGREES: f64 = 10.0;
    pub const DEFAULT_HOLD_REPEAT_MS: u64 = 100;
    pub const DEFAULT_ZOOM_MIN: f64 = 1.0;
    pub const DEFAULT_ZOOM_MAX: f64 = 8.0;
    pub const DEFAULT_ZOOM_STEP: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            max_options: Self::DEFAULT_MAX_OPTIONS,
            step_size: Self::DEFAULT_STEP_SIZE,
            tick_interval_ms: Self::DEFAULT_TICK_INTERVAL_MS,
            control_step_degrees: Self::DEFAULT_CONTROL_STEP_DEGREES,
            hold_repeat_ms: Self::DEFAULT_HOLD_REPEAT_MS,
            zoom_min: Self::DEFAULT_ZOOM_MIN,
            zoom_max: Self::DEFAULT_ZOOM_MAX,
            zoom_step: Self::DEFAULT_ZOOM_STEP,
        }
    }

    /// Returns a copy with out-of-range values pulled back to usable ones.
    ///
    /// A zero option window or non-positive step would stall the quiz or the
    /// animator forever, so those fall back to the defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if self.max_options == 0 {
            self.max_options = Self::DEFAULT_MAX_OPTIONS;
        }
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            self.step_size = Self::DEFAULT_STEP_SIZE;
        }
        self.tick_interval_ms = self.tick_interval_ms.max(1);
        self.hold_repeat_ms = self.hold_repeat_ms.max(1);
        if !(self.zoom_min.is_finite() && self.zoom_min > 0.0) {
            self.zoom_min = Self::DEFAULT_ZOOM_MIN;
        }
        if !(self.zoom_max.is_finite() && self.zoom_max >= self.zoom_min) {
            self.zoom_max = self.zoom_min.max(Self::DEFAULT_ZOOM_MAX);
        }
        self
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_restores_degenerate_values() {
        let config = QuizConfig {
            max_options: 0,
            step_size: -1.0,
            tick_interval_ms: 0,
            zoom_min: 3.0,
            zoom_max: 2.0,
            ..QuizConfig::default()
        }
        .sanitized();

        assert_eq!(config.max_options, QuizConfig::DEFAULT_MAX_OPTIONS);
        assert_eq!(config.step_size, QuizConfig::DEFAULT_STEP_SIZE);
        assert_eq!(config.tick_interval_ms, 1);
        assert!(config.zoom_max >= config.zoom_min);
    }
}
