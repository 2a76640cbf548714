use serde::{Deserialize, Serialize};

use crate::core::AXIS_COUNT;

/// Default length of one snapshot transition.
pub const DEFAULT_ANIMATION_DURATION_MS: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationPhase {
    Running,
    Complete,
}

/// Linear transition of the six axis values towards the latest snapshot.
///
/// Invariants:
/// - `current_values` always equals `start_values` at `start_time_ms`
/// - once complete, `current_values == target_values` bit for bit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    start_values: [f64; AXIS_COUNT],
    target_values: [f64; AXIS_COUNT],
    current_values: [f64; AXIS_COUNT],
    start_time_ms: f64,
    duration_ms: f64,
    phase: AnimationPhase,
}

impl AnimationState {
    /// Completed state resting on `values`.
    #[must_use]
    pub fn settled(values: [f64; AXIS_COUNT], duration_ms: f64) -> Self {
        Self {
            start_values: values,
            target_values: values,
            current_values: values,
            start_time_ms: 0.0,
            duration_ms,
            phase: AnimationPhase::Complete,
        }
    }

    #[must_use]
    pub fn begin(
        start_values: [f64; AXIS_COUNT],
        target_values: [f64; AXIS_COUNT],
        start_time_ms: f64,
        duration_ms: f64,
    ) -> Self {
        Self {
            start_values,
            target_values,
            current_values: start_values,
            start_time_ms,
            duration_ms,
            phase: AnimationPhase::Running,
        }
    }

    #[must_use]
    pub fn start_values(&self) -> [f64; AXIS_COUNT] {
        self.start_values
    }

    #[must_use]
    pub fn target_values(&self) -> [f64; AXIS_COUNT] {
        self.target_values
    }

    #[must_use]
    pub fn current_values(&self) -> [f64; AXIS_COUNT] {
        self.current_values
    }

    #[must_use]
    pub fn start_time_ms(&self) -> f64 {
        self.start_time_ms
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == AnimationPhase::Running
    }

    /// Unclamped progress at `now_ms`. A non-positive duration finishes at once.
    ///
    /// `start_time_ms + duration_ms` itself always reports exactly `1.0`.
    #[must_use]
    pub fn progress_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || now_ms >= self.start_time_ms + self.duration_ms {
            return 1.0;
        }
        (now_ms - self.start_time_ms) / self.duration_ms
    }

    /// Values at `now_ms` without touching the state.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> [f64; AXIS_COUNT] {
        if !self.is_running() {
            return self.current_values;
        }
        let progress = self.progress_at(now_ms);
        if progress >= 1.0 {
            return self.target_values;
        }
        let progress = progress.max(0.0);
        std::array::from_fn(|axis| {
            let start = self.start_values[axis];
            start + (self.target_values[axis] - start) * progress
        })
    }

    /// Moves the state to `now_ms` and returns the resulting phase.
    ///
    /// The six values are replaced in a single assignment.
    pub fn advance(&mut self, now_ms: f64) -> AnimationPhase {
        if !self.is_running() {
            return self.phase;
        }
        self.current_values = self.sample(now_ms);
        if self.progress_at(now_ms) >= 1.0 {
            self.phase = AnimationPhase::Complete;
        }
        self.phase
    }
}
