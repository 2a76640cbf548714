//! Time-driven interpolation used by the radar engine.
//!
//! The engine never reschedules itself implicitly: every frame goes through a
//! `FrameScheduler`, and every superseded frame is cancelled through it.

pub mod scheduler;
pub mod state;

pub use scheduler::{FrameRequestId, FrameScheduler, ManualFrameScheduler};
pub use state::{AnimationPhase, AnimationState, DEFAULT_ANIMATION_DURATION_MS};
