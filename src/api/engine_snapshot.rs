use serde::{Deserialize, Serialize};

use crate::animation::{AnimationState, FrameRequestId};

use super::RadarChartOptions;

/// Serializable engine state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarEngineSnapshot {
    pub options: RadarChartOptions,
    /// Empty until a valid configuration was applied.
    pub labels: Vec<String>,
    pub animation: AnimationState,
    pub pending_frame: Option<FrameRequestId>,
    pub configuration_error: Option<String>,
}
