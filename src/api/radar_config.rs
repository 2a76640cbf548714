use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_ANIMATION_DURATION_MS;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Host-facing radar options.
///
/// Serializable so hosts can persist chart setup alongside their own state.
/// `max_value` must be positive; it is a precondition of the geometry math
/// and is not checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarChartOptions {
    #[serde(default = "default_size")]
    pub size: f64,
    #[serde(default = "default_max_value")]
    pub max_value: f64,
    #[serde(default = "default_color")]
    pub color: Color,
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: f64,
}

impl Default for RadarChartOptions {
    fn default() -> Self {
        Self {
            size: default_size(),
            max_value: default_max_value(),
            color: default_color(),
            animation_duration_ms: default_animation_duration_ms(),
        }
    }
}

impl RadarChartOptions {
    #[must_use]
    pub fn new(size: f64, max_value: f64) -> Self {
        Self {
            size,
            max_value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Sets the series fill color. The outline uses the same color at full opacity.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: f64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ChartError::InvalidData(
                "radar size must be finite and > 0".to_owned(),
            ));
        }
        if !self.animation_duration_ms.is_finite() || self.animation_duration_ms < 0.0 {
            return Err(ChartError::InvalidData(
                "animation duration must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

fn default_size() -> f64 {
    300.0
}

fn default_max_value() -> f64 {
    10.0
}

fn default_color() -> Color {
    Color::rgba8(0, 122, 255, 0.4)
}

fn default_animation_duration_ms() -> f64 {
    DEFAULT_ANIMATION_DURATION_MS
}

/// Chart size the host page derives from its window: `min(w / 2.5, h / 2.5, 400)`.
#[must_use]
pub fn responsive_chart_size(viewport_width: f64, viewport_height: f64) -> f64 {
    (viewport_width / 2.5).min(viewport_height / 2.5).min(400.0)
}
