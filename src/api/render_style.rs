use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

/// Visual constants of the radar chart surface.
///
/// Series fill and outline colors come from `RadarChartOptions::color`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarStyle {
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    /// Stroke of the nine inner rings; the outer ring is always solid.
    pub grid_inner_stroke_style: LineStrokeStyle,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub series_line_width: f64,
    pub axis_label_font_size_px: f64,
    pub axis_label_color: Color,
    pub value_label_font_size_px: f64,
    pub value_label_color: Color,
    pub vertex_marker_radius: f64,
    pub vertex_marker_outline_color: Color,
    pub vertex_marker_outline_width: f64,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            grid_line_color: Color::rgba8(200, 200, 200, 0.5),
            grid_line_width: 1.0,
            grid_inner_stroke_style: LineStrokeStyle::Dashed {
                dash: 2.0,
                gap: 4.0,
            },
            axis_line_color: Color::rgba8(150, 150, 150, 0.7),
            axis_line_width: 1.0,
            series_line_width: 2.0,
            axis_label_font_size_px: 12.0,
            axis_label_color: Color::rgba8(50, 50, 50, 1.0),
            value_label_font_size_px: 10.0,
            value_label_color: Color::rgba(0.0, 0.0, 0.0, 0.85),
            vertex_marker_radius: 4.0,
            vertex_marker_outline_color: Color::rgb(1.0, 1.0, 1.0),
            vertex_marker_outline_width: 1.0,
        }
    }
}

impl RadarStyle {
    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("grid_line_width", self.grid_line_width),
            ("axis_line_width", self.axis_line_width),
            ("series_line_width", self.series_line_width),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("value_label_font_size_px", self.value_label_font_size_px),
            ("vertex_marker_radius", self.vertex_marker_radius),
        ] {
            ensure_positive_finite(name, value)?;
        }
        if !self.vertex_marker_outline_width.is_finite() || self.vertex_marker_outline_width < 0.0
        {
            return Err(ChartError::InvalidData(
                "vertex_marker_outline_width must be finite and >= 0".to_owned(),
            ));
        }
        self.grid_inner_stroke_style.validate()?;
        for color in [
            self.grid_line_color,
            self.axis_line_color,
            self.axis_label_color,
            self.value_label_color,
            self.vertex_marker_outline_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

/// Stroke of the node connector overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorStyle {
    pub line_color: Color,
    pub line_width: f64,
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgba8(156, 163, 175, 0.5),
            line_width: 2.0,
        }
    }
}

impl ConnectorStyle {
    pub fn validate(self) -> ChartResult<()> {
        ensure_positive_finite("line_width", self.line_width)?;
        self.line_color.validate()
    }
}

fn ensure_positive_finite(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ConnectorStyle, RadarStyle};

    #[test]
    fn default_styles_are_valid() {
        RadarStyle::default().validate().expect("radar style");
        ConnectorStyle::default().validate().expect("connector style");
    }

    #[test]
    fn negative_font_size_is_rejected() {
        let style = RadarStyle {
            axis_label_font_size_px: -1.0,
            ..RadarStyle::default()
        };
        assert!(style.validate().is_err());
    }
}
