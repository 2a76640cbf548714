use serde::{Deserialize, Serialize};

use crate::core::{AXIS_COUNT, GRID_RING_COUNT, Point, RadialLayout};
use crate::render::TextHAlign;

/// Anchors closer than this to the vertical center line are centered.
pub const ALIGN_CENTER_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAnchor {
    pub point: Point,
    pub text: String,
    pub h_align: TextHAlign,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAnchor {
    pub point: Point,
    /// Current value rounded half-up.
    pub value: i64,
    pub h_align: TextHAlign,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRing {
    /// `1..=GRID_RING_COUNT`, innermost first.
    pub step: usize,
    pub radius: f64,
    pub vertices: [Point; AXIS_COUNT],
    pub dashed: bool,
}

/// Everything a renderer needs to draw one radar frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometry {
    pub size: f64,
    pub center: Point,
    pub radius: f64,
    pub label_radius: f64,
    pub max_value: f64,
    /// Values the polygon was built from.
    pub values: [f64; AXIS_COUNT],
    pub polygon: [Point; AXIS_COUNT],
    pub axes: [AxisLine; AXIS_COUNT],
    pub labels: [LabelAnchor; AXIS_COUNT],
    pub value_labels: [ValueAnchor; AXIS_COUNT],
    pub rings: Vec<GridRing>,
}

impl RadarGeometry {
    /// Builds the geometry of a `size` x `size` chart. `max_value` must be positive.
    #[must_use]
    pub fn build(
        values: &[f64; AXIS_COUNT],
        labels: &[String; AXIS_COUNT],
        size: f64,
        max_value: f64,
    ) -> Self {
        let layout = RadialLayout::for_size(size);
        let center = layout.center();
        let label_radius = layout.label_radius();

        let polygon = std::array::from_fn(|axis| {
            layout.point_at(axis, layout.vertex_distance(values[axis], max_value))
        });
        let axes = std::array::from_fn(|axis| AxisLine {
            from: center,
            to: layout.point_at(axis, layout.radius()),
        });
        let label_anchors = std::array::from_fn(|axis| {
            let point = layout.point_at(axis, label_radius);
            LabelAnchor {
                point,
                text: labels[axis].clone(),
                h_align: horizontal_alignment(point.x, center.x),
            }
        });
        let value_labels = std::array::from_fn(|axis| {
            let distance = layout.value_label_distance(values[axis], max_value);
            let point = layout.point_at(axis, distance);
            ValueAnchor {
                point,
                value: round_half_up(values[axis]),
                h_align: horizontal_alignment(point.x, center.x),
            }
        });
        let rings = (1..=GRID_RING_COUNT)
            .map(|step| {
                let radius = layout.ring_radius(step);
                GridRing {
                    step,
                    radius,
                    vertices: layout.hexagon(radius),
                    dashed: step != GRID_RING_COUNT,
                }
            })
            .collect();

        Self {
            size,
            center,
            radius: layout.radius(),
            label_radius,
            max_value,
            values: *values,
            polygon,
            axes,
            labels: label_anchors,
            value_labels,
            rings,
        }
    }

    /// Text shown next to a data vertex, e.g. `"7/10"`.
    #[must_use]
    pub fn value_label_text(&self, axis: usize) -> String {
        format!("{}/{}", self.value_labels[axis].value, self.max_value)
    }
}

/// Text alignment that keeps a label on the outer side of its anchor.
#[must_use]
pub fn horizontal_alignment(anchor_x: f64, center_x: f64) -> TextHAlign {
    if (anchor_x - center_x).abs() < ALIGN_CENTER_EPSILON {
        TextHAlign::Center
    } else if anchor_x < center_x {
        TextHAlign::Right
    } else {
        TextHAlign::Left
    }
}

/// Rounds halves towards positive infinity (`-2.5` becomes `-2`).
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{RadarGeometry, horizontal_alignment, round_half_up};
    use crate::render::TextHAlign;

    fn labels() -> [String; 6] {
        std::array::from_fn(|axis| format!("L{axis}"))
    }

    #[test]
    fn label_alignment_follows_side_of_center() {
        let geometry = RadarGeometry::build(&[5.0; 6], &labels(), 300.0, 10.0);
        assert_eq!(geometry.labels[0].h_align, TextHAlign::Center);
        assert_eq!(geometry.labels[1].h_align, TextHAlign::Left);
        assert_eq!(geometry.labels[2].h_align, TextHAlign::Left);
        assert_eq!(geometry.labels[3].h_align, TextHAlign::Center);
        assert_eq!(geometry.labels[4].h_align, TextHAlign::Right);
        assert_eq!(geometry.labels[5].h_align, TextHAlign::Right);
    }

    #[test]
    fn label_anchors_sit_at_label_radius() {
        let geometry = RadarGeometry::build(&[5.0; 6], &labels(), 300.0, 10.0);
        assert_abs_diff_eq!(geometry.label_radius, 105.0 * 1.3, epsilon = 1e-9);
        for label in &geometry.labels {
            assert_abs_diff_eq!(
                label.point.distance_to(geometry.center),
                geometry.label_radius,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn rings_are_ten_with_only_outer_solid() {
        let geometry = RadarGeometry::build(&[0.0; 6], &labels(), 300.0, 10.0);
        assert_eq!(geometry.rings.len(), 10);
        assert!(geometry.rings[..9].iter().all(|ring| ring.dashed));
        assert!(!geometry.rings[9].dashed);
        assert_abs_diff_eq!(geometry.rings[9].radius, geometry.radius);
        assert_abs_diff_eq!(geometry.rings[0].radius, geometry.radius / 10.0);
    }

    #[test]
    fn value_text_uses_rounded_value_and_max() {
        let values = [6.5, 7.49, 0.0, 10.0, 3.2, 9.9];
        let geometry = RadarGeometry::build(&values, &labels(), 300.0, 10.0);
        assert_eq!(geometry.value_label_text(0), "7/10");
        assert_eq!(geometry.value_label_text(1), "7/10");
        assert_eq!(geometry.value_label_text(3), "10/10");
        assert_eq!(geometry.value_label_text(5), "10/10");
    }

    #[test]
    fn rounding_matches_half_up_semantics() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
        assert_eq!(round_half_up(0.49), 0);
    }

    #[test]
    fn tiny_offset_from_center_is_still_centered() {
        assert_eq!(horizontal_alignment(150.0 + 1e-9, 150.0), TextHAlign::Center);
        assert_eq!(horizontal_alignment(149.0, 150.0), TextHAlign::Right);
        assert_eq!(horizontal_alignment(151.0, 150.0), TextHAlign::Left);
    }
}
