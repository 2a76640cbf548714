use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

use crate::core::types::Point;

/// Number of radar axes. Data and label vectors must match it.
pub const AXIS_COUNT: usize = 6;
/// Chart radius as a fraction of half the chart size.
pub const RADIUS_RATIO: f64 = 0.7;
/// Axis labels sit this far out, relative to the chart radius.
pub const LABEL_RADIUS_FACTOR: f64 = 1.3;
/// Value labels sit this many pixels beyond their data vertex.
pub const VALUE_LABEL_OFFSET: f64 = 12.0;
/// Minimum gap kept between a value label and the axis label ring.
pub const VALUE_LABEL_CLEARANCE: f64 = 25.0;
/// Number of concentric background hexagons.
pub const GRID_RING_COUNT: usize = 10;

/// Angle of axis `index` in radians.
///
/// Axis 0 points straight up; the rest follow clockwise in screen space
/// (y down) with a 60 degree spacing.
#[must_use]
pub fn axis_angle(index: usize) -> f64 {
    FRAC_PI_3 * index as f64 - FRAC_PI_2
}

/// Fraction of the radius covered by `value` once clamped to `[0, max_value]`.
///
/// `max_value` must be positive.
#[must_use]
pub fn normalized_value(value: f64, max_value: f64) -> f64 {
    debug_assert!(max_value > 0.0, "max_value must be positive");
    value.max(0.0).min(max_value) / max_value
}

/// Polar frame of a square radar chart of a given pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialLayout {
    center: Point,
    radius: f64,
}

impl RadialLayout {
    #[must_use]
    pub fn for_size(size: f64) -> Self {
        let half = size / 2.0;
        Self {
            center: Point::new(half, half),
            radius: half * RADIUS_RATIO,
        }
    }

    #[must_use]
    pub fn center(self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radius(self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn label_radius(self) -> f64 {
        self.radius * LABEL_RADIUS_FACTOR
    }

    #[must_use]
    pub fn point_at(self, axis: usize, distance: f64) -> Point {
        let angle = axis_angle(axis);
        Point::new(
            self.center.x + distance * angle.cos(),
            self.center.y + distance * angle.sin(),
        )
    }

    #[must_use]
    pub fn vertex_distance(self, value: f64, max_value: f64) -> f64 {
        self.radius * normalized_value(value, max_value)
    }

    /// Distance of a value label from the center, kept clear of the axis labels.
    ///
    /// Below a chart size of about 55 px the clearance bound is negative, so
    /// the label lands on the far side of the center along its axis.
    #[must_use]
    pub fn value_label_distance(self, value: f64, max_value: f64) -> f64 {
        let preferred = self.vertex_distance(value, max_value) + VALUE_LABEL_OFFSET;
        preferred.min(self.label_radius() - VALUE_LABEL_CLEARANCE)
    }

    /// Regular hexagon through the six axes at `distance` from the center.
    #[must_use]
    pub fn hexagon(self, distance: f64) -> [Point; AXIS_COUNT] {
        std::array::from_fn(|axis| self.point_at(axis, distance))
    }

    /// Radius of background ring `step` (`1..=GRID_RING_COUNT`).
    #[must_use]
    pub fn ring_radius(self, step: usize) -> f64 {
        self.radius * step as f64 / GRID_RING_COUNT as f64
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{AXIS_COUNT, RadialLayout, axis_angle, normalized_value};
    use crate::core::Point;

    #[test]
    fn first_axis_points_up_and_third_axis_points_down_right() {
        let layout = RadialLayout::for_size(300.0);
        let top = layout.point_at(0, 100.0);
        assert_abs_diff_eq!(top.x, 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(top.y, 50.0, epsilon = 1e-9);

        let lower_right = layout.point_at(2, 100.0);
        assert!(lower_right.x > 150.0);
        assert!(lower_right.y > 150.0);
    }

    #[test]
    fn axes_are_evenly_spaced() {
        for axis in 1..AXIS_COUNT {
            let step = axis_angle(axis) - axis_angle(axis - 1);
            assert_abs_diff_eq!(step, std::f64::consts::FRAC_PI_3, epsilon = 1e-12);
        }
    }

    #[test]
    fn normalized_value_clamps_both_ends() {
        assert_eq!(normalized_value(-3.0, 10.0), 0.0);
        assert_eq!(normalized_value(25.0, 10.0), 1.0);
        assert_abs_diff_eq!(normalized_value(2.5, 10.0), 0.25);
    }

    #[test]
    fn value_label_distance_never_reaches_label_ring() {
        let layout = RadialLayout::for_size(300.0);
        let near_zero = layout.value_label_distance(0.0, 10.0);
        assert_abs_diff_eq!(near_zero, 12.0);

        let at_max = layout.value_label_distance(10.0, 10.0);
        assert_abs_diff_eq!(at_max, layout.label_radius() - 25.0, epsilon = 1e-9);
    }

    #[test]
    fn tiny_chart_pushes_value_label_past_center() {
        let layout = RadialLayout::for_size(52.0);
        let distance = layout.value_label_distance(5.0, 10.0);
        assert_abs_diff_eq!(distance, layout.label_radius() - 25.0, epsilon = 1e-9);
        assert!(distance < 0.0);

        let anchor = layout.point_at(0, distance);
        assert_abs_diff_eq!(anchor.x, layout.center().x, epsilon = 1e-9);
        assert!(anchor.y > layout.center().y);
    }

    #[test]
    fn hexagon_vertices_sit_on_requested_distance() {
        let layout = RadialLayout::for_size(200.0);
        let center = layout.center();
        assert_eq!(center, Point::new(100.0, 100.0));
        for vertex in layout.hexagon(42.0) {
            assert_abs_diff_eq!(vertex.distance_to(center), 42.0, epsilon = 1e-9);
        }
    }
}
