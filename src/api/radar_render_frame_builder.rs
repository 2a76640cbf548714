use crate::core::Viewport;
use crate::render::{
    CanvasLayerKind, CirclePrimitive, Color, LayerStack, LineStrokeStyle, LinePrimitive,
    PolygonPrimitive, RenderFrame, TextPrimitive,
};

use super::{RadarGeometry, RadarStyle};

/// Materializes radar geometry into a layered frame sized to the chart square.
///
/// Labels may extend past the square; hosts are expected not to clip it.
#[must_use]
pub fn build_radar_render_frame(
    geometry: &RadarGeometry,
    series_color: Color,
    style: &RadarStyle,
) -> RenderFrame {
    let mut frame = RenderFrame::from_stack(Viewport::square(geometry.size), LayerStack::radar());

    for ring in &geometry.rings {
        let stroke_style = if ring.dashed {
            style.grid_inner_stroke_style
        } else {
            LineStrokeStyle::Solid
        };
        frame.push_polygon(
            CanvasLayerKind::Grid,
            PolygonPrimitive::outline(ring.vertices, style.grid_line_width, style.grid_line_color)
                .with_stroke_style(stroke_style),
        );
    }

    for axis in &geometry.axes {
        frame.push_line(
            CanvasLayerKind::Axis,
            LinePrimitive::between(
                axis.from,
                axis.to,
                style.axis_line_width,
                style.axis_line_color,
            ),
        );
    }

    frame.push_polygon(
        CanvasLayerKind::Series,
        PolygonPrimitive::outline(
            geometry.polygon,
            style.series_line_width,
            series_color.opaque(),
        )
        .with_fill(series_color),
    );

    for label in &geometry.labels {
        if label.text.is_empty() {
            continue;
        }
        frame.push_text(
            CanvasLayerKind::Labels,
            TextPrimitive::new(
                label.text.clone(),
                label.point.x,
                label.point.y,
                style.axis_label_font_size_px,
                style.axis_label_color,
                label.h_align,
            ),
        );
    }

    for (axis, vertex) in geometry.polygon.iter().enumerate() {
        frame.push_circle(
            CanvasLayerKind::Markers,
            CirclePrimitive::new(
                *vertex,
                style.vertex_marker_radius,
                series_color.opaque(),
                style.vertex_marker_outline_color,
                style.vertex_marker_outline_width,
            ),
        );
        let anchor = geometry.value_labels[axis];
        frame.push_text(
            CanvasLayerKind::Markers,
            TextPrimitive::new(
                geometry.value_label_text(axis),
                anchor.point.x,
                anchor.point.y,
                style.value_label_font_size_px,
                style.value_label_color,
                anchor.h_align,
            ),
        );
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::build_radar_render_frame;
    use crate::api::{RadarGeometry, RadarStyle};
    use crate::render::{CanvasLayerKind, Color, LineStrokeStyle};

    const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    fn geometry() -> RadarGeometry {
        let labels = std::array::from_fn(|axis| format!("axis {axis}"));
        RadarGeometry::build(&[5.0, 6.0, 7.0, 8.0, 9.0, 4.0], &labels, 300.0, 10.0)
    }

    #[test]
    fn frame_contains_every_radar_element() {
        let color = Color::rgba8(75, 192, 192, 0.6);
        let frame = build_radar_render_frame(&geometry(), color, &RadarStyle::default());
        frame.validate().expect("valid frame");

        assert_eq!(frame.polygons().count(), 11, "10 rings + series polygon");
        assert_eq!(frame.lines().count(), 6);
        assert_eq!(frame.circles().count(), 6);
        assert_eq!(frame.texts().count(), 12, "6 axis labels + 6 value labels");

        let series = frame.layer(CanvasLayerKind::Series).expect("series layer");
        assert_eq!(series.polygons[0].fill_color, Some(color));
        assert_eq!(series.polygons[0].stroke_color.alpha, 1.0);
    }

    #[test]
    fn only_outer_grid_ring_is_solid() {
        let frame = build_radar_render_frame(&geometry(), BLUE, &RadarStyle::default());
        let grid = frame.layer(CanvasLayerKind::Grid).expect("grid layer");
        let solid = grid
            .polygons
            .iter()
            .filter(|ring| ring.stroke_style == LineStrokeStyle::Solid)
            .count();
        assert_eq!(solid, 1);
        assert_eq!(grid.polygons[9].stroke_style, LineStrokeStyle::Solid);
    }

    #[test]
    fn empty_labels_are_skipped_instead_of_failing_validation() {
        let mut geometry = geometry();
        geometry.labels[2].text.clear();
        let frame = build_radar_render_frame(&geometry, BLUE, &RadarStyle::default());
        frame.validate().expect("valid frame");
        assert_eq!(frame.texts().count(), 11);
    }
}
