use crate::core::Viewport;
use crate::render::{CanvasLayerKind, LayerStack, LinePrimitive, RenderFrame};

use super::{ConnectorLayout, ConnectorStyle};

/// Materializes connector segments into a single-layer overlay frame.
///
/// `viewport` is the container size; segment points are already local to it.
#[must_use]
pub fn build_connector_render_frame(
    layout: &ConnectorLayout,
    viewport: Viewport,
    style: &ConnectorStyle,
) -> RenderFrame {
    let mut frame = RenderFrame::from_stack(viewport, LayerStack::connectors());
    for segment in layout.segments() {
        frame.push_line(
            CanvasLayerKind::Connectors,
            LinePrimitive::between(segment.p1, segment.p2, style.line_width, style.line_color),
        );
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::build_connector_render_frame;
    use crate::api::{ConnectorStyle, StaticNode, recompute_segments};
    use crate::core::{Rect, Viewport};
    use crate::render::CanvasLayerKind;

    #[test]
    fn every_segment_becomes_one_connector_line() {
        let container = StaticNode::new(Rect::new(0.0, 0.0, 200.0, 200.0));
        let top = StaticNode::new(Rect::new(90.0, 0.0, 20.0, 20.0));
        let bottom = StaticNode::new(Rect::new(90.0, 180.0, 20.0, 20.0));
        let middle = vec![
            Some(StaticNode::new(Rect::new(0.0, 90.0, 20.0, 20.0))),
            None,
            Some(StaticNode::new(Rect::new(180.0, 90.0, 20.0, 20.0))),
        ];
        let layout = recompute_segments(Some(&top), Some(&bottom), &middle, Some(&container));
        let style = ConnectorStyle::default();

        let frame = build_connector_render_frame(&layout, Viewport::new(200, 200), &style);
        frame.validate().expect("valid connector frame");

        let layer = frame.layer(CanvasLayerKind::Connectors).expect("layer");
        assert_eq!(layer.lines.len(), 4);
        assert!(layer.lines.iter().all(|line| line.color == style.line_color));
        assert_eq!(layer.lines[0].x1, 100.0);
        assert_eq!(layer.lines[0].y1, 10.0);
        assert_eq!(layer.lines[0].x2, 10.0);
        assert_eq!(layer.lines[0].y2, 100.0);
    }
}
