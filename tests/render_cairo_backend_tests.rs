#![cfg(feature = "cairo-backend")]

use std::rc::Rc;

use cairo::{Context, Format, ImageSurface};
use radar_rs::ChartError;
use radar_rs::animation::ManualFrameScheduler;
use radar_rs::api::{
    ConnectorGeometryTracker, ConnectorStyle, LayoutTrigger, NodeRegistry, RadarChartEngine,
    RadarChartOptions, RadarStyle, StaticNode, build_radar_render_frame,
};
use radar_rs::core::{Rect, Viewport};
use radar_rs::render::{CairoContextRenderer, CairoRenderer};

const LABELS: [&str; 6] = ["Speed", "Power", "Range", "Armor", "Agility", "Luck"];

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_radar_primitive() {
    let mut renderer = CairoRenderer::new(300, 300).expect("renderer");
    let mut engine = RadarChartEngine::new(ManualFrameScheduler::new());
    engine
        .configure(
            &[3.0, 6.0, 9.0, 2.0, 5.0, 8.0],
            &LABELS,
            RadarChartOptions::default(),
            0.0,
        )
        .expect("configure");

    engine.render(&mut renderer, 500.0).expect("render");
    let stats = renderer.last_stats();

    assert_eq!(stats.polygons_drawn, 11);
    assert_eq!(stats.lines_drawn, 6);
    assert_eq!(stats.circles_drawn, 6);
    assert_eq!(stats.texts_drawn, 12);
}

#[test]
fn connector_overlay_can_paint_over_existing_content() {
    let mut registry = NodeRegistry::new();
    registry.set_container(Some(Rc::new(StaticNode::new(Rect::new(0.0, 0.0, 200.0, 200.0)))));
    registry.set_top(Some(Rc::new(StaticNode::new(Rect::new(90.0, 0.0, 20.0, 20.0)))));
    registry.set_bottom(Some(Rc::new(StaticNode::new(Rect::new(90.0, 180.0, 20.0, 20.0)))));
    registry.push_middle(Some(Rc::new(StaticNode::new(Rect::new(10.0, 90.0, 20.0, 20.0)))));

    let mut tracker = ConnectorGeometryTracker::new();
    tracker.recompute(&registry, LayoutTrigger::Mount);

    let mut renderer = CairoRenderer::new(200, 200).expect("renderer");
    renderer.set_clear_color(None).expect("transparent");
    let drawn = tracker
        .render(&mut renderer, Viewport::new(200, 200), &ConnectorStyle::default())
        .expect("render");

    assert!(drawn);
    assert_eq!(renderer.last_stats().lines_drawn, 2);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let labels = LABELS.map(str::to_owned);
    let geometry = radar_rs::api::RadarGeometry::build(&[5.0; 6], &labels, 320.0, 10.0);
    let frame = build_radar_render_frame(
        &geometry,
        RadarChartOptions::default().color,
        &RadarStyle::default(),
    );

    let mut renderer = CairoRenderer::new(320, 320).expect("renderer");
    let surface = ImageSurface::create(Format::ARgb32, 320, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    renderer
        .render_on_cairo_context(&context, &frame)
        .expect("render on external context");

    assert_eq!(renderer.last_stats().texts_drawn, 12);
}
