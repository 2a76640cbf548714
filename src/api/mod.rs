mod chart_snapshot;
mod connector_render_frame_builder;
mod connector_tracker;
mod engine_snapshot;
mod json_contract;
mod node_handle;
mod radar_config;
mod radar_engine;
mod radar_geometry;
mod radar_render_frame_builder;
mod render_style;

pub use chart_snapshot::{ChartSnapshot, data_equals};
pub use connector_render_frame_builder::build_connector_render_frame;
pub use connector_tracker::{
    AnchorKind, ConnectorGeometryTracker, ConnectorLayout, LayoutTrigger, NodeRegistry, Segment,
    SegmentId, recompute_segments,
};
pub use engine_snapshot::RadarEngineSnapshot;
pub use json_contract::{RADAR_ENGINE_SNAPSHOT_JSON_SCHEMA_V1, RadarEngineSnapshotJsonContractV1};
pub use node_handle::{MeasureFn, NodeHandle, StaticNode};
pub use radar_config::{RadarChartOptions, responsive_chart_size};
pub use radar_engine::RadarChartEngine;
pub use radar_geometry::{
    ALIGN_CENTER_EPSILON, AxisLine, GridRing, LabelAnchor, RadarGeometry, ValueAnchor,
    horizontal_alignment, round_half_up,
};
pub use radar_render_frame_builder::build_radar_render_frame;
pub use render_style::{ConnectorStyle, RadarStyle};
