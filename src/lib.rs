//! radar-rs: animated six-axis radar chart engine and node connector tracking.
//!
//! The crate is headless. Hosts feed data and clock ticks into
//! [`RadarChartEngine`], or node rectangles into
//! [`api::ConnectorGeometryTracker`], and hand the resulting
//! [`render::RenderFrame`]s to a [`render::Renderer`] backend.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{RadarChartEngine, RadarChartOptions};
pub use error::{ChartError, ChartResult};
