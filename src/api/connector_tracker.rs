use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Point, Rect, Viewport};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ConnectorStyle, NodeHandle, build_connector_render_frame};

/// Fixed node a connector starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorKind {
    Top,
    Bottom,
}

impl AnchorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Stable id of a segment, displayed as `top-3` / `bottom-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentId {
    pub anchor: AnchorKind,
    /// Position of the linked node in the middle sequence.
    pub index: usize,
}

impl SegmentId {
    #[must_use]
    pub const fn new(anchor: AnchorKind, index: usize) -> Self {
        Self { anchor, index }
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.anchor.as_str(), self.index)
    }
}

/// Line between two node centers in container-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    pub p1: Point,
    pub p2: Point,
}

/// Result of one recompute pass, ordered by middle index then anchor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConnectorLayout {
    #[serde(with = "indexmap::map::serde_seq")]
    segments: IndexMap<SegmentId, Segment>,
}

impl ConnectorLayout {
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Segment> {
        self.segments.values()
    }

    #[must_use]
    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(&id)
    }

    fn push(&mut self, id: SegmentId, p1: Point, p2: Point) {
        self.segments.insert(id, Segment { id, p1, p2 });
    }
}

/// Computes all connector segments from freshly measured rectangles.
///
/// Returns an empty layout while top, bottom or container cannot be
/// measured. Middle entries that are absent or unmeasurable are skipped;
/// every other entry yields `top-i` then `bottom-i`.
#[must_use]
pub fn recompute_segments<H: NodeHandle>(
    top: Option<&H>,
    bottom: Option<&H>,
    middle: &[Option<H>],
    container: Option<&H>,
) -> ConnectorLayout {
    let mut layout = ConnectorLayout::default();
    let Some(frame) = container.and_then(NodeHandle::measure) else {
        return layout;
    };
    let center_of = |handle: Option<&H>| -> Option<Point> {
        handle
            .and_then(NodeHandle::measure)
            .map(|rect: Rect| rect.center_in(frame))
    };
    let (Some(top_center), Some(bottom_center)) = (center_of(top), center_of(bottom)) else {
        return layout;
    };

    for (index, handle) in middle.iter().enumerate() {
        let Some(middle_center) = center_of(handle.as_ref()) else {
            continue;
        };
        layout.push(
            SegmentId::new(AnchorKind::Top, index),
            top_center,
            middle_center,
        );
        layout.push(
            SegmentId::new(AnchorKind::Bottom, index),
            bottom_center,
            middle_center,
        );
    }
    layout
}

/// Handles of the nodes a tracker links together.
///
/// `revision` changes whenever a handle is replaced or the middle sequence
/// changes identity or length.
#[derive(Debug)]
pub struct NodeRegistry<H> {
    top: Option<H>,
    bottom: Option<H>,
    container: Option<H>,
    middle: Vec<Option<H>>,
    revision: u64,
}

impl<H> Default for NodeRegistry<H> {
    fn default() -> Self {
        Self {
            top: None,
            bottom: None,
            container: None,
            middle: Vec::new(),
            revision: 0,
        }
    }
}

impl<H: NodeHandle> NodeRegistry<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_top(&mut self, handle: Option<H>) {
        self.top = handle;
        self.bump();
    }

    pub fn set_bottom(&mut self, handle: Option<H>) {
        self.bottom = handle;
        self.bump();
    }

    pub fn set_container(&mut self, handle: Option<H>) {
        self.container = handle;
        self.bump();
    }

    pub fn set_middle(&mut self, handles: Vec<Option<H>>) {
        self.middle = handles;
        self.bump();
    }

    pub fn push_middle(&mut self, handle: Option<H>) {
        self.middle.push(handle);
        self.bump();
    }

    /// Replaces the entry at `index`; ignored when out of range.
    pub fn set_middle_at(&mut self, index: usize, handle: Option<H>) {
        if let Some(slot) = self.middle.get_mut(index) {
            *slot = handle;
            self.bump();
        }
    }

    pub fn remove_middle(&mut self, index: usize) -> Option<Option<H>> {
        if index >= self.middle.len() {
            return None;
        }
        let removed = self.middle.remove(index);
        self.bump();
        Some(removed)
    }

    pub fn clear_middle(&mut self) {
        self.middle.clear();
        self.bump();
    }

    #[must_use]
    pub fn top(&self) -> Option<&H> {
        self.top.as_ref()
    }

    #[must_use]
    pub fn bottom(&self) -> Option<&H> {
        self.bottom.as_ref()
    }

    #[must_use]
    pub fn container(&self) -> Option<&H> {
        self.container.as_ref()
    }

    #[must_use]
    pub fn middle(&self) -> &[Option<H>] {
        &self.middle
    }

    #[must_use]
    pub fn middle_len(&self) -> usize {
        self.middle.len()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Reason a recompute pass was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutTrigger {
    Mount,
    Resize,
    Scroll,
    NodeSetChanged,
}

/// Keeps the latest connector layout of one node group.
///
/// Each pass builds a new `ConnectorLayout` and swaps the shared pointer;
/// layouts handed out earlier are never mutated.
#[derive(Debug, Default)]
pub struct ConnectorGeometryTracker {
    layout: Arc<ConnectorLayout>,
    seen_revision: Option<u64>,
    passes: u64,
}

impl ConnectorGeometryTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full recompute pass.
    pub fn recompute<H: NodeHandle>(
        &mut self,
        registry: &NodeRegistry<H>,
        trigger: LayoutTrigger,
    ) -> Arc<ConnectorLayout> {
        let layout = Arc::new(recompute_segments(
            registry.top(),
            registry.bottom(),
            registry.middle(),
            registry.container(),
        ));
        self.layout = Arc::clone(&layout);
        self.seen_revision = Some(registry.revision());
        self.passes += 1;
        trace!(
            ?trigger,
            middle_len = registry.middle_len(),
            segments = layout.len(),
            "connector layout recomputed"
        );
        layout
    }

    /// Recomputes only if the node set changed since the last pass.
    pub fn sync_node_set<H: NodeHandle>(
        &mut self,
        registry: &NodeRegistry<H>,
    ) -> Option<Arc<ConnectorLayout>> {
        if self.seen_revision == Some(registry.revision()) {
            return None;
        }
        debug!(
            revision = registry.revision(),
            middle_len = registry.middle_len(),
            "connector node set changed"
        );
        Some(self.recompute(registry, LayoutTrigger::NodeSetChanged))
    }

    #[must_use]
    pub fn layout(&self) -> Arc<ConnectorLayout> {
        Arc::clone(&self.layout)
    }

    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Draws the current layout over a container-sized surface.
    ///
    /// Returns `false` without calling the renderer when there is nothing to draw.
    pub fn render<R: Renderer>(
        &self,
        renderer: &mut R,
        viewport: Viewport,
        style: &ConnectorStyle,
    ) -> ChartResult<bool> {
        if self.layout.is_empty() {
            return Ok(false);
        }
        let frame = build_connector_render_frame(&self.layout, viewport, style);
        renderer.render(&frame)?;
        Ok(true)
    }
}
