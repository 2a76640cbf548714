use serde::{Deserialize, Serialize};

/// Canvas layers of a radar surface, listed bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Connectors,
    Grid,
    Axis,
    Series,
    Labels,
    Markers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStack {
    pub layers: Vec<CanvasLayerKind>,
}

impl LayerStack {
    /// Paint order of the radar chart: scale reference first, data and labels on top.
    #[must_use]
    pub fn radar() -> Self {
        Self {
            layers: vec![
                CanvasLayerKind::Grid,
                CanvasLayerKind::Axis,
                CanvasLayerKind::Series,
                CanvasLayerKind::Labels,
                CanvasLayerKind::Markers,
            ],
        }
    }

    /// Connector overlay: a single layer drawn beneath the nodes it links.
    #[must_use]
    pub fn connectors() -> Self {
        Self {
            layers: vec![CanvasLayerKind::Connectors],
        }
    }

    #[must_use]
    pub fn contains(&self, kind: CanvasLayerKind) -> bool {
        self.layers.contains(&kind)
    }
}
