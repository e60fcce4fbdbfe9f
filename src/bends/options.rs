use serde::{Deserialize, Serialize};

/// Scan order applied to normalized segments before the adjacency test.
///
/// Bend points inherit this order, and angles are taken between consecutive
/// bend points, so changing it changes both labels and angle direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentOrder {
    /// Left endpoint furthest right first (right-to-left scan).
    #[default]
    LeftEndpointDescending,
    /// Left endpoint furthest left first.
    LeftEndpointAscending,
}

/// Thresholds and ordering for the segment-chain bend extractor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BendParams {
    /// Adjacent left endpoints closer than this along x (strictly) may form a bend.
    pub proximity_x_px: i32,
    /// Adjacent left endpoints closer than this along y (strictly) may form a bend.
    pub proximity_y_px: i32,
    pub order: SegmentOrder,
    /// Opt-in post-pass: drop bend points within this Euclidean distance of an
    /// earlier kept point. `None` keeps every detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_radius_px: Option<f64>,
}

impl Default for BendParams {
    fn default() -> Self {
        Self {
            proximity_x_px: 10,
            proximity_y_px: 10,
            order: SegmentOrder::LeftEndpointDescending,
            merge_radius_px: None,
        }
    }
}

impl BendParams {
    pub fn with_merge_radius(mut self, radius_px: f64) -> Self {
        self.merge_radius_px = Some(radius_px);
        self
    }

    pub fn with_order(mut self, order: SegmentOrder) -> Self {
        self.order = order;
        self
    }
}
