use crate::image::Mask;
use crate::types::{BendResult, Segment};
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Aggregated timing trace for one detector run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming {
            label: label.into(),
            elapsed_ms,
        });
    }
}

/// Result of running the detector on one image.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub width: usize,
    pub height: usize,
    /// Pixels set in the Canny mask.
    pub edge_pixels: usize,
    /// Pixels set after dilation.
    pub dilated_pixels: usize,
    /// Raw Hough segments, in detection order.
    pub segments: Vec<Segment>,
    pub bends: BendResult,
    pub timings: TimingBreakdown,
}

/// Report plus the intermediate masks, for tooling.
#[derive(Clone, Debug)]
pub struct DetectionTrace {
    pub report: DetectionReport,
    pub edges: Mask,
    pub dilated: Mask,
}
