//! Segment-chain bend extractor.
//!
//! Turns an unordered list of straight segment detections into an ordered
//! sequence of bend points and the orientation of the path between them:
//!
//! - Normalization: every segment is oriented left-to-right (`x1 <= x2`), then
//!   stable-sorted on `x1` according to [`SegmentOrder`] (right-to-left scan
//!   by default).
//! - Bend detection: each adjacent pair of sorted segments whose left
//!   endpoints are within the proximity thresholds on both axes emits the
//!   first segment's left endpoint. Pairs are independent, so a cluster of
//!   overlapping detections produces several near-duplicate points.
//! - Optional merge pass: with `merge_radius_px` set, points within that
//!   radius of an earlier kept point are dropped.
//! - Angles: orientation of `bend[i] -> bend[i+1]` relative to the x-axis,
//!   folded into [0, 180) and attached to `bend[i]`.
//!
//! Output order is scan order, not geometric order along the object.
//!
//! All functions are pure; inputs are borrowed and outputs owned by the caller.

mod extract;
mod merge;
mod normalize;
mod options;

pub use extract::{bend_angles, find_bend_points};
pub use merge::merge_nearby;
pub use normalize::{normalize_segments, orient_left_to_right};
pub use options::{BendParams, SegmentOrder};

use crate::error::{BendError, Result};
use crate::types::{BendResult, Segment};
use log::debug;

/// Bend points and angles for `segments`.
///
/// Empty input yields an empty result. Segments with negative coordinates are
/// rejected with [`BendError::InvalidInput`].
pub fn detect(segments: &[Segment], params: &BendParams) -> Result<BendResult> {
    if let Some((i, s)) = segments
        .iter()
        .enumerate()
        .find(|(_, s)| s.has_negative_coord())
    {
        return Err(BendError::invalid(format!(
            "segment {i} has negative coordinates: {s:?}"
        )));
    }
    extract_chain(segments, params)
}

/// Like [`detect`], but also requires every endpoint to lie inside a
/// `width × height` frame.
pub fn detect_within(
    segments: &[Segment],
    width: usize,
    height: usize,
    params: &BendParams,
) -> Result<BendResult> {
    if width == 0 || height == 0 {
        return Err(BendError::invalid(format!(
            "frame must be non-empty, got {width}x{height}"
        )));
    }
    if let Some((i, s)) = segments
        .iter()
        .enumerate()
        .find(|(_, s)| !s.fits_within(width, height))
    {
        return Err(BendError::invalid(format!(
            "segment {i} lies outside the {width}x{height} frame: {s:?}"
        )));
    }
    extract_chain(segments, params)
}

fn extract_chain(segments: &[Segment], params: &BendParams) -> Result<BendResult> {
    let sorted = normalize_segments(segments, params.order);
    let mut bend_points = find_bend_points(&sorted, params);
    if let Some(radius) = params.merge_radius_px {
        if !(radius >= 0.0) || !radius.is_finite() {
            return Err(BendError::invalid(format!(
                "merge radius must be finite and non-negative, got {radius}"
            )));
        }
        let before = bend_points.len();
        bend_points = merge_nearby(&bend_points, radius);
        debug!(
            "bends: merged {} -> {} points (radius {radius} px)",
            before,
            bend_points.len()
        );
    }
    let angles = bend_angles(&bend_points);
    debug!(
        "bends: {} segments -> {} bend points, {} angles",
        segments.len(),
        bend_points.len(),
        angles.len()
    );
    Ok(BendResult {
        bend_points,
        angles,
    })
}

#[cfg(test)]
mod tests;
