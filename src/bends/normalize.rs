use super::options::SegmentOrder;
use crate::types::Segment;
use std::cmp::Reverse;

/// Swap endpoints where needed so that every segment satisfies `x1 <= x2`.
pub fn orient_left_to_right(segments: &[Segment]) -> Vec<Segment> {
    segments.iter().map(|s| s.left_to_right()).collect()
}

/// Orient every segment left-to-right, then stable-sort on `x1` in `order`.
///
/// Segments sharing `x1` keep their input order. Nothing is merged or dropped.
pub fn normalize_segments(segments: &[Segment], order: SegmentOrder) -> Vec<Segment> {
    let mut out = orient_left_to_right(segments);
    match order {
        SegmentOrder::LeftEndpointDescending => out.sort_by_key(|s| Reverse(s.x1)),
        SegmentOrder::LeftEndpointAscending => out.sort_by_key(|s| s.x1),
    }
    out
}
