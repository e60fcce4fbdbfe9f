use super::*;
use crate::types::{BendPoint, Segment};

fn segs(raw: &[(i32, i32, i32, i32)]) -> Vec<Segment> {
    raw.iter().copied().map(Segment::from).collect()
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn normalization_orients_left_to_right() {
    let input = segs(&[(50, 10, 10, 30), (5, 5, 9, 1), (7, 7, 7, 0)]);
    let out = orient_left_to_right(&input);
    assert_eq!(out, segs(&[(10, 30, 50, 10), (5, 5, 9, 1), (7, 7, 7, 0)]));
    assert!(out.iter().all(|s| s.x1 <= s.x2));
}

#[test]
fn normalization_is_idempotent() {
    let input = segs(&[(90, 1, 3, 4), (12, 8, 40, 2), (40, 2, 12, 8), (33, 3, 33, 9)]);
    let once = normalize_segments(&input, SegmentOrder::default());
    let twice = normalize_segments(&once, SegmentOrder::default());
    assert_eq!(once, twice);
}

#[test]
fn sort_is_descending_and_stable_on_ties() {
    let input = segs(&[
        (20, 1, 60, 1),
        (80, 0, 90, 0),
        (20, 2, 70, 2),
        (95, 5, 20, 3), // becomes (20, 3, 95, 5)
    ]);
    let out = normalize_segments(&input, SegmentOrder::LeftEndpointDescending);
    assert_eq!(
        out,
        segs(&[(80, 0, 90, 0), (20, 1, 60, 1), (20, 2, 70, 2), (20, 3, 95, 5)])
    );
}

#[test]
fn ascending_order_reverses_scan_but_keeps_ties() {
    let input = segs(&[(50, 0, 60, 0), (10, 1, 30, 1), (10, 2, 40, 2)]);
    let out = normalize_segments(&input, SegmentOrder::LeftEndpointAscending);
    assert_eq!(out, segs(&[(10, 1, 30, 1), (10, 2, 40, 2), (50, 0, 60, 0)]));
}

#[test]
fn empty_input_gives_empty_output() {
    let result = detect(&[], &BendParams::default()).unwrap();
    assert!(result.bend_points.is_empty());
    assert!(result.angles.is_empty());
}

#[test]
fn single_segment_has_no_bends() {
    let result = detect(&segs(&[(1, 2, 100, 2)]), &BendParams::default()).unwrap();
    assert!(result.is_empty());
    assert!(result.angles.is_empty());
}

#[test]
fn distant_left_endpoints_do_not_form_bends() {
    // Left endpoints 10, 48 and 200: every adjacent pair is more than 10 px
    // apart along x, even though the first two segments touch end to start.
    let input = segs(&[(10, 10, 50, 10), (48, 12, 90, 12), (200, 5, 260, 5)]);
    let result = detect(&input, &BendParams::default()).unwrap();
    assert!(!result.bend_points.contains(&BendPoint::new(200, 5)));
    assert!(!result.bend_points.contains(&BendPoint::new(48, 12)));
    assert!(result.bend_points.is_empty());
    assert!(result.angles.is_empty());
}

#[test]
fn coincident_left_endpoints_emit_one_bend() {
    let input = segs(&[(30, 40, 80, 40), (30, 40, 70, 38)]);
    let result = detect(&input, &BendParams::default()).unwrap();
    assert_eq!(result.bend_points, vec![BendPoint::new(30, 40)]);
    assert!(result.angles.is_empty());
}

#[test]
fn clustered_segments_are_not_deduplicated() {
    let input = segs(&[(100, 50, 200, 50), (102, 52, 180, 90), (150, 10, 98, 49)]);
    let result = detect(&input, &BendParams::default()).unwrap();
    assert_eq!(
        result.bend_points,
        vec![BendPoint::new(102, 52), BendPoint::new(100, 50)]
    );
    assert_eq!(result.angles.len(), 1);
    assert_eq!(result.angles[0].point, BendPoint::new(102, 52));
    assert!(approx_eq(result.angles[0].angle_deg, 45.0));
}

#[test]
fn merge_pass_is_opt_in() {
    let input = segs(&[(100, 50, 200, 50), (102, 52, 180, 90), (150, 10, 98, 49)]);
    let merged = detect(&input, &BendParams::default().with_merge_radius(5.0)).unwrap();
    assert_eq!(merged.bend_points, vec![BendPoint::new(102, 52)]);
    assert!(merged.angles.is_empty());
}

#[test]
fn merge_rejects_negative_radius() {
    let input = segs(&[(30, 40, 80, 40), (30, 40, 70, 38)]);
    let params = BendParams::default().with_merge_radius(-1.0);
    assert!(matches!(
        detect(&input, &params),
        Err(crate::error::BendError::InvalidInput(_))
    ));
}

#[test]
fn proximity_threshold_is_strict() {
    let at_limit = segs(&[(110, 0, 150, 0), (100, 0, 140, 0)]);
    assert!(detect(&at_limit, &BendParams::default())
        .unwrap()
        .is_empty());
    let inside = segs(&[(109, 9, 150, 0), (100, 0, 140, 0)]);
    assert_eq!(
        detect(&inside, &BendParams::default()).unwrap().bend_points,
        vec![BendPoint::new(109, 9)]
    );
}

#[test]
fn angles_follow_scan_order_along_a_polyline() {
    // Two bends of a zig-zag, each detected by a pair of overlapping segments.
    let input = segs(&[
        (40, 40, 90, 90),
        (42, 41, 100, 10),
        (200, 100, 260, 40),
        (203, 98, 280, 140),
    ]);
    let result = detect(&input, &BendParams::default()).unwrap();
    assert_eq!(
        result.bend_points,
        vec![BendPoint::new(203, 98), BendPoint::new(42, 41)]
    );
    assert_eq!(result.angles.len(), 1);
    assert_eq!(result.angles[0].point, BendPoint::new(203, 98));
    let expected = (-57.0f64).atan2(-161.0).to_degrees() + 180.0;
    assert!(approx_eq(result.angles[0].angle_deg, expected));
}

#[test]
fn detection_is_deterministic_and_counts_match() {
    let input = segs(&[
        (5, 5, 60, 5),
        (7, 6, 60, 50),
        (9, 8, 40, 90),
        (300, 20, 250, 30),
        (255, 28, 310, 80),
        (251, 31, 200, 5),
    ]);
    let params = BendParams::default();
    let a = detect(&input, &params).unwrap();
    let b = detect(&input, &params).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.angles.len(), a.bend_points.len().saturating_sub(1));
    assert!(a
        .angles
        .iter()
        .all(|r| (0.0..180.0).contains(&r.angle_deg)));
}

#[test]
fn negative_coordinates_are_invalid() {
    let input = segs(&[(-1, 0, 10, 0)]);
    assert!(matches!(
        detect(&input, &BendParams::default()),
        Err(crate::error::BendError::InvalidInput(_))
    ));
}

#[test]
fn frame_bounds_are_checked() {
    let input = segs(&[(0, 0, 64, 10)]);
    let params = BendParams::default();
    assert!(detect_within(&input, 64, 32, &params).is_err());
    assert!(detect_within(&input, 65, 32, &params).is_ok());
    assert!(detect_within(&[], 0, 32, &params).is_err());
}
