use super::options::BendParams;
use crate::angle::orientation_deg;
use crate::types::{AngleRecord, BendPoint, Segment};

/// Left endpoints of every sorted segment whose successor starts nearby.
///
/// Each qualifying adjacent pair contributes the first segment's left endpoint;
/// several pairs around one physical bend yield several points.
pub fn find_bend_points(sorted: &[Segment], params: &BendParams) -> Vec<BendPoint> {
    let near = |a: i32, b: i32, limit: i32| (i64::from(a) - i64::from(b)).abs() < i64::from(limit);
    sorted
        .windows(2)
        .filter(|pair| {
            near(pair[0].x1, pair[1].x1, params.proximity_x_px)
                && near(pair[0].y1, pair[1].y1, params.proximity_y_px)
        })
        .map(|pair| pair[0].p0())
        .collect()
}

/// Orientation from each bend point to the next, attached to the earlier point.
pub fn bend_angles(points: &[BendPoint]) -> Vec<AngleRecord> {
    points
        .windows(2)
        .map(|pair| AngleRecord {
            point: pair[0],
            angle_deg: orientation_deg(pair[0], pair[1]),
        })
        .collect()
}
