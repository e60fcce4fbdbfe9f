use crate::types::BendPoint;

/// Keep each point unless it lies within `radius_px` of a point already kept.
///
/// Survivors keep their position and relative order.
pub fn merge_nearby(points: &[BendPoint], radius_px: f64) -> Vec<BendPoint> {
    let mut kept: Vec<BendPoint> = Vec::with_capacity(points.len());
    for &p in points {
        let pos = p.to_point();
        let duplicate = kept
            .iter()
            .any(|k| nalgebra::distance(&k.to_point(), &pos) <= radius_px);
        if !duplicate {
            kept.push(p);
        }
    }
    kept
}
