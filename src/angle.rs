//! Angle utilities for bend orientation.
use crate::types::BendPoint;

/// Folds an angle in degrees into the half-turn range [0, 180).
///
/// Direction-reversed vectors map onto the same value: only the orientation
/// relative to the horizontal axis survives.
#[inline]
pub fn fold_half_turn_deg(angle: f64) -> f64 {
    let folded = if angle < 0.0 { angle + 180.0 } else { angle };
    // atan2(+0, -x) yields exactly 180
    if folded >= 180.0 {
        folded - 180.0
    } else {
        folded
    }
}

/// Orientation of the vector `from -> to` relative to the image x-axis,
/// in degrees within [0, 180).
#[inline]
pub fn orientation_deg(from: BendPoint, to: BendPoint) -> f64 {
    let dx = f64::from(to.x) - f64::from(from.x);
    let dy = f64::from(to.y) - f64::from(from.y);
    fold_half_turn_deg(dy.atan2(dx).to_degrees())
}
