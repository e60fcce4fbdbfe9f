//! Value types shared by the imaging stages and the bend extractor.
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Straight pixel-space line detection `(x1, y1) -> (x2, y2)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Segment {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Endpoint carrying `x1`.
    #[inline]
    pub fn p0(&self) -> BendPoint {
        BendPoint::new(self.x1, self.y1)
    }

    /// Same segment with endpoints swapped when it points right-to-left.
    #[inline]
    pub fn left_to_right(self) -> Self {
        if self.x1 > self.x2 {
            Self::new(self.x2, self.y2, self.x1, self.y1)
        } else {
            self
        }
    }

    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(
            f64::from(self.x2) - f64::from(self.x1),
            f64::from(self.y2) - f64::from(self.y1),
        )
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    fn coords(&self) -> [i32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    pub(crate) fn has_negative_coord(&self) -> bool {
        self.coords().iter().any(|&c| c < 0)
    }

    pub(crate) fn fits_within(&self, width: usize, height: usize) -> bool {
        let inside = |v: i32, limit: usize| v >= 0 && (v as i64) < limit as i64;
        inside(self.x1, width)
            && inside(self.x2, width)
            && inside(self.y1, height)
            && inside(self.y2, height)
    }
}

impl From<[i32; 4]> for Segment {
    fn from(v: [i32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<(i32, i32, i32, i32)> for Segment {
    fn from((x1, y1, x2, y2): (i32, i32, i32, i32)) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

/// Pixel coordinate where the traced path changes direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BendPoint {
    pub x: i32,
    pub y: i32,
}

impl BendPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_point(self) -> Point2<f64> {
        Point2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for BendPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Orientation of the path from `point` to the next bend point,
/// in degrees within `[0, 180)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleRecord {
    pub point: BendPoint,
    pub angle_deg: f64,
}

/// Bend points in scan order plus one angle per consecutive pair.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BendResult {
    pub bend_points: Vec<BendPoint>,
    pub angles: Vec<AngleRecord>,
}

impl BendResult {
    pub fn is_empty(&self) -> bool {
        self.bend_points.is_empty()
    }
}
