#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod bends;
pub mod detector;
pub mod error;
pub mod image;
pub mod report;
pub mod types;

// Imaging stages feeding the bend extractor.
pub mod angle;
pub mod config;
pub mod edges;
pub mod filters;
pub mod hough;
pub mod morph;

// --- High-level re-exports -------------------------------------------------

pub use crate::bends::{detect, detect_within, BendParams, SegmentOrder};
pub use crate::detector::{BendDetector, DetectionReport, DetectorParams};
pub use crate::error::BendError;
pub use crate::types::{AngleRecord, BendPoint, BendResult, Segment};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use bend_detector::prelude::*;
///
/// let segments = [
///     Segment::new(30, 40, 80, 40),
///     Segment::new(30, 40, 70, 38),
/// ];
/// let result = detect(&segments, &BendParams::default()).unwrap();
/// assert_eq!(result.bend_points, vec![BendPoint::new(30, 40)]);
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{detect, BendDetector, BendParams, BendPoint, DetectorParams, Segment};
}
