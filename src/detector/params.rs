//! Parameter types configuring the detector stages.
//!
//! Defaults reproduce the reference configuration: 7×7 blur, Canny 30/150,
//! 2×2 dilation, Hough threshold 50 with min length 50 and gap 20, and 10 px
//! bend proximity.

use crate::bends::BendParams;
use crate::edges::CannyParams;
use crate::hough::HoughParams;
use crate::morph::DilateParams;
use serde::{Deserialize, Serialize};

/// Gaussian pre-smoothing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurParams {
    /// Odd kernel size in pixels.
    pub kernel_size: usize,
    /// Standard deviation; `<= 0` derives it from the kernel size.
    pub sigma: f32,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self {
            kernel_size: 7,
            sigma: 0.0,
        }
    }
}

/// Detector-wide parameters for the full image-to-bends pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    pub blur: BlurParams,
    pub canny: CannyParams,
    pub dilate: DilateParams,
    pub hough: HoughParams,
    pub bends: BendParams,
}
