//! Image-to-bends pipeline.
//!
//! Stages, in order:
//! 1. Gaussian blur of the grayscale input (`filters`).
//! 2. Canny edges (`edges`).
//! 3. Dilation of the edge mask (`morph`).
//! 4. Probabilistic Hough segments (`hough`).
//! 5. Segment-chain bend extraction (`bends`).
//!
//! The detector only holds parameters; images are processed independently
//! and `process_batch` fans them out over the rayon pool.

mod params;
mod report;

pub use params::{BlurParams, DetectorParams};
pub use report::{DetectionReport, DetectionTrace, StageTiming, TimingBreakdown};

use crate::bends;
use crate::edges::canny;
use crate::error::{BendError, Result};
use crate::filters::gaussian_blur;
use crate::hough::hough_segments;
use crate::image::{ImageF32, ImageU8, ImageView};
use crate::morph::dilate;
use log::{debug, warn};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Clone, Debug, Default)]
pub struct BendDetector {
    params: DetectorParams,
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

impl BendDetector {
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Run every stage on `gray` and report bends and angles.
    pub fn process(&self, gray: ImageU8<'_>) -> Result<DetectionReport> {
        self.trace(gray).map(|t| t.report)
    }

    /// Like [`process`](Self::process), keeping the edge and dilated masks.
    pub fn trace(&self, gray: ImageU8<'_>) -> Result<DetectionTrace> {
        if gray.is_empty() {
            return Err(BendError::invalid(format!(
                "image must be non-empty, got {}x{}",
                gray.w, gray.h
            )));
        }
        gray.check_layout()?;
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let p = &self.params;

        let start = Instant::now();
        let blurred = gaussian_blur(&ImageF32::from_u8(&gray), p.blur.kernel_size, p.blur.sigma)?;
        timings.push("blur", elapsed_ms(start));

        let start = Instant::now();
        let edges = canny(&blurred, &p.canny);
        timings.push("canny", elapsed_ms(start));

        let start = Instant::now();
        let dilated = dilate(&edges, &p.dilate)?;
        timings.push("dilate", elapsed_ms(start));

        let start = Instant::now();
        let segments = hough_segments(&dilated, &p.hough)?;
        timings.push("hough", elapsed_ms(start));
        if segments.is_empty() {
            warn!(
                "BendDetector::trace no segments detected in {}x{} image",
                gray.w, gray.h
            );
        }

        let start = Instant::now();
        let bends = bends::detect_within(&segments, gray.w, gray.h, &p.bends)?;
        timings.push("bends", elapsed_ms(start));
        timings.total_ms = elapsed_ms(total_start);

        let edge_pixels = edges.count_set();
        let dilated_pixels = dilated.count_set();
        debug!(
            "BendDetector::trace edges={} dilated={} segments={} bends={} total_ms={:.3}",
            edge_pixels,
            dilated_pixels,
            segments.len(),
            bends.bend_points.len(),
            timings.total_ms
        );

        Ok(DetectionTrace {
            report: DetectionReport {
                width: gray.w,
                height: gray.h,
                edge_pixels,
                dilated_pixels,
                segments,
                bends,
                timings,
            },
            edges,
            dilated,
        })
    }

    /// Process independent images in parallel; results keep input order.
    pub fn process_batch(&self, images: &[ImageU8<'_>]) -> Vec<Result<DetectionReport>> {
        images.par_iter().map(|img| self.process(*img)).collect()
    }
}
