//! Progressive probabilistic Hough transform on a binary mask.
//!
//! Pixels are visited in random order (seeded, so runs are reproducible).
//! Each visited pixel votes in a `(theta, rho)` accumulator; as soon as a bin
//! reaches the vote threshold, the corresponding line is walked in both
//! directions through the mask, tolerating gaps of up to `max_line_gap`
//! pixels. Walked pixels are removed from the mask, and if the span is long
//! enough the segment is emitted and the votes of its pixels are withdrawn.
//!
//! Only pixels that actually voted have their votes withdrawn, which keeps the
//! accumulator non-negative.
use crate::error::{BendError, Result};
use crate::image::Mask;
use crate::types::Segment;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

const SHIFT: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Distance resolution of the accumulator in pixels.
    pub rho: f32,
    /// Angle resolution of the accumulator in radians.
    pub theta: f32,
    /// Votes required before a line is traced.
    pub threshold: u32,
    /// Segments shorter than this along both axes are discarded.
    pub min_line_length: i32,
    /// Largest run of unset pixels bridged while tracing.
    pub max_line_gap: i32,
    /// Stop after this many segments; 0 means no limit.
    pub max_lines: usize,
    /// Seed for the pixel visiting order.
    pub seed: u64,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            rho: 1.0,
            theta: std::f32::consts::PI / 180.0,
            threshold: 50,
            min_line_length: 50,
            max_line_gap: 20,
            max_lines: 0,
            seed: 0x5eed,
        }
    }
}

struct Accumulator {
    trig: Vec<(f32, f32)>,
    num_rho: usize,
    bins: Vec<i32>,
}

impl Accumulator {
    fn new(params: &HoughParams, width: usize, height: usize) -> Self {
        let num_angle = ((std::f32::consts::PI / params.theta).round() as usize).max(1);
        let num_rho = ((((width + height) * 2 + 1) as f32 / params.rho).round() as usize).max(1);
        let irho = 1.0 / params.rho;
        let trig = (0..num_angle)
            .map(|n| {
                let t = n as f32 * params.theta;
                (t.cos() * irho, t.sin() * irho)
            })
            .collect();
        Self {
            trig,
            num_rho,
            bins: vec![0; num_angle * num_rho],
        }
    }

    #[inline]
    fn bin(&self, n: usize, x: usize, y: usize) -> usize {
        let (c, s) = self.trig[n];
        let r = (x as f32 * c + y as f32 * s).round() as isize;
        let r = (r + (self.num_rho as isize - 1) / 2).clamp(0, self.num_rho as isize - 1);
        n * self.num_rho + r as usize
    }

    /// Adds the votes of `(x, y)` and returns the strongest `(votes, angle index)`.
    fn vote(&mut self, x: usize, y: usize) -> (i32, usize) {
        let mut best = (i32::MIN, 0);
        for n in 0..self.trig.len() {
            let b = self.bin(n, x, y);
            self.bins[b] += 1;
            if self.bins[b] > best.0 {
                best = (self.bins[b], n);
            }
        }
        best
    }

    fn withdraw(&mut self, x: usize, y: usize) {
        for n in 0..self.trig.len() {
            let b = self.bin(n, x, y);
            self.bins[b] -= 1;
        }
    }
}

/// Fixed-point stepping along a line through the seed pixel.
#[derive(Clone, Copy)]
struct Walker {
    x0: i64,
    y0: i64,
    dx0: i64,
    dy0: i64,
    x_major: bool,
}

impl Walker {
    fn new(x: usize, y: usize, cos_t: f32, sin_t: f32) -> Self {
        // line direction is the normal rotated by 90°
        let a = -sin_t;
        let b = cos_t;
        let half = 1i64 << (SHIFT - 1);
        if a.abs() > b.abs() {
            Self {
                x0: x as i64,
                y0: ((y as i64) << SHIFT) + half,
                dx0: if a > 0.0 { 1 } else { -1 },
                dy0: (b as f64 * (1i64 << SHIFT) as f64 / a.abs() as f64).round() as i64,
                x_major: true,
            }
        } else {
            Self {
                x0: ((x as i64) << SHIFT) + half,
                y0: y as i64,
                dx0: (a as f64 * (1i64 << SHIFT) as f64 / b.abs() as f64).round() as i64,
                dy0: if b > 0.0 { 1 } else { -1 },
                x_major: false,
            }
        }
    }

    /// Pixel sequence starting at the seed, forward (`k == 0`) or backward.
    fn pixels(self, k: usize) -> impl Iterator<Item = (i64, i64)> {
        let sign = if k == 0 { 1 } else { -1 };
        let (dx, dy) = (self.dx0 * sign, self.dy0 * sign);
        (0i64..).map(move |step| {
            let x = self.x0 + dx * step;
            let y = self.y0 + dy * step;
            if self.x_major {
                (x, y >> SHIFT)
            } else {
                (x >> SHIFT, y)
            }
        })
    }
}

/// Detect line segments in `mask`.
pub fn hough_segments(mask: &Mask, params: &HoughParams) -> Result<Vec<Segment>> {
    if !(params.rho > 0.0) || !(params.theta > 0.0) {
        return Err(BendError::invalid(format!(
            "hough resolutions must be positive, got rho={} theta={}",
            params.rho, params.theta
        )));
    }
    let (w, h) = (mask.w, mask.h);
    let mut lines = Vec::new();
    if w == 0 || h == 0 {
        return Ok(lines);
    }

    let mut acc = Accumulator::new(params, w, h);
    let mut live: Vec<bool> = mask.data.iter().map(|&v| v != 0).collect();
    let mut voted = vec![false; w * h];
    let mut pending: Vec<(usize, usize)> = mask.set_pixels();
    let mut rng = StdRng::seed_from_u64(params.seed);
    let threshold = i32::try_from(params.threshold).unwrap_or(i32::MAX);
    let in_frame = |x: i64, y: i64| x >= 0 && y >= 0 && x < w as i64 && y < h as i64;

    while !pending.is_empty() {
        let pick = rng.gen_range(0..pending.len());
        let (x, y) = pending.swap_remove(pick);
        if !live[y * w + x] {
            continue;
        }
        voted[y * w + x] = true;
        let (votes, best_n) = acc.vote(x, y);
        if votes < threshold {
            continue;
        }

        let (cos_t, sin_t) = acc.trig[best_n];
        let walker = Walker::new(x, y, cos_t, sin_t);
        let mut ends = [(x as i64, y as i64); 2];
        for (k, end) in ends.iter_mut().enumerate() {
            let mut gap = 0;
            for (px, py) in walker.pixels(k) {
                if !in_frame(px, py) {
                    break;
                }
                if live[py as usize * w + px as usize] {
                    gap = 0;
                    *end = (px, py);
                } else {
                    gap += 1;
                    if gap > params.max_line_gap {
                        break;
                    }
                }
            }
        }

        let span_x = (ends[1].0 - ends[0].0).abs();
        let span_y = (ends[1].1 - ends[0].1).abs();
        let min_len = i64::from(params.min_line_length);
        let good_line = span_x >= min_len || span_y >= min_len;

        for (k, &end) in ends.iter().enumerate() {
            for (px, py) in walker.pixels(k) {
                let idx = py as usize * w + px as usize;
                if live[idx] {
                    if good_line && voted[idx] {
                        acc.withdraw(px as usize, py as usize);
                    }
                    live[idx] = false;
                }
                if (px, py) == end {
                    break;
                }
            }
        }

        if good_line {
            lines.push(Segment::new(
                ends[0].0 as i32,
                ends[0].1 as i32,
                ends[1].0 as i32,
                ends[1].1 as i32,
            ));
            if params.max_lines > 0 && lines.len() >= params.max_lines {
                break;
            }
        }
    }

    Ok(lines)
}
