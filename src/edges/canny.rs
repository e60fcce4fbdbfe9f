use super::grad::{sobel_gradients, GradientNorm};
use super::nms::suppress_non_maxima;
use crate::image::{ImageF32, Mask};
use serde::{Deserialize, Serialize};

/// Canny thresholds on the 8-bit intensity scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyParams {
    /// Pixels above this magnitude may extend an edge.
    pub low_threshold: f32,
    /// Pixels above this magnitude start an edge.
    pub high_threshold: f32,
    pub gradient_norm: GradientNorm,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: 30.0,
            high_threshold: 150.0,
            gradient_norm: GradientNorm::L1,
        }
    }
}

impl CannyParams {
    /// `(low, high)` with the pair swapped if given in the wrong order.
    pub fn ordered(&self) -> (f32, f32) {
        if self.low_threshold > self.high_threshold {
            (self.high_threshold, self.low_threshold)
        } else {
            (self.low_threshold, self.high_threshold)
        }
    }
}

/// Canny edge detector returning a binary mask of edge pixels.
pub fn canny(l: &ImageF32, params: &CannyParams) -> Mask {
    let (low, high) = params.ordered();
    let grad = sobel_gradients(l, params.gradient_norm);
    let thin = suppress_non_maxima(&grad, low);
    hysteresis(&thin, high)
}

fn hysteresis(thin: &ImageF32, high: f32) -> Mask {
    let (w, h) = (thin.w, thin.h);
    let mut mask = Mask::new(w, h);
    let mut stack = Vec::with_capacity(64);

    for (idx, &m) in thin.data.iter().enumerate() {
        if m <= high || mask.data[idx] != 0 {
            continue;
        }
        mask.data[idx] = crate::image::mask::ON;
        stack.push(idx);
        while let Some(cur) = stack.pop() {
            let cx = (cur % w) as isize;
            let cy = (cur / w) as isize;
            for dy in -1isize..=1 {
                for dx in -1isize..=1 {
                    let nx = cx + dx;
                    let ny = cy + dy;
                    if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                        continue;
                    }
                    let n = ny as usize * w + nx as usize;
                    // weak pixels already passed the low threshold in NMS
                    if mask.data[n] == 0 && thin.data[n] > 0.0 {
                        mask.data[n] = crate::image::mask::ON;
                        stack.push(n);
                    }
                }
            }
        }
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_rect(w: usize, h: usize, x0: usize, y0: usize, x1: usize, y1: usize) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in y0..y1 {
            for x in x0..x1 {
                img.set(x, y, 220.0);
            }
        }
        img
    }

    #[test]
    fn rectangle_outline_is_detected() {
        let img = filled_rect(40, 30, 10, 8, 30, 22);
        let mask = canny(&img, &CannyParams::default());
        assert!(mask.count_set() > 0);
        // left border column sits next to the step at x=10
        assert!((9..=10).any(|x| mask.is_set(x, 15)));
        // flat interior and background stay empty
        assert!(!mask.is_set(20, 15));
        assert!(!mask.is_set(2, 2));
    }

    #[test]
    fn flat_image_has_no_edges() {
        let mut img = ImageF32::new(16, 16);
        img.data.iter_mut().for_each(|v| *v = 90.0);
        let mask = canny(&img, &CannyParams::default());
        assert_eq!(mask.count_set(), 0);
    }

    #[test]
    fn weak_edge_without_strong_seed_is_dropped() {
        // step of 10 gives an L1 magnitude of 40: above low, below high
        let img = filled_rect(20, 20, 10, 0, 20, 20);
        let mut weak = img.clone();
        weak.data.iter_mut().for_each(|v| *v = *v / 22.0);
        let mask = canny(&weak, &CannyParams::default());
        assert_eq!(mask.count_set(), 0);

        let low_high = CannyParams {
            low_threshold: 150.0,
            high_threshold: 30.0,
            ..Default::default()
        };
        assert_eq!(low_high.ordered(), (30.0, 150.0));
        assert!(canny(&weak, &low_high).count_set() == 0);
    }
}
