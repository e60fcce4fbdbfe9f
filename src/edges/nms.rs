//! Non-maximum suppression on gradient magnitude along the gradient direction.
//!
//! Pixels outside the image count as zero magnitude, so the outer frame is
//! processed like the interior.
use super::grad::Grad;
use crate::image::{ImageF32, ImageView, ImageViewMut};

const TAN_22_5_DEG: f32 = 0.414_213_57;
const TAN_67_5_DEG: f32 = 2.414_213_6;

/// Returns a magnitude image where every pixel that is not a local maximum
/// along its gradient, or whose magnitude is at most `low`, is zeroed.
pub fn suppress_non_maxima(grad: &Grad, low: f32) -> ImageF32 {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut out = ImageF32::new(w, h);
    let mag_at = |x: isize, y: isize| -> f32 {
        if x < 0 || y < 0 || x >= w as isize || y >= h as isize {
            0.0
        } else {
            grad.mag.get(x as usize, y as usize)
        }
    };

    for y in 0..h {
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let mag_row = grad.mag.row(y);
        let out_row = out.row_mut(y);
        for x in 0..w {
            let m = mag_row[x];
            if m <= low {
                continue;
            }
            let gx = gx_row[x];
            let gy = gy_row[x];
            let ax = gx.abs();
            let ay = gy.abs();
            let (xi, yi) = (x as isize, y as isize);

            // (before, after) neighbours along the quantized gradient
            let (before, after) = if ay <= ax * TAN_22_5_DEG {
                (mag_at(xi - 1, yi), mag_at(xi + 1, yi))
            } else if ay > ax * TAN_67_5_DEG {
                (mag_at(xi, yi - 1), mag_at(xi, yi + 1))
            } else if (gx > 0.0) == (gy > 0.0) {
                (mag_at(xi - 1, yi - 1), mag_at(xi + 1, yi + 1))
            } else {
                (mag_at(xi + 1, yi - 1), mag_at(xi - 1, yi + 1))
            };

            // ties resolve towards the lower coordinate so plateaus stay one pixel wide
            if m > before && m >= after {
                out_row[x] = m;
            }
        }
    }
    out
}
