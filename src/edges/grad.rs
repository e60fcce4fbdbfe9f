//! Sobel image gradients with replicate borders.
use crate::image::{ImageF32, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Norm used to turn `(gx, gy)` into a magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientNorm {
    /// `|gx| + |gy|`
    #[default]
    L1,
    /// `sqrt(gx^2 + gy^2)`
    L2,
}

impl GradientNorm {
    #[inline]
    pub fn apply(self, gx: f32, gy: f32) -> f32 {
        match self {
            Self::L1 => gx.abs() + gy.abs(),
            Self::L2 => (gx * gx + gy * gy).sqrt(),
        }
    }
}

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative
    pub gx: ImageF32,
    /// Vertical derivative (positive pointing down)
    pub gy: ImageF32,
    pub mag: ImageF32,
}

/// Compute Sobel gradients on a single-channel float image.
pub fn sobel_gradients(l: &ImageF32, norm: GradientNorm) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);
    if l.is_empty() {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, src_row) in rows.iter().enumerate() {
                for (kx, &sx) in x_idx.iter().enumerate() {
                    let v = src_row[sx];
                    sum_x += v * SOBEL_KERNEL_X[ky][kx];
                    sum_y += v * SOBEL_KERNEL_Y[ky][kx];
                }
            }
            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = norm.apply(sum_x, sum_y);
        }
    }

    Grad { gx, gy, mag }
}
