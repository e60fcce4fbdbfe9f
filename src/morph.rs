//! Binary dilation with a rectangular structuring element.
//!
//! Pixels are treated as binary with threshold `> 0`; outputs are `0` or
//! `255`. The anchor sits at `(kw / 2, kh / 2)`, so even-sized elements grow
//! shapes towards +x / +y. Neighbours outside the image are ignored.
use crate::error::{BendError, Result};
use crate::image::{ImageView, ImageViewMut, Mask};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DilateParams {
    pub kernel_width: usize,
    pub kernel_height: usize,
    pub iterations: usize,
}

impl Default for DilateParams {
    fn default() -> Self {
        Self {
            kernel_width: 2,
            kernel_height: 2,
            iterations: 1,
        }
    }
}

/// Dilate `src` with a `kw × kh` rectangle applied `iterations` times.
pub fn dilate(src: &Mask, params: &DilateParams) -> Result<Mask> {
    let (kw, kh) = (params.kernel_width, params.kernel_height);
    if kw == 0 || kh == 0 {
        return Err(BendError::invalid(format!(
            "structuring element must be non-empty, got {kw}x{kh}"
        )));
    }
    let mut out = src.clone();
    for _ in 0..params.iterations {
        out = dilate_once(&out, kw, kh);
    }
    Ok(out)
}

// Rectangles are separable: a row pass followed by a column pass.
fn dilate_once(src: &Mask, kw: usize, kh: usize) -> Mask {
    let (w, h) = (src.w, src.h);
    let (ax, ay) = ((kw / 2) as isize, (kh / 2) as isize);
    let mut rows = Mask::new(w, h);
    for y in 0..h {
        let row = src.row(y);
        let out = rows.row_mut(y);
        for (x, dst) in out.iter_mut().enumerate() {
            let lo = (x as isize - ax).max(0) as usize;
            let hi = (x as isize - ax + kw as isize).min(w as isize);
            if hi > lo as isize && row[lo..hi as usize].iter().any(|&v| v != 0) {
                *dst = crate::image::mask::ON;
            }
        }
    }

    let mut out = Mask::new(w, h);
    for y in 0..h {
        let lo = (y as isize - ay).max(0) as usize;
        let hi = (y as isize - ay + kh as isize).min(h as isize);
        if hi <= lo as isize {
            continue;
        }
        for sy in lo..hi as usize {
            let src_row = &rows.data[sy * w..(sy + 1) * w];
            let dst_row = &mut out.data[y * w..(y + 1) * w];
            for (dst, &v) in dst_row.iter_mut().zip(src_row) {
                if v != 0 {
                    *dst = crate::image::mask::ON;
                }
            }
        }
    }
    out
}
