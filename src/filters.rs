//! Separable Gaussian smoothing applied before edge detection.
use crate::error::{BendError, Result};
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order), odd length.
    fn taps(&self) -> &[f32];

    fn radius(&self) -> usize {
        self.taps().len() / 2
    }
}

/// Normalised Gaussian kernel.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    taps: Vec<f32>,
}

// Binomial-like tables used for small kernels when no sigma is given.
const SMALL_KERNELS: [&[f32]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125],
];

impl GaussianKernel {
    /// Build a kernel of odd size `ksize`.
    ///
    /// `sigma <= 0` derives it from the size as `0.3 * ((ksize - 1) / 2 - 1) + 0.8`;
    /// sizes up to 7 then use fixed tables.
    pub fn new(ksize: usize, sigma: f32) -> Result<Self> {
        if ksize == 0 || ksize % 2 == 0 {
            return Err(BendError::invalid(format!(
                "gaussian kernel size must be odd and positive, got {ksize}"
            )));
        }
        if sigma <= 0.0 && ksize <= 7 {
            return Ok(Self {
                taps: SMALL_KERNELS[ksize / 2].to_vec(),
            });
        }
        let sigma = if sigma > 0.0 {
            sigma
        } else {
            0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
        };
        let radius = (ksize / 2) as f32;
        let scale = -0.5 / (sigma * sigma);
        let mut taps: Vec<f32> = (0..ksize)
            .map(|i| {
                let x = i as f32 - radius;
                (scale * x * x).exp()
            })
            .collect();
        let sum: f32 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Ok(Self { taps })
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Blur `src` with a `ksize × ksize` Gaussian.
pub fn gaussian_blur(src: &ImageF32, ksize: usize, sigma: f32) -> Result<ImageF32> {
    let kernel = GaussianKernel::new(ksize, sigma)?;
    Ok(convolve_separable(src, &kernel))
}

/// Horizontal then vertical pass with reflect-101 borders (`dcb|abcd|cba`).
pub fn convolve_separable<F: SeparableFilter>(src: &ImageF32, filter: &F) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    let taps = filter.taps();
    let radius = filter.radius() as isize;
    let mut horiz = ImageF32::new(w, h);
    if src.is_empty() {
        return horiz;
    }

    for y in 0..h {
        let row = src.row(y);
        let out = horiz.row_mut(y);
        for (x, dst) in out.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = reflect_101(x as isize + k as isize - radius, w);
                acc += tap * row[sx];
            }
            *dst = acc;
        }
    }

    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        for (k, &tap) in taps.iter().enumerate() {
            let sy = reflect_101(y as isize + k as isize - radius, h);
            let src_row = horiz.row(sy);
            let dst_row = &mut out.data[y * w..(y + 1) * w];
            for (dst, &v) in dst_row.iter_mut().zip(src_row) {
                *dst += tap * v;
            }
        }
    }
    out
}

fn reflect_101(mut idx: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    while idx < 0 || idx > last {
        idx = if idx < 0 { -idx } else { 2 * last - idx };
    }
    idx as usize
}
