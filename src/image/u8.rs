use crate::error::{BendError, Result};

/// Borrowed 8-bit grayscale image.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view over `data`, checking that the buffer covers `w × h`.
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Result<Self> {
        let img = Self {
            w,
            h,
            stride: w,
            data,
        };
        img.check_layout()?;
        Ok(img)
    }

    /// Checks that `stride` spans a full row and `data` holds every row.
    pub fn check_layout(&self) -> Result<()> {
        if self.stride < self.w {
            return Err(BendError::invalid(format!(
                "stride {} is shorter than width {}",
                self.stride, self.w
            )));
        }
        let needed = match self.h {
            0 => 0,
            h => (h - 1) * self.stride + self.w,
        };
        if self.data.len() < needed {
            return Err(BendError::invalid(format!(
                "buffer holds {} bytes, {}x{} image with stride {} needs {needed}",
                self.data.len(),
                self.w,
                self.h,
                self.stride
            )));
        }
        Ok(())
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
