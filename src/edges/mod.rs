//! Edge extraction: Sobel gradients, non-maximum suppression and Canny
//! hysteresis producing a binary edge mask.
//!
//! Thresholds are expressed on the 8-bit intensity scale of the input, so the
//! classic `(30, 150)` pair applies directly to a blurred grayscale image.
//!
//! - Gradients use a 3×3 Sobel pair with replicated borders.
//! - NMS compares each pixel with its two neighbours along the gradient,
//!   quantized to 0°, 45°, 90° or 135°.
//! - Hysteresis keeps pixels above the high threshold and every pixel above
//!   the low threshold 8-connected to one of them.

pub mod canny;
pub mod grad;
pub mod nms;

pub use canny::{canny, CannyParams};
pub use grad::{sobel_gradients, Grad, GradientNorm};
pub use nms::suppress_non_maxima;
