//! Minimal image containers used by the imaging stages.
//!
//! - `ImageU8`: borrowed 8-bit grayscale view with stride (decoder output).
//! - `ImageF32`: owned float buffer for filtering and gradients.
//! - `Mask`: owned binary image (`0` / `255`) for edges and dilation.
pub mod f32;
pub mod io;
pub mod mask;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::mask::Mask;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
