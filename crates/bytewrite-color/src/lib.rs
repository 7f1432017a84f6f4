//! bytewrite-color - Color processing ahead of recognition
//!
//! - **Color space conversion** ([`colorspace`]): desaturation to grey
//! - **Thresholding** ([`threshold`]): distance-ratio binarization to
//!   pure ink and paper

pub mod colorspace;
pub mod error;
pub mod threshold;

// Re-export core types
pub use bytewrite_core;

pub use error::{ColorError, ColorResult};

pub use colorspace::{convert_to_gray, rgb_to_gray};
pub use threshold::{
    DEFAULT_INK_RATIO, binarize, binarize_in_place, binarize_with_threshold, ink_ratio,
    should_be_ink,
};
