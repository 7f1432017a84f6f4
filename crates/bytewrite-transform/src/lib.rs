//! bytewrite-transform - Geometric transformations
//!
//! Only nearest-neighbour scaling is provided. Sampling keeps the hard
//! ink/paper edges of a binarized glyph intact; any interpolating method
//! would introduce grey pixels that no longer count as ink.

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{downsample, scale_by_sampling, scale_to_size};
