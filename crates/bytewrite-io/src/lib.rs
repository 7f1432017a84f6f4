//! bytewrite-io - Image I/O
//!
//! Decoding goes through the `image` crate, so any format it was built
//! with (PNG, JPEG, BMP, GIF, TIFF, WebP) can be read. Output is always
//! PNG.

mod convert;
pub mod error;

pub use convert::{pix_from_dynamic, pix_from_rgba, pix_to_rgba};
pub use error::{IoError, IoResult};

use bytewrite_core::Pix;
use log::debug;
use std::path::Path;

/// Read an image from a file path.
///
/// # Errors
///
/// Returns [`IoError::ImageLoadFailed`] if the file does not exist or
/// cannot be decoded.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| IoError::ImageLoadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let pix = pix_from_dynamic(img)?;
    debug!(
        "read {} ({}x{})",
        path.display(),
        pix.width(),
        pix.height()
    );
    Ok(pix)
}

/// Read an image and shrink it by an integer factor.
///
/// Large camera photos are reduced before any per-pixel work. A factor
/// of 0 or 1 reads the image at full size.
pub fn read_image_downsampled<P: AsRef<Path>>(path: P, factor: u32) -> IoResult<Pix> {
    let pix = read_image(path)?;
    Ok(bytewrite_transform::downsample(&pix, factor)?)
}

/// Write an image to a file path as PNG.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let path = path.as_ref();
    pix_to_rgba(pix)
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| IoError::ImageWriteFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}
