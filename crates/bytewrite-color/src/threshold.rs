//! Binarization
//!
//! Converts a photo to pure ink ([`color::INK`]) on pure paper
//! ([`color::PAPER`]). Each pixel is placed by how much closer it sits to
//! black than to white in RGB space:
//!
//! ```text
//! dist_white = sqrt((255-r)^2 + (255-g)^2 + (255-b)^2)
//! dist_black = sqrt(r^2 + g^2 + b^2)
//! ink        = dist_white / (dist_white + dist_black) > ratio
//! ```
//!
//! Fully transparent pixels are always paper.

use crate::{ColorError, ColorResult};
use bytewrite_core::{Pix, PixMut, color};
use log::debug;

/// Ink ratio above which a pixel is classified as ink.
///
/// Pencil and ballpoint strokes in daylight photos sit well above it,
/// shadows on white paper below.
pub const DEFAULT_INK_RATIO: f64 = 0.575;

/// Relative distance of a pixel from white, in `[0, 1]`.
///
/// 0 for pure white, 1 for pure black.
#[inline]
pub fn ink_ratio(r: u8, g: u8, b: u8) -> f64 {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let dist_white = ((255.0 - r).powi(2) + (255.0 - g).powi(2) + (255.0 - b).powi(2)).sqrt();
    let dist_black = (r * r + g * g + b * b).sqrt();
    // the two distances cannot both be zero
    dist_white / (dist_white + dist_black)
}

/// Decide whether a single pixel becomes ink.
#[inline]
pub fn should_be_ink(pixel: u32, ratio: f64) -> bool {
    let (r, g, b, a) = color::extract_rgba(pixel);
    if a == 0 {
        return false;
    }
    ink_ratio(r, g, b) > ratio
}

/// Binarize an image with [`DEFAULT_INK_RATIO`].
///
/// # Examples
///
/// ```
/// use bytewrite_core::{Pix, color};
/// use bytewrite_color::binarize;
///
/// let pix = Pix::new_filled(4, 4, color::compose_rgb(30, 30, 40)).unwrap();
/// let bin = binarize(&pix);
/// assert_eq!(bin.count_ink(), 16);
/// ```
pub fn binarize(pix: &Pix) -> Pix {
    let mut pm = pix.to_mut();
    apply(&mut pm, DEFAULT_INK_RATIO);
    pm.into()
}

/// Binarize an image with an explicit ink ratio.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if `ratio` is not within
/// `[0, 1]`.
pub fn binarize_with_threshold(pix: &Pix, ratio: f64) -> ColorResult<Pix> {
    check_ratio(ratio)?;
    let mut pm = pix.to_mut();
    apply(&mut pm, ratio);
    Ok(pm.into())
}

/// Binarize a mutable image in place.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if `ratio` is not within
/// `[0, 1]`.
pub fn binarize_in_place(pix: &mut PixMut, ratio: f64) -> ColorResult<()> {
    check_ratio(ratio)?;
    apply(pix, ratio);
    Ok(())
}

fn check_ratio(ratio: f64) -> ColorResult<()> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(ColorError::InvalidParameters(format!(
            "ink ratio must be within [0, 1], got {ratio}"
        )));
    }
    Ok(())
}

fn apply(pix: &mut PixMut, ratio: f64) {
    let mut ink = 0usize;
    for p in pix.data_mut() {
        *p = if should_be_ink(*p, ratio) {
            ink += 1;
            color::INK
        } else {
            color::PAPER
        };
    }
    debug!(
        "binarized {}x{} at ratio {}: {} ink pixels",
        pix.width(),
        pix.height(),
        ratio,
        ink
    );
}
