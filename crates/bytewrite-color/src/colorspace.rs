//! Color space conversion
//!
//! Desaturation uses the luminance weights of a saturation-0 color
//! matrix (0.213, 0.715, 0.072), the same weights a camera preview
//! pipeline applies when it renders a photo in greyscale.

use crate::ColorResult;
use bytewrite_core::{Pix, color};

const RED_WEIGHT: f32 = 0.213;
const GREEN_WEIGHT: f32 = 0.715;
const BLUE_WEIGHT: f32 = 0.072;

/// Convert RGB to a single grey level.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    let lum = RED_WEIGHT * r as f32 + GREEN_WEIGHT * g as f32 + BLUE_WEIGHT * b as f32;
    (lum + 0.5).min(255.0) as u8
}

/// Desaturate an image.
///
/// The output keeps the RGBA layout: each pixel's grey level is written
/// to R, G and B, and alpha is carried over unchanged.
///
/// # Examples
///
/// ```
/// use bytewrite_core::{Pix, color};
/// use bytewrite_color::convert_to_gray;
///
/// let pix = Pix::new_filled(2, 2, color::compose_rgb(255, 0, 0)).unwrap();
/// let gray = convert_to_gray(&pix).unwrap();
/// assert_eq!(gray.get_rgba(0, 0), Some((54, 54, 54, 255)));
/// ```
pub fn convert_to_gray(pix: &Pix) -> ColorResult<Pix> {
    let data = pix
        .data()
        .iter()
        .map(|&p| {
            let (r, g, b, a) = color::extract_rgba(p);
            let v = rgb_to_gray(r, g, b);
            color::compose_rgba(v, v, v, a)
        })
        .collect();
    Ok(Pix::from_raw(pix.width(), pix.height(), data)?)
}
