//! Conversion between [`Pix`] and `image` buffers

use crate::IoResult;
use bytewrite_core::{Pix, color};
use image::{DynamicImage, RgbaImage};

/// Convert a decoded image into a [`Pix`].
///
/// Every input color type is expanded to 8-bit RGBA first.
pub fn pix_from_dynamic(img: DynamicImage) -> IoResult<Pix> {
    pix_from_rgba(&img.to_rgba8())
}

/// Convert an RGBA buffer into a [`Pix`].
pub fn pix_from_rgba(img: &RgbaImage) -> IoResult<Pix> {
    let data = img
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            color::compose_rgba(r, g, b, a)
        })
        .collect();
    Ok(Pix::from_raw(img.width(), img.height(), data)?)
}

/// Convert a [`Pix`] into an RGBA buffer.
pub fn pix_to_rgba(pix: &Pix) -> RgbaImage {
    let (w, h) = pix.dimensions();
    RgbaImage::from_fn(w, h, |x, y| {
        let (r, g, b, a) = color::extract_rgba(pix.get_pixel_unchecked(x, y));
        image::Rgba([r, g, b, a])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_order() {
        let img = RgbaImage::from_pixel(2, 1, image::Rgba([1, 2, 3, 4]));
        let pix = pix_from_rgba(&img).unwrap();
        assert_eq!(pix.get_pixel(1, 0), Some(0x0102_0304));
        assert_eq!(pix_to_rgba(&pix).get_pixel(0, 0).0, [1, 2, 3, 4]);
    }

    #[test]
    fn test_gray_input_expands() {
        let gray = image::GrayImage::from_pixel(3, 3, image::Luma([200]));
        let pix = pix_from_dynamic(DynamicImage::ImageLuma8(gray)).unwrap();
        assert_eq!(pix.get_rgba(2, 2), Some((200, 200, 200, 255)));
    }

    #[test]
    fn test_empty_image_rejected() {
        assert!(pix_from_rgba(&RgbaImage::new(0, 4)).is_err());
    }
}
