//! bytewrite core - Raster data structures for handwriting recognition
//!
//! This crate provides the fundamental data structures used throughout
//! the bytewrite pipeline:
//!
//! - [`Pix`] / [`PixMut`] - RGBA image container (immutable / mutable)
//! - [`Box`] / [`Boxa`] - Rectangle regions
//! - [`Pixa`] - Arrays of images with optional bounding boxes
//!
//! Every image is 8 bits per channel RGBA. After binarization an image
//! holds only two values, [`color::INK`] and [`color::PAPER`].

pub mod box_;
pub mod error;
pub mod pix;
pub mod pixa;

pub use box_::{Box, Boxa};
pub use error::{Error, Result};
pub use pix::{Pix, PixMut};
pub use pixa::Pixa;

/// Color channel helpers for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Opaque black, the ink value of a binarized image.
    pub const INK: u32 = 0x0000_00ff;

    /// Opaque white, the background value of a binarized image.
    pub const PAPER: u32 = 0xffff_ffff;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Whether a pixel is ink.
    ///
    /// Only exact opaque black counts; callers binarize first.
    #[inline]
    pub fn is_ink(pixel: u32) -> bool {
        pixel == INK
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_and_extract() {
            let p = compose_rgba(10, 20, 30, 40);
            assert_eq!(p, 0x0a14_1e28);
            assert_eq!(extract_rgba(p), (10, 20, 30, 40));
            assert_eq!(extract_rgb(p), (10, 20, 30));
        }

        #[test]
        fn test_ink_and_paper() {
            assert_eq!(compose_rgb(0, 0, 0), INK);
            assert_eq!(compose_rgb(255, 255, 255), PAPER);
            assert!(is_ink(INK));
            assert!(!is_ink(PAPER));
            // transparent black is not ink
            assert!(!is_ink(compose_rgba(0, 0, 0, 0)));
        }
    }
}
