//! Synthetic glyphs and words
//!
//! Every letter `a..z` is drawn as a [`GLYPH_WIDTH`] x [`GLYPH_HEIGHT`]
//! rectangular frame with a single interior dot whose position encodes the
//! letter. All glyphs carry the same amount of ink and none is contained in
//! another, so a glyph matches its own letter at 100 and every other letter
//! strictly below. Every column of a glyph holds ink, so segmenting a
//! rendered word yields the glyphs back unchanged.

use crate::{TestError, TestResult};
use bytewrite_core::{Pix, color};

/// Width of a synthetic glyph
pub const GLYPH_WIDTH: u32 = 7;

/// Height of a synthetic glyph
pub const GLYPH_HEIGHT: u32 = 8;

/// Ink colour used by [`to_photo`]
pub const PHOTO_INK: (u8, u8, u8) = (40, 40, 70);

/// Paper colour used by [`to_photo`]
pub const PHOTO_PAPER: (u8, u8, u8) = (235, 230, 220);

/// Draw the binarized glyph for a lowercase letter.
pub fn letter_glyph(letter: char) -> TestResult<Pix> {
    if !letter.is_ascii_lowercase() {
        return Err(TestError::UnknownLetter(letter));
    }
    let idx = letter as u32 - 'a' as u32;
    let inner_w = GLYPH_WIDTH - 2;

    let mut pm = Pix::new_filled(GLYPH_WIDTH, GLYPH_HEIGHT, color::PAPER)?.to_mut();
    for x in 0..GLYPH_WIDTH {
        pm.set_pixel_unchecked(x, 0, color::INK);
        pm.set_pixel_unchecked(x, GLYPH_HEIGHT - 1, color::INK);
    }
    for y in 0..GLYPH_HEIGHT {
        pm.set_pixel_unchecked(0, y, color::INK);
        pm.set_pixel_unchecked(GLYPH_WIDTH - 1, y, color::INK);
    }
    pm.set_pixel_unchecked(1 + idx % inner_w, 1 + idx / inner_w, color::INK);
    Ok(pm.into())
}

/// Draw every letter `a..z` in order.
pub fn alphabet() -> TestResult<Vec<(char, Pix)>> {
    ('a'..='z')
        .map(|c| letter_glyph(c).map(|pix| (c, pix)))
        .collect()
}

/// Render a word as glyphs separated by `gap` paper columns, surrounded by
/// `margin` pixels of paper on every side.
pub fn render_word(text: &str, gap: u32, margin: u32) -> TestResult<Pix> {
    let glyphs = text
        .chars()
        .map(letter_glyph)
        .collect::<TestResult<Vec<_>>>()?;
    let n = glyphs.len() as u32;
    let width = 2 * margin + n * GLYPH_WIDTH + n.saturating_sub(1) * gap;
    let height = 2 * margin + GLYPH_HEIGHT;

    let mut pm = Pix::new_filled(width, height, color::PAPER)?.to_mut();
    for (i, glyph) in glyphs.iter().enumerate() {
        let x0 = margin + i as u32 * (GLYPH_WIDTH + gap);
        for y in 0..GLYPH_HEIGHT {
            for x in 0..GLYPH_WIDTH {
                pm.set_pixel_unchecked(x0 + x, margin + y, glyph.get_pixel_unchecked(x, y));
            }
        }
    }
    Ok(pm.into())
}

/// Draw full-height ink blocks over the inclusive column spans given.
pub fn column_blocks(width: u32, height: u32, spans: &[(u32, u32)]) -> TestResult<Pix> {
    let mut pm = Pix::new_filled(width, height, color::PAPER)?.to_mut();
    for &(start, end) in spans {
        for x in start..=end.min(width - 1) {
            for y in 0..height {
                pm.set_pixel_unchecked(x, y, color::INK);
            }
        }
    }
    Ok(pm.into())
}

/// Recolour a binarized image to look like a photo of ink on paper.
pub fn to_photo(pix: &Pix) -> Pix {
    let (ir, ig, ib) = PHOTO_INK;
    let (pr, pg, pb) = PHOTO_PAPER;
    let mut pm = pix.to_mut();
    for p in pm.data_mut() {
        *p = if color::is_ink(*p) {
            color::compose_rgb(ir, ig, ib)
        } else {
            color::compose_rgb(pr, pg, pb)
        };
    }
    pm.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_are_distinct_with_equal_ink() {
        let glyphs = alphabet().unwrap();
        assert_eq!(glyphs.len(), 26);
        for (i, (_, a)) in glyphs.iter().enumerate() {
            assert_eq!(a.count_ink(), 27);
            for (_, b) in &glyphs[i + 1..] {
                assert!(!a.pixels_equal(b));
            }
        }
    }

    #[test]
    fn test_unknown_letter() {
        assert!(matches!(letter_glyph('A'), Err(TestError::UnknownLetter('A'))));
    }

    #[test]
    fn test_render_word_geometry() {
        let pix = render_word("cat", 3, 2).unwrap();
        assert_eq!(pix.dimensions(), (2 * 2 + 3 * 7 + 2 * 3, 2 * 2 + 8));
        assert_eq!(pix.count_ink(), 3 * 27);
    }

    #[test]
    fn test_to_photo_has_no_pure_values() {
        let photo = to_photo(&letter_glyph('q').unwrap());
        assert_eq!(photo.count_ink(), 0);
        assert!(!photo.is_binarized());
    }
}
