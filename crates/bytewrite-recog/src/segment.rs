//! Character segmentation
//!
//! A word is split at blank columns: every maximal run of columns that
//! hold at least one ink pixel becomes one glyph. Each glyph keeps the
//! full height of the input, so glyphs of one word share a baseline frame.
//!
//! Letters that touch, or that overlap horizontally without touching,
//! end up in the same segment.

use crate::glyph::{Glyph, GlyphTagger};
use crate::word::Word;
use crate::RecogResult;
use bytewrite_core::{Box, Pix, Pixa};
use log::{debug, info};

/// Find the inclusive `(start, end)` column spans that contain ink.
///
/// Spans are returned left to right and never touch: at least one blank
/// column separates consecutive spans.
pub fn find_column_spans(pix: &Pix) -> Vec<(u32, u32)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (x, has_ink) in pix.ink_columns().into_iter().enumerate() {
        let x = x as u32;
        match (has_ink, start) {
            (true, None) => start = Some(x),
            (false, Some(s)) => {
                spans.push((s, x - 1));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, pix.width() - 1));
    }
    spans
}

/// Split a binarized image into per-character sub-images.
///
/// Each entry of the returned [`Pixa`] carries the [`Box`] it was cut
/// from. An image without ink yields an empty `Pixa`.
///
/// # Examples
///
/// ```
/// use bytewrite_core::{Pix, color};
/// use bytewrite_recog::segment;
///
/// let mut pm = Pix::new_filled(9, 4, color::PAPER).unwrap().to_mut();
/// for y in 0..4 {
///     pm.set_pixel(1, y, color::INK).unwrap();
///     pm.set_pixel(5, y, color::INK).unwrap();
///     pm.set_pixel(6, y, color::INK).unwrap();
/// }
/// let parts = segment(&pm.into()).unwrap();
/// assert_eq!(parts.len(), 2);
/// assert_eq!(parts.get_box(1).unwrap().w, 2);
/// ```
pub fn segment(pix: &Pix) -> RecogResult<Pixa> {
    let spans = find_column_spans(pix);
    let height = pix.height();
    let mut pixa = Pixa::with_capacity(spans.len());
    for (start, end) in spans {
        let w = end - start + 1;
        let part = pix.clip_rectangle(start, 0, w, height)?;
        debug!("segment at x={} width={}", start, w);
        pixa.push_with_box(part, Box::new(start as i32, 0, w as i32, height as i32)?);
    }
    info!("{} characters detected", pixa.len());
    Ok(pixa)
}

/// Segment an image into a [`Word`] of unidentified glyphs.
///
/// When a tagger is supplied every glyph is given its ratio and feature
/// classes.
pub fn segment_word(pix: &Pix, tagger: Option<&dyn GlyphTagger>) -> RecogResult<Word> {
    let word = segment(pix)?
        .into_iter()
        .map(|part| match tagger {
            Some(t) => Glyph::tagged(part, t),
            None => Glyph::new(part),
        })
        .collect();
    Ok(word)
}
