//! Glyphs and their identities
//!
//! A [`Glyph`] is one segmented character: a binarized bitmap plus, once
//! classified, the letter it was recognised as.

use bytewrite_core::Pix;
use std::fmt;

/// Label shown for a glyph that has not been classified
pub const UNKNOWN_LABEL: char = '?';

/// Area divisor for [`Glyph::size_value`]
const SIZE_DIVISOR: f32 = 1500.0;

/// The letter a glyph was identified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    /// The letter, `'a'..='z'`
    pub label: char,
    /// The letter's character code
    pub code: u32,
}

impl Identity {
    /// Create an identity for a letter.
    pub fn new(label: char) -> Self {
        Self {
            label,
            code: label as u32,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Pre-classification hints for a glyph.
///
/// Implementations bucket glyphs by aspect ratio and by coarse features
/// so a classifier could narrow its search. Nothing in this crate
/// computes these values; a glyph built without a tagger carries 0 for
/// both.
pub trait GlyphTagger {
    /// Aspect-ratio class of a bitmap
    fn ratio_class(&self, bitmap: &Pix) -> i32;

    /// Feature class of a bitmap
    fn feature_class(&self, bitmap: &Pix) -> i32;
}

/// A single character image
#[derive(Debug, Clone)]
pub struct Glyph {
    bitmap: Pix,
    identity: Option<Identity>,
    ratio_class: i32,
    feature_class: i32,
}

impl Glyph {
    /// Create an unidentified glyph.
    pub fn new(bitmap: Pix) -> Self {
        Self {
            bitmap,
            identity: None,
            ratio_class: 0,
            feature_class: 0,
        }
    }

    /// Create an unidentified glyph, asking `tagger` for its hints.
    pub fn tagged(bitmap: Pix, tagger: &dyn GlyphTagger) -> Self {
        let ratio_class = tagger.ratio_class(&bitmap);
        let feature_class = tagger.feature_class(&bitmap);
        Self {
            bitmap,
            identity: None,
            ratio_class,
            feature_class,
        }
    }

    /// Create a glyph with a known letter, as used for reference samples.
    pub fn labeled(bitmap: Pix, label: char) -> Self {
        Self {
            identity: Some(Identity::new(label)),
            ..Self::new(bitmap)
        }
    }

    /// The glyph's bitmap
    pub fn bitmap(&self) -> &Pix {
        &self.bitmap
    }

    /// The identity, if the glyph has been classified
    pub fn identity(&self) -> Option<Identity> {
        self.identity
    }

    /// The identified letter, or [`UNKNOWN_LABEL`]
    pub fn label(&self) -> char {
        self.identity.map_or(UNKNOWN_LABEL, |id| id.label)
    }

    /// Record the letter this glyph was identified as.
    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    /// Width-to-height ratio bucket, 0 unless tagged or set.
    pub fn ratio_class(&self) -> i32 {
        self.ratio_class
    }

    /// Record the ratio bucket.
    pub fn set_ratio_class(&mut self, class: i32) {
        self.ratio_class = class;
    }

    /// Structural feature bucket, 0 unless tagged or set.
    pub fn feature_class(&self) -> i32 {
        self.feature_class
    }

    /// Record the feature bucket.
    pub fn set_feature_class(&mut self, class: i32) {
        self.feature_class = class;
    }

    /// Scaled area of the bitmap, `width * height / 1500`.
    ///
    /// Used to judge whether a segment is plausibly a single character.
    pub fn size_value(&self) -> f32 {
        self.bitmap.width() as f32 * self.bitmap.height() as f32 / SIZE_DIVISOR
    }
}
